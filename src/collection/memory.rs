//! Memory and swap data collection.
//!
//! The RAM query returns page counts split into the five categories the
//! kernel accounts for (see [`RamUsage`]); the swap query returns byte
//! counts. Raw records are immutable snapshots and conversion into a
//! display unit never mutates them.

pub mod counters;

use std::io;

use crate::{
    units::Unit,
    utils::error::{KernelRequest, MemsnapError, Result},
};

cfg_if::cfg_if! {
    if #[cfg(target_os = "macos")] {
        pub mod macos;
        pub use self::macos::{get_ram_usage, get_swap_usage};
    } else if #[cfg(target_os = "linux")] {
        pub mod linux;
        pub mod sysinfo;
        pub use self::linux::get_ram_usage;
        pub use self::sysinfo::get_swap_usage;
    } else {
        pub mod sysinfo;
        pub use self::sysinfo::get_swap_usage;

        /// There is no RAM-category backend for this platform.
        pub fn get_ram_usage() -> Result<RamUsage> {
            Err(MemsnapError::UnsupportedPlatform {
                what: "virtual memory statistics",
            })
        }
    }
}

/// The fixed page size used for all page-count accounting, in bytes.
pub const PAGE_SIZE: u64 = 4096;

/// RAM usage in memory pages of [`PAGE_SIZE`] bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RamUsage {
    /// Pages pinned in physical memory, never paged out.
    pub wired: u64,
    /// Pages recently used and resident.
    pub active: u64,
    /// Memory directly attributable to user applications
    /// (active + purgeable pages).
    pub app_memory: u64,
    /// Pages held in compressed form to free physical space.
    pub compressed: u64,
    /// Memory reclaimable without paging (inactive + free pages).
    pub available: u64,
}

/// Swap usage in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// [`RamUsage`] converted into a display unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertedRamUsage {
    pub wired: f64,
    pub active: f64,
    pub app_memory: f64,
    pub compressed: f64,
    pub available: f64,
    pub unit: Unit,
}

/// [`SwapUsage`] converted into a display unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvertedSwapUsage {
    pub total: f64,
    pub used: f64,
    pub free: f64,
    pub unit: Unit,
}

impl RamUsage {
    /// Convert every page count into `unit`. Each count is scaled by
    /// [`PAGE_SIZE`] and divided by the unit's byte divisor; the math is
    /// done in f64 so even absurd counts cannot overflow.
    pub fn convert_to(&self, unit: Unit) -> ConvertedRamUsage {
        let pages = |count: u64| (count as f64) * (PAGE_SIZE as f64) / unit.divisor();

        ConvertedRamUsage {
            wired: pages(self.wired),
            active: pages(self.active),
            app_memory: pages(self.app_memory),
            compressed: pages(self.compressed),
            available: pages(self.available),
            unit,
        }
    }

    /// Like [`RamUsage::convert_to`], but resolves a unit symbol first.
    /// Fails with [`MemsnapError::UnknownUnit`] for symbols outside the
    /// table, producing no converted record.
    pub fn convert_to_symbol(&self, symbol: &str) -> Result<ConvertedRamUsage> {
        Ok(self.convert_to(symbol.parse()?))
    }
}

impl SwapUsage {
    /// Convert every byte count into `unit`.
    pub fn convert_to(&self, unit: Unit) -> ConvertedSwapUsage {
        let bytes = |count: u64| (count as f64) / unit.divisor();

        ConvertedSwapUsage {
            total: bytes(self.total),
            used: bytes(self.used),
            free: bytes(self.free),
            unit,
        }
    }

    /// Like [`SwapUsage::convert_to`], but resolves a unit symbol first.
    pub fn convert_to_symbol(&self, symbol: &str) -> Result<ConvertedSwapUsage> {
        Ok(self.convert_to(symbol.parse()?))
    }

    /// Return the use percentage, or `None` when no swap is configured.
    #[inline]
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.used as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Turn a kernel call's return status into a `Result`, capturing the OS
/// error alongside the request that failed. Both `host_statistics64` and
/// `sysctl` report success as zero.
pub fn check_kernel_return(status: i32, request: KernelRequest) -> Result<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(MemsnapError::KernelCallFailed {
            request,
            errno: format!("{} (return code {status})", io::Error::last_os_error()),
        })
    }
}
