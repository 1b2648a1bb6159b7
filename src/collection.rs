//! This is the main file to house data collection functions.

pub mod memory;

use memory::{RamUsage, SwapUsage};

use crate::utils::error::Result;

/// One point-in-time reading of the kernel memory interfaces. Every
/// collection re-queries the kernel; nothing is cached between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub ram: Option<RamUsage>,
    pub swap: Option<SwapUsage>,
}

impl MemorySnapshot {
    /// Run both kernel queries. A failure in either yields no snapshot at
    /// all; there are no partial results.
    pub fn collect() -> Result<Self> {
        Self::collect_sections(true, true)
    }

    /// Run only the requested queries. An unrequested query is never
    /// issued; a swap-only collection works even on platforms that have
    /// no RAM backend at all.
    pub fn collect_sections(ram: bool, swap: bool) -> Result<Self> {
        Ok(MemorySnapshot {
            ram: if ram { Some(memory::get_ram_usage()?) } else { None },
            swap: if swap {
                Some(memory::get_swap_usage()?)
            } else {
                None
            },
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[cfg(any(target_os = "macos", target_os = "linux"))]
    #[test]
    fn collect_gathers_both_sections() {
        let snapshot = MemorySnapshot::collect().unwrap();
        assert!(snapshot.ram.is_some());
        assert!(snapshot.swap.is_some());
    }

    #[test]
    fn unrequested_sections_are_not_queried() {
        // The swap backend exists everywhere, so this must succeed even
        // where the RAM query would report UnsupportedPlatform.
        let snapshot = MemorySnapshot::collect_sections(false, true).unwrap();
        assert!(snapshot.ram.is_none());
        assert!(snapshot.swap.is_some());

        let empty = MemorySnapshot::collect_sections(false, false).unwrap();
        assert_eq!(
            empty,
            MemorySnapshot {
                ram: None,
                swap: None
            }
        );
    }
}
