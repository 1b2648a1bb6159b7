//! Linux backend for the RAM query, from `/proc/meminfo`.
//!
//! Linux does not expose the mach-style category split directly, so the
//! closest kernel counters stand in for each category: `Unevictable` for
//! wired pages, `Active` for active pages, `SReclaimable` for purgeable
//! memory, and `Zswapped` (absent on kernels without zswap, read as zero)
//! for compressed memory. The derivation algebra is the same as on the
//! reference platform: app memory = active + purgeable, available =
//! inactive + free.

use std::fs;

use super::{RamUsage, PAGE_SIZE};
use crate::utils::error::Result;

const MEMINFO_PATH: &str = "/proc/meminfo";

#[derive(Debug, Default, PartialEq, Eq)]
struct Meminfo {
    free_kib: u64,
    active_kib: u64,
    inactive_kib: u64,
    unevictable_kib: u64,
    reclaimable_kib: u64,
    zswapped_kib: u64,
}

impl Meminfo {
    /// Pull the interesting rows out of `/proc/meminfo` text. Rows are
    /// `Name:   <value> kB`; missing rows stay zero.
    fn parse(contents: &str) -> Self {
        let mut meminfo = Meminfo::default();

        for line in contents.lines() {
            let mut parts = line.split_whitespace();
            let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Ok(value) = value.parse::<u64>() else {
                continue;
            };

            match name {
                "MemFree:" => meminfo.free_kib = value,
                "Active:" => meminfo.active_kib = value,
                "Inactive:" => meminfo.inactive_kib = value,
                "Unevictable:" => meminfo.unevictable_kib = value,
                "SReclaimable:" => meminfo.reclaimable_kib = value,
                "Zswapped:" => meminfo.zswapped_kib = value,
                _ => {}
            }
        }

        meminfo
    }
}

/// Convert a meminfo kB figure into 4096-byte pages. Saturates rather
/// than wraps on a pathological row, like the rest of the derivation.
#[inline]
fn kib_to_pages(kib: u64) -> u64 {
    kib.saturating_mul(1024) / PAGE_SIZE
}

fn ram_usage_from_meminfo(meminfo: &Meminfo) -> RamUsage {
    let active = kib_to_pages(meminfo.active_kib);
    let purgeable = kib_to_pages(meminfo.reclaimable_kib);

    RamUsage {
        wired: kib_to_pages(meminfo.unevictable_kib),
        active,
        app_memory: active.saturating_add(purgeable),
        compressed: kib_to_pages(meminfo.zswapped_kib),
        available: kib_to_pages(meminfo.inactive_kib).saturating_add(kib_to_pages(meminfo.free_kib)),
    }
}

/// Read the RAM categories from `/proc/meminfo`.
pub fn get_ram_usage() -> Result<RamUsage> {
    let contents = fs::read_to_string(MEMINFO_PATH)?;
    Ok(ram_usage_from_meminfo(&Meminfo::parse(&contents)))
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = "\
MemTotal:       16256332 kB
MemFree:         8024000 kB
MemAvailable:   12000000 kB
Buffers:          102400 kB
Cached:          2048000 kB
Active:          3072000 kB
Inactive:        1536000 kB
Active(anon):    2000000 kB
Unevictable:       64000 kB
Mlocked:           64000 kB
SwapTotal:       2097148 kB
SwapFree:        2097148 kB
Zswap:             12288 kB
Zswapped:          40960 kB
SReclaimable:     128000 kB
";

    #[test]
    fn parses_the_rows_we_report() {
        let meminfo = Meminfo::parse(SAMPLE);
        assert_eq!(
            meminfo,
            Meminfo {
                free_kib: 8_024_000,
                active_kib: 3_072_000,
                inactive_kib: 1_536_000,
                unevictable_kib: 64_000,
                reclaimable_kib: 128_000,
                zswapped_kib: 40_960,
            }
        );
    }

    #[test]
    fn missing_rows_read_as_zero() {
        let meminfo = Meminfo::parse("MemFree:  100 kB\n");
        assert_eq!(meminfo.free_kib, 100);
        assert_eq!(meminfo.zswapped_kib, 0);
        assert_eq!(meminfo.active_kib, 0);
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let meminfo = Meminfo::parse("Active: not-a-number kB\nnonsense\n\nActive: 8 kB\n");
        assert_eq!(meminfo.active_kib, 8);
    }

    #[test]
    fn pathological_rows_saturate_instead_of_wrapping() {
        assert_eq!(kib_to_pages(u64::MAX), u64::MAX / PAGE_SIZE);
        assert_eq!(kib_to_pages(0), 0);
    }

    #[test]
    fn categories_derive_in_pages() {
        let ram = ram_usage_from_meminfo(&Meminfo::parse(SAMPLE));

        // 1 kB row = 1024 bytes; 4 rows' kB / 4 = pages.
        assert_eq!(ram.wired, 16_000);
        assert_eq!(ram.active, 768_000);
        assert_eq!(ram.app_memory, 768_000 + 32_000);
        assert_eq!(ram.compressed, 10_240);
        assert_eq!(ram.available, 384_000 + 2_006_000);
    }
}
