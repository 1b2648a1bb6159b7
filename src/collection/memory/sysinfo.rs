//! Collecting swap data using sysinfo, for platforms without a native
//! control-query backend. sysinfo reports swap in bytes, which is what
//! [`SwapUsage`] carries, so no derivation is needed.

use sysinfo::System;

use super::SwapUsage;
use crate::utils::error::Result;

/// Returns swap usage.
pub fn get_swap_usage() -> Result<SwapUsage> {
    let mut sys = System::new();
    sys.refresh_memory();

    Ok(SwapUsage {
        total: sys.total_swap(),
        used: sys.used_swap(),
        free: sys.free_swap(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn swap_totals_are_consistent() {
        let swap = get_swap_usage().unwrap();
        assert!(swap.used <= swap.total);
        assert!(swap.free <= swap.total);
    }
}
