//! macOS backends for the RAM and swap queries, via `host_statistics64`
//! and `sysctl`.
//!
//! The mach host call has no libc binding, so it is declared by hand on
//! top of mach2's types, the same way the process collector declares the
//! `kinfo_proc` family.

#![allow(non_camel_case_types)]

use std::{
    mem::{size_of, MaybeUninit},
    ptr,
};

use libc::{c_int, c_uint, c_void, sysctl, xsw_usage};
use mach2::{
    kern_return::kern_return_t, message::mach_msg_type_number_t, port::mach_port_t,
    vm_types::integer_t,
};

use super::{
    check_kernel_return,
    counters::{VmCounters, VM_STATISTICS64_BYTES, VM_STATISTICS64_WORDS},
    RamUsage, SwapUsage,
};
use crate::utils::error::{KernelRequest, Result};

type host_flavor_t = integer_t;
type host_info64_t = *mut integer_t;

/// Statistics flavor selecting the 64-bit virtual memory counters.
const HOST_VM_INFO64: host_flavor_t = 4;

/// `sysctl` name for swap totals. See `sysctl.h`.
const CTL_VM: c_int = 2;
const VM_SWAPUSAGE: c_int = 5;

// The schema walk in `counters` mirrors this structure word for word; if
// the SDK ever grows the structure this stops compiling instead of
// silently misreading counters.
const _: () = assert!(size_of::<libc::vm_statistics64>() == VM_STATISTICS64_BYTES);

extern "C" {
    fn mach_host_self() -> mach_port_t;
    fn host_statistics64(
        host: mach_port_t, flavor: host_flavor_t, host_info64_out: host_info64_t,
        host_info64_out_cnt: *mut mach_msg_type_number_t,
    ) -> kern_return_t;
}

/// Query the kernel's virtual-memory counters and derive the RAM
/// categories from them.
pub fn get_ram_usage() -> Result<RamUsage> {
    let mut raw = [0u32; VM_STATISTICS64_WORDS];
    let mut count = VM_STATISTICS64_WORDS as mach_msg_type_number_t;

    // SAFETY: `raw` is exactly the documented size of `vm_statistics64`
    // and outlives the call; the kernel writes at most `count` words of
    // plain integer data into it.
    let status = unsafe {
        host_statistics64(
            mach_host_self(),
            HOST_VM_INFO64,
            raw.as_mut_ptr().cast(),
            &mut count,
        )
    };
    check_kernel_return(status, KernelRequest::HostVmInfo64)?;

    let counters = VmCounters::from_raw(&raw);
    Ok(RamUsage::from_counters(&counters))
}

/// Query swap totals. The kernel reports these in bytes already, so the
/// structure's fields are taken as-is.
pub fn get_swap_usage() -> Result<SwapUsage> {
    let mut name = [CTL_VM, VM_SWAPUSAGE];
    let mut usage = MaybeUninit::<xsw_usage>::uninit();
    let mut length = size_of::<xsw_usage>();

    // SAFETY: the output buffer matches the advertised length, and the
    // call takes no input payload.
    let status = unsafe {
        sysctl(
            name.as_mut_ptr(),
            name.len() as c_uint,
            usage.as_mut_ptr().cast::<c_void>(),
            &mut length,
            ptr::null_mut(),
            0,
        )
    };
    check_kernel_return(status, KernelRequest::VmSwapUsage)?;

    // SAFETY: a zero return means the kernel filled the structure.
    let usage = unsafe { usage.assume_init() };

    Ok(SwapUsage {
        total: usage.xsu_total,
        used: usage.xsu_used,
        free: usage.xsu_avail,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn live_ram_query_returns_a_consistent_record() {
        let ram = get_ram_usage().unwrap();

        // app memory includes active; available includes free pages, so
        // a live system can't report zero.
        assert!(ram.app_memory >= ram.active);
        assert!(ram.available > 0);
    }

    #[test]
    fn live_swap_query_is_internally_consistent() {
        let swap = get_swap_usage().unwrap();
        assert!(swap.used <= swap.total);
        assert!(swap.free <= swap.total);
    }
}
