//! Mapping of the kernel's raw virtual-memory counter array into named
//! 64-bit counters.
//!
//! `host_statistics64` fills a fixed-layout `vm_statistics64` structure,
//! which we read as an ordered array of 32-bit words. Field meaning is
//! purely positional: narrow counters occupy one word, wide counters two
//! (low word first, then high word). [`VmCounters::from_raw`] walks that
//! layout in declared order, so every counter ends up in a named struct
//! field and a "missing counter" cannot exist at runtime.
//!
//! This module is pure integer math and compiles on every platform; only
//! the macOS backend feeds it real kernel data.

use crate::collection::memory::RamUsage;

/// Documented size of `vm_statistics64` in bytes.
pub const VM_STATISTICS64_BYTES: usize = 152;

/// Length of the raw counter array: the structure size in 32-bit words.
pub const VM_STATISTICS64_WORDS: usize = VM_STATISTICS64_BYTES / std::mem::size_of::<u32>();

/// Combine a two-word counter into its 64-bit value.
///
/// The kernel stores wide counters as a low word followed by a high word;
/// the true value is `low + high * 2^32`.
#[inline]
pub fn combine_words(low: u32, high: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// In-order reader over the raw counter array.
struct Cursor<'a> {
    raw: &'a [u32; VM_STATISTICS64_WORDS],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(raw: &'a [u32; VM_STATISTICS64_WORDS]) -> Self {
        Cursor { raw, index: 0 }
    }

    /// Read a single-word counter.
    fn word(&mut self) -> u64 {
        let value = self.raw[self.index];
        self.index += 1;
        u64::from(value)
    }

    /// Read a two-word counter (low word, then high word).
    fn pair(&mut self) -> u64 {
        let value = combine_words(self.raw[self.index], self.raw[self.index + 1]);
        self.index += 2;
        value
    }

    /// Every word of the array must have been consumed; anything else
    /// means the declared layout and the structure size disagree, which
    /// is a bug in this file, not a runtime condition.
    fn finish(self) {
        assert_eq!(
            self.index,
            VM_STATISTICS64_WORDS,
            "vm_statistics64 layout walk consumed the wrong number of words"
        );
    }
}

/// The named counters of `vm_statistics64`, all widened to u64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VmCounters {
    pub free: u64,
    pub active: u64,
    pub inactive: u64,
    pub wired: u64,
    pub zero_filled: u64,
    pub reactivations: u64,
    pub pageins: u64,
    pub pageouts: u64,
    pub faults: u64,
    pub cow_faults: u64,
    pub lookups: u64,
    pub hits: u64,
    pub purges: u64,
    pub purgeable: u64,
    pub speculative: u64,
    pub decompressions: u64,
    pub compressions: u64,
    pub swapins: u64,
    pub swapouts: u64,
    pub compressor_pages: u64,
    pub throttled: u64,
    pub external_pages: u64,
    pub internal_pages: u64,
    pub total_uncompressed_in_compressor: u64,
}

impl VmCounters {
    /// Walk the raw word array in the structure's declared order.
    ///
    /// Struct literal fields are evaluated top to bottom, so the cursor
    /// consumes words in exactly the order they are listed here. Do not
    /// reorder these fields without reordering the kernel structure.
    pub fn from_raw(raw: &[u32; VM_STATISTICS64_WORDS]) -> Self {
        let mut cursor = Cursor::new(raw);

        let counters = VmCounters {
            free: cursor.word(),
            active: cursor.word(),
            inactive: cursor.word(),
            wired: cursor.word(),
            zero_filled: cursor.pair(),
            reactivations: cursor.pair(),
            pageins: cursor.pair(),
            pageouts: cursor.pair(),
            faults: cursor.pair(),
            cow_faults: cursor.pair(),
            lookups: cursor.pair(),
            hits: cursor.pair(),
            purges: cursor.pair(),
            purgeable: cursor.word(),
            speculative: cursor.word(),
            decompressions: cursor.pair(),
            compressions: cursor.pair(),
            swapins: cursor.pair(),
            swapouts: cursor.pair(),
            compressor_pages: cursor.word(),
            throttled: cursor.word(),
            external_pages: cursor.word(),
            internal_pages: cursor.word(),
            total_uncompressed_in_compressor: cursor.pair(),
        };
        cursor.finish();

        counters
    }
}

impl RamUsage {
    /// Derive the reported RAM categories from the named counters.
    ///
    /// Sums saturate rather than wrap; a counter pair near u64::MAX would
    /// otherwise report a tiny value instead of a pegged one.
    pub fn from_counters(counters: &VmCounters) -> Self {
        RamUsage {
            wired: counters.wired,
            active: counters.active,
            app_memory: counters.active.saturating_add(counters.purgeable),
            compressed: counters.compressor_pages,
            available: counters.inactive.saturating_add(counters.free),
        }
    }
}
