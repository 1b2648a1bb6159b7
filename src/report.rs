//! Turning converted usage records into the printed report. All display
//! rounding lives here; the records themselves carry full f64 precision.
//!
//! The reporter renders exactly the records it is handed; deciding which
//! sections to collect happens upstream.

use std::fmt::Write;

use crate::collection::memory::{ConvertedRamUsage, ConvertedSwapUsage};

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 10;

fn push_row(out: &mut String, label: &str, value: f64, unit: &str) {
    // Two decimals is enough for any unit worth reading in.
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$.2} {unit}");
}

fn render_ram(out: &mut String, ram: &ConvertedRamUsage) {
    let unit = ram.unit.label();
    out.push_str("RAM usage:\n");
    push_row(out, "wired:", ram.wired, unit);
    push_row(out, "active:", ram.active, unit);
    push_row(out, "app memory:", ram.app_memory, unit);
    push_row(out, "compressed:", ram.compressed, unit);
    push_row(out, "available:", ram.available, unit);
}

fn render_swap(out: &mut String, swap: &ConvertedSwapUsage) {
    let unit = swap.unit.label();
    out.push_str("Swap usage:\n");
    push_row(out, "total:", swap.total, unit);
    push_row(out, "used:", swap.used, unit);
    push_row(out, "free:", swap.free, unit);
}

/// Render the report the binary prints, one section per record present.
pub fn render(ram: Option<&ConvertedRamUsage>, swap: Option<&ConvertedSwapUsage>) -> String {
    let mut out = String::new();

    if let Some(ram) = ram {
        render_ram(&mut out, ram);
    }
    if let Some(swap) = swap {
        render_swap(&mut out, swap);
    }

    out
}

/// Print the report to stdout.
pub fn print_report(ram: Option<&ConvertedRamUsage>, swap: Option<&ConvertedSwapUsage>) {
    print!("{}", render(ram, swap));
}
