#![warn(rust_2018_idioms)]
#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

use anyhow::{Context, Result};
use clap::Parser;
use memsnap::{collection::MemorySnapshot, options, options::args::MemsnapArgs, report};

fn main() -> Result<()> {
    let args = MemsnapArgs::parse();

    #[cfg(all(feature = "fern", debug_assertions))]
    {
        memsnap::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let config = options::get_or_create_config(args.config_location.as_deref())
        .context("Unable to properly parse or create the config file.")?;
    let settings = options::init(&args, &config)?;

    let snapshot = MemorySnapshot::collect_sections(settings.show_ram, settings.show_swap)?;
    #[cfg(feature = "log")]
    debug!("collected snapshot: {snapshot:?}");

    let ram = snapshot.ram.map(|ram| ram.convert_to(settings.unit));
    let swap = snapshot.swap.map(|swap| swap.convert_to(settings.unit));
    report::print_report(ram.as_ref(), swap.as_ref());

    Ok(())
}
