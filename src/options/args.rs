// Argument parsing via clap.
//
// Note that you probably want to keep this as a single, self-contained
// file so the build script can include it for completion generation
// without tripping over the rest of the crate.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "msnap [OPTIONS]";

/// The arguments for memsnap.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    help_template = TEMPLATE,
    override_usage = USAGE,
    color = ColorChoice::Auto,
)]
pub struct MemsnapArgs {
    /// Memory unit to report in: B, KB, MB, GB or TB. Defaults to GB.
    #[arg(short = 'u', long = "unit", value_name = "UNIT")]
    pub unit: Option<String>,

    /// Only report RAM usage.
    #[arg(long = "ram", conflicts_with = "swap")]
    pub ram: bool,

    /// Only report swap usage.
    #[arg(long = "swap")]
    pub swap: bool,

    /// Path to the config file. Uses (and creates) the default location
    /// if unset.
    #[arg(short = 'C', long = "config_location", value_name = "PATH")]
    pub config_location: Option<PathBuf>,
}
