//! Merging CLI arguments and the config file into the settings a run
//! actually uses. Arguments win over config values, which win over
//! defaults.

pub mod args;
pub mod config;

use std::{fs, path::Path};

use args::MemsnapArgs;
use config::Config;

use crate::{
    units::Unit,
    utils::error::{MemsnapError, Result},
};

const DEFAULT_CONFIG_FILE_LOCATION: &str = "memsnap/memsnap.toml";

/// Settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub unit: Unit,
    pub show_ram: bool,
    pub show_swap: bool,
}

/// Load the config file, or create a commented template at the chosen
/// location on first run. With no explicit path and no user config
/// directory, runs on defaults without touching the filesystem.
pub fn get_or_create_config(override_path: Option<&Path>) -> Result<Config> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => dirs::config_dir().map(|base| base.join(DEFAULT_CONFIG_FILE_LOCATION)),
    };

    match path {
        Some(path) if path.exists() => {
            let contents = fs::read_to_string(&path).map_err(|err| {
                MemsnapError::InvalidConfig(format!("couldn't read '{}', {err}", path.display()))
            })?;
            Ok(toml_edit::de::from_str(&contents)?)
        }
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, config::DEFAULT_CONFIG_CONTENT)?;
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

/// Merge arguments over the config file.
pub fn init(args: &MemsnapArgs, config: &Config) -> Result<Settings> {
    let unit = match args.unit.as_deref().or(config.unit.as_deref()) {
        Some(symbol) => symbol.parse()?,
        None => Unit::default(),
    };

    // An explicit --ram or --swap overrides whatever the config says;
    // clap already rejects passing both. A config that sets both just
    // means "show everything".
    let ram_only = args.ram || (!args.swap && config.ram.unwrap_or(false));
    let swap_only = args.swap || (!args.ram && config.swap.unwrap_or(false));
    let (show_ram, show_swap) = match (ram_only, swap_only) {
        (true, false) => (true, false),
        (false, true) => (false, true),
        _ => (true, true),
    };

    Ok(Settings {
        unit,
        show_ram,
        show_swap,
    })
}
