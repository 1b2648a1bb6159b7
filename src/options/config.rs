//! The config file layout. Everything is optional; the merge against CLI
//! arguments happens in [`crate::options`].

use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Default memory unit, overridden by `--unit`.
    pub(crate) unit: Option<String>,
    /// Only report RAM usage, as with `--ram`.
    pub(crate) ram: Option<bool>,
    /// Only report swap usage, as with `--swap`.
    pub(crate) swap: Option<bool>,
}

/// Written out when no config file exists yet.
pub const DEFAULT_CONFIG_CONTENT: &str = "\
# Configuration for memsnap. All settings here can be overridden on the
# command line.

# Default memory unit: one of B, KB, MB, GB, TB.
# unit = \"GB\"

# Report only one of the two sections.
# ram = true
# swap = true
";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_is_valid() {
        let config: Config = toml_edit::de::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn default_template_only_sets_comments() {
        let config: Config = toml_edit::de::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn fields_deserialize() {
        let config: Config = toml_edit::de::from_str("unit = \"MB\"\nram = true\n").unwrap();
        assert_eq!(config.unit.as_deref(), Some("MB"));
        assert_eq!(config.ram, Some(true));
        assert_eq!(config.swap, None);
    }

    #[test]
    fn unknown_values_fail_to_parse() {
        assert!(toml_edit::de::from_str::<Config>("unit = 3").is_err());
        assert!(toml_edit::de::from_str::<Config>("not toml at all [").is_err());
    }
}
