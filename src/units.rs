//! Memory units and the divisor table used to convert raw byte counts.

use std::{fmt, str::FromStr};

use crate::utils::error::MemsnapError;

pub const KIBI_LIMIT_F64: f64 = 1024.0;
pub const MEBI_LIMIT_F64: f64 = 1024.0 * 1024.0;
pub const GIBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0;
pub const TEBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

/// A memory unit the tool can report in. The set is closed, so an
/// unrecognized symbol can only ever surface as a parse failure
/// ([`MemsnapError::UnknownUnit`]), never as a bad lookup later on.
///
/// Symbols follow the common binary convention: each step is a factor
/// of 1024 over the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    B,
    KB,
    MB,
    #[default]
    GB,
    TB,
}

impl Unit {
    /// Every recognized unit, in ascending order of size.
    pub const ALL: [Unit; 5] = [Unit::B, Unit::KB, Unit::MB, Unit::GB, Unit::TB];

    /// The number of bytes one of this unit represents.
    #[inline]
    pub fn divisor(self) -> f64 {
        match self {
            Unit::B => 1.0,
            Unit::KB => KIBI_LIMIT_F64,
            Unit::MB => MEBI_LIMIT_F64,
            Unit::GB => GIBI_LIMIT_F64,
            Unit::TB => TEBI_LIMIT_F64,
        }
    }

    /// The display symbol for this unit.
    pub fn label(self) -> &'static str {
        match self {
            Unit::B => "B",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
        }
    }
}

impl FromStr for Unit {
    type Err = MemsnapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| s.eq_ignore_ascii_case(unit.label()))
            .ok_or_else(|| MemsnapError::UnknownUnit {
                symbol: s.to_string(),
            })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn divisor_table() {
        assert_eq!(Unit::B.divisor(), 1.0);
        assert_eq!(Unit::KB.divisor(), 1024.0);
        assert_eq!(Unit::MB.divisor(), 1_048_576.0);
        assert_eq!(Unit::GB.divisor(), 1_073_741_824.0);
        assert_eq!(Unit::TB.divisor(), 1_099_511_627_776.0);
    }

    #[test]
    fn parses_known_symbols() {
        assert_eq!("B".parse::<Unit>().unwrap(), Unit::B);
        assert_eq!("KB".parse::<Unit>().unwrap(), Unit::KB);
        assert_eq!("MB".parse::<Unit>().unwrap(), Unit::MB);
        assert_eq!("GB".parse::<Unit>().unwrap(), Unit::GB);
        assert_eq!("TB".parse::<Unit>().unwrap(), Unit::TB);
    }

    #[test]
    fn parsing_ignores_ascii_case() {
        assert_eq!("gb".parse::<Unit>().unwrap(), Unit::GB);
        assert_eq!("Mb".parse::<Unit>().unwrap(), Unit::MB);
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(
            "XX".parse::<Unit>(),
            Err(MemsnapError::UnknownUnit {
                symbol: "XX".to_string()
            })
        );
        assert!("".parse::<Unit>().is_err());
        assert!("KiB".parse::<Unit>().is_err());
    }
}
