//! Analyzer metadata and run configuration.
//!
//! The check has a single option, `ignore-nil`. It is read once per run and
//! applies to every switch.

use thiserror::Error;

/// Description of one command-line flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub doc: &'static str,
    pub default: bool,
}

/// Static description of the analyzer, for drivers that list or document
/// their checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Analyzer {
    pub name: &'static str,
    pub doc: &'static str,
    pub flags: &'static [FlagSpec],
}

impl Analyzer {
    /// Look up a flag by name (without leading dashes).
    pub fn flag(&self, name: &str) -> Option<&'static FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }
}

pub const ANALYZER: Analyzer = Analyzer {
    name: "exhaust",
    doc: "checks exhaustivity of type switches",
    flags: &[FlagSpec {
        name: IGNORE_NIL,
        doc: "check for exhaustive match even with nil or default case",
        default: false,
    }],
};

const IGNORE_NIL: &str = "ignore-nil";

/// Configuration for one run of the check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExhaustConfig {
    /// When `false`, a `default` clause or a `nil` case makes a switch
    /// exhaustive. When `true`, such clauses do not count and every
    /// implementor must be listed.
    pub ignore_nil: bool,
}

/// Error parsing analyzer flags.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),

    #[error("invalid boolean value {value:?} for -{flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

impl ExhaustConfig {
    pub fn new(ignore_nil: bool) -> Self {
        ExhaustConfig { ignore_nil }
    }

    /// Parse command-line style flags.
    ///
    /// Accepts `-ignore-nil`, `--ignore-nil` and the `=<bool>` forms of both.
    /// Later flags override earlier ones.
    pub fn from_flags<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = ExhaustConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            let Some(flag) = arg
                .strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .filter(|rest| !rest.is_empty() && !rest.starts_with('-'))
            else {
                return Err(ConfigError::UnexpectedArgument(arg.to_string()));
            };

            let (name, value) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (flag, None),
            };
            if ANALYZER.flag(name).is_none() {
                return Err(ConfigError::UnknownFlag(name.to_string()));
            }

            config.ignore_nil = match value {
                None => true,
                Some(value) => parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                    flag: name.to_string(),
                    value: value.to_string(),
                })?,
            };
        }
        Ok(config)
    }
}

/// Parse a boolean flag value.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
