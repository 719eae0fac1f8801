//! Benchmark configuration
//!
//! Values come from three layers, highest priority first: command-line
//! flags, an optional TOML file, built-in defaults.
//!
//! # Example
//!
//! ```toml
//! [bench]
//! n = 50
//! repeat = 1000
//! format = "bench"
//! expect = 12586269025
//! ```

use fib_core::{DEFAULT_N, ReportFormat};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Error loading or validating configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io(std::io::Error),
    /// The config file is not valid TOML for this schema
    Parse(toml::de::Error),
    /// A value is out of range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
            ConfigError::Invalid(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// On-disk layout of a config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    bench: Overrides,
}

/// Optional settings from one layer. Unset fields fall through to the
/// layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub n: Option<i64>,
    pub repeat: Option<u32>,
    pub format: Option<ReportFormat>,
    pub expect: Option<i64>,
}

impl Overrides {
    /// Parse the `[bench]` table of a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.bench)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Layer `self` over `lower`: fields set here win.
    pub fn over(self, lower: Overrides) -> Overrides {
        Overrides {
            n: self.n.or(lower.n),
            repeat: self.repeat.or(lower.repeat),
            format: self.format.or(lower.format),
            expect: self.expect.or(lower.expect),
        }
    }
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Fibonacci index to compute
    pub n: i64,
    /// Runs inside the timed window
    pub repeat: u32,
    pub format: ReportFormat,
    /// Answer the run must produce, if any
    pub expect: Option<i64>,
    /// Reject indices whose answer would wrap. Set whenever `n` was
    /// chosen explicitly rather than defaulted.
    pub checked: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            n: DEFAULT_N,
            repeat: 1,
            format: ReportFormat::Plain,
            expect: None,
            checked: false,
        }
    }
}

impl BenchConfig {
    /// Fill unset fields with defaults and validate ranges.
    pub fn resolve(overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = BenchConfig::default();

        if let Some(n) = overrides.n.filter(|n| *n < 0) {
            return Err(ConfigError::Invalid(format!(
                "n must be non-negative, got {}",
                n
            )));
        }
        if overrides.repeat == Some(0) {
            return Err(ConfigError::Invalid(
                "repeat must be at least 1".to_string(),
            ));
        }

        Ok(BenchConfig {
            n: overrides.n.unwrap_or(defaults.n),
            repeat: overrides.repeat.unwrap_or(defaults.repeat),
            format: overrides.format.unwrap_or(defaults.format),
            expect: overrides.expect,
            checked: overrides.n.is_some(),
        })
    }
}
