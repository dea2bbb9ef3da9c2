//! Lab configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use lehmer_analysis::AnalyzerConfig;
use lehmer_core::{GeneratorState, LehmerError};
use lehmer_sampling::{
    Distribution, StreamParamRanges, TriangleMode, DEFAULT_NORMAL_STREAMS, MODULUS_RANGE,
    MULTIPLIER_RANGE, SEED_RANGE,
};
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable for the stream parameter seed.
pub const ENV_SEED: &str = "LEHMER_SEED";
/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "LEHMER_LOG_LEVEL";
/// Environment variable for the lab 2 sample size.
pub const ENV_SAMPLES: &str = "LEHMER_SAMPLES";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {var}: '{value}' is not a non-negative integer")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Invalid(#[from] LehmerError),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Tracing filter directive for this level
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Inclusive `[min, max]` bounds as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ParamRange {
    pub min: u64,
    pub max: u64,
}

impl From<RangeInclusive<u64>> for ParamRange {
    fn from(range: RangeInclusive<u64>) -> Self {
        Self {
            min: *range.start(),
            max: *range.end(),
        }
    }
}

impl From<ParamRange> for RangeInclusive<u64> {
    fn from(range: ParamRange) -> Self {
        range.min..=range.max
    }
}

/// Ranges for the per-stream `(seed, multiplier, modulus)` draw.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StreamRangeConfig {
    pub seed: ParamRange,
    pub multiplier: ParamRange,
    pub modulus: ParamRange,
}

impl Default for StreamRangeConfig {
    fn default() -> Self {
        Self {
            seed: SEED_RANGE.into(),
            multiplier: MULTIPLIER_RANGE.into(),
            modulus: MODULUS_RANGE.into(),
        }
    }
}

impl From<&StreamRangeConfig> for StreamParamRanges {
    fn from(config: &StreamRangeConfig) -> Self {
        StreamParamRanges {
            seed: config.seed.into(),
            multiplier: config.multiplier.into(),
            modulus: config.modulus.into(),
        }
    }
}

/// Lab 1: one fixed generator analysed end to end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Lab1Config {
    pub seed: u64,
    pub multiplier: u64,
    pub modulus: u64,
    pub count: usize,
}

impl Default for Lab1Config {
    fn default() -> Self {
        Self {
            seed: 15,
            multiplier: 1643,
            modulus: 12_031_278,
            count: 1_000_000,
        }
    }
}

impl Lab1Config {
    /// Validated generator state for the configured parameters
    pub fn state(&self) -> Result<GeneratorState, LehmerError> {
        GeneratorState::new(self.seed, self.multiplier, self.modulus)
    }
}

/// Lab 2: derived distributions sampled from random streams.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Lab2Config {
    pub samples: usize,
    pub distributions: Vec<Distribution>,
}

impl Default for Lab2Config {
    fn default() -> Self {
        Self {
            samples: 100_000,
            distributions: default_distributions(),
        }
    }
}

fn default_distributions() -> Vec<Distribution> {
    vec![
        Distribution::Uniform { a: 2.0, b: 5.0 },
        Distribution::Normal {
            mean: 3.0,
            sigma: 1.0,
            streams: DEFAULT_NORMAL_STREAMS,
        },
        Distribution::Exponential { lambda: 2.0 },
        Distribution::Gamma {
            lambda: 1.0,
            shape: 6,
        },
        Distribution::Triangle {
            a: -4.0,
            b: 5.0,
            mode: TriangleMode::MinOf,
        },
        Distribution::Simpson { a: 4.0, b: 8.0 },
    ]
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Seed for stream parameter draws; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Number of histogram bins per sequence
    pub histogram_bins: usize,
    /// Period analysis settings
    pub analysis: AnalyzerConfig,
    /// Stream parameter ranges
    pub streams: StreamRangeConfig,
    pub lab1: Lab1Config,
    pub lab2: Lab2Config,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            seed: None,
            histogram_bins: 20,
            analysis: AnalyzerConfig::default(),
            streams: StreamRangeConfig::default(),
            lab1: Lab1Config::default(),
            lab2: Lab2Config::default(),
        }
    }
}

impl LabConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LabConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values found through `lookup` (normally the process environment)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_number(ENV_SEED, &seed)?);
        }
        if let Some(samples) = lookup(ENV_SAMPLES) {
            self.lab2.samples = parse_number(ENV_SAMPLES, &samples)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(samples) = cli.samples {
            self.lab2.samples = samples;
        }
        if let Some(count) = cli.count {
            self.lab1.count = count;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bins == 0 {
            return Err(LehmerError::invalid("histogram_bins", "must be positive").into());
        }
        self.analysis.validate()?;
        self.stream_ranges().validate()?;
        self.lab1.state()?;
        if self.lab1.count == 0 {
            return Err(LehmerError::invalid("lab1.count", "must be positive").into());
        }
        if self.lab2.samples == 0 {
            return Err(LehmerError::invalid("lab2.samples", "must be positive").into());
        }
        Ok(())
    }

    /// Stream parameter ranges in library form
    pub fn stream_ranges(&self) -> StreamParamRanges {
        StreamParamRanges::from(&self.streams)
    }
}

fn parse_number<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Stream parameter seed override
    pub seed: Option<u64>,
    /// Lab 2 sample size override
    pub samples: Option<usize>,
    /// Lab 1 sequence length override
    pub count: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<LabConfig, ConfigError> {
    build_config_with_env(cli, |var| std::env::var(var).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<LabConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => LabConfig::from_file(path)?,
        None => LabConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}
