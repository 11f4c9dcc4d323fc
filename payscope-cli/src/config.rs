//! payscope configuration loading from `.payscope.toml`.
//!
//! Configuration is optional. Every setting has a default and command-line
//! flags override whatever the file says.
//!
//! # Example Configuration
//!
//! ```toml
//! [data]
//! input = "data/employees.csv"
//! output = "data/processed_employees.csv"
//! delimiter = ","
//!
//! [analytics]
//! top_n = 5
//! high_threshold = 85
//! medium_threshold = 70
//! promotion_min_years = 4
//! promotion_min_score = 80
//!
//! [output]
//! format = "table"
//! color = true
//!
//! [server]
//! host = "127.0.0.1"
//! port = 9130
//! ```

use payscope_core::pipeline::DEFAULT_TOP_N;
use payscope_core::Thresholds;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".payscope.toml";

pub const DEFAULT_INPUT: &str = "employees.csv";
pub const DEFAULT_OUTPUT: &str = "processed_employees.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9130;

/// Root configuration structure loaded from `.payscope.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct PayscopeConfig {
    /// Dataset locations and format.
    #[serde(default)]
    pub data: DataSettings,

    /// Classification cut-offs and ranking size.
    #[serde(default)]
    pub analytics: AnalyticsSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Defaults for `payscope serve`.
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Default)]
pub struct DataSettings {
    /// Dataset read by every command.
    #[serde(default)]
    pub input: Option<String>,

    /// Where `payscope export` writes the processed file.
    #[serde(default)]
    pub output: Option<String>,

    /// Single-character field delimiter.
    #[serde(default)]
    pub delimiter: Option<String>,
}

/// Overrides for the default cut-offs. Unset fields keep their defaults.
#[derive(Debug, Deserialize, Default)]
pub struct AnalyticsSettings {
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub high_threshold: Option<f64>,
    #[serde(default)]
    pub medium_threshold: Option<f64>,
    #[serde(default)]
    pub promotion_min_years: Option<u32>,
    #[serde(default)]
    pub promotion_min_score: Option<f64>,
}

/// Output formatting preferences.
///
/// Distinct from the runtime `OutputConfig` in the output module, which
/// handles actual rendering.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `table`, `json`, `csv`, `markdown`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Auto-detected when unset.
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ServerSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl PayscopeConfig {
    /// Load configuration from `.payscope.toml` in the given directory.
    ///
    /// A missing file yields defaults. Read and parse errors are logged as
    /// warnings and also yield defaults.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.data.input.as_deref().unwrap_or(DEFAULT_INPUT))
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.data.output.as_deref().unwrap_or(DEFAULT_OUTPUT))
    }

    /// Configured delimiter as a byte. Anything but one ASCII character is
    /// ignored with a warning.
    pub fn delimiter(&self) -> u8 {
        match self.data.delimiter.as_deref() {
            None => b',',
            Some(d) if d.len() == 1 && d.is_ascii() => d.as_bytes()[0],
            Some("\\t") => b'\t',
            Some(other) => {
                tracing::warn!("Ignoring delimiter '{}': expected one ASCII character", other);
                b','
            }
        }
    }

    /// Default cut-offs with the configured overrides applied.
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        let a = &self.analytics;
        Thresholds {
            high: a.high_threshold.unwrap_or(defaults.high),
            medium: a.medium_threshold.unwrap_or(defaults.medium),
            promotion_min_years: a.promotion_min_years.unwrap_or(defaults.promotion_min_years),
            promotion_min_score: a.promotion_min_score.unwrap_or(defaults.promotion_min_score),
        }
    }

    pub fn top_n(&self) -> usize {
        self.analytics.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    pub fn server_host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn server_port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }
}
