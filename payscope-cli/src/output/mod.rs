//! Output formatting module for the payscope CLI
//!
//! Every command result implements [`Outputter`] and can be rendered as a
//! table (human-readable), json (machine-readable), csv, or markdown.
//!
//! Detects TTY context to adjust colors and wrapping.

use clap::ValueEnum;
use colored::Colorize;
use payscope_core::PerformanceLevel;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

mod csv;
mod json;
mod markdown;
mod table;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::markdown::MarkdownOutput;
pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
    /// CSV format for spreadsheets
    Csv,
    /// Markdown tables for documents
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Disable wrapping to the terminal width
    pub no_wrap: bool,
    /// Override terminal width (None = auto-detect)
    pub width: Option<usize>,
    /// Compact mode (single-line JSON, borderless tables)
    pub compact: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            no_wrap: false,
            width: None,
            compact: false,
        }
    }

    /// Create an OutputConfig with automatic TTY detection and optional color override.
    ///
    /// When stdout is not a TTY, wrapping is disabled and colors are off unless
    /// `color_override` is `Some(true)`.
    pub fn auto_detect(format: OutputFormat, color_override: Option<bool>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let use_color = color_override.unwrap_or(is_tty);
        Self {
            no_color: !use_color,
            no_wrap: !is_tty,
            ..Self::new(format)
        }
    }

    /// Get the effective terminal width
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(w, _)| w.0 as usize)
                .unwrap_or(80)
        })
    }

    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    pub fn should_wrap(&self) -> bool {
        !self.no_wrap
    }

    /// Builder: disable colors
    pub fn without_colors(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Builder: disable wrapping
    pub fn without_wrapping(mut self) -> Self {
        self.no_wrap = true;
        self
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

/// Types that can be rendered in every supported format.
pub trait Outputter: Serialize {
    fn to_table(&self, config: &OutputConfig) -> String;

    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    fn to_csv(&self, config: &OutputConfig) -> String;

    /// Defaults to the table layout inside a code fence.
    fn to_markdown(&self, config: &OutputConfig) -> String {
        let plain = config.clone().without_colors().without_wrapping();
        format!("```\n{}\n```", self.to_table(&plain))
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Json => self.to_json(config),
            OutputFormat::Csv => self.to_csv(config),
            OutputFormat::Markdown => self.to_markdown(config),
        }
    }
}

/// Result wrapper tying data to its rendering config
pub struct Output<'a, T> {
    data: T,
    config: &'a OutputConfig,
}

impl<'a, T: Outputter> Output<'a, T> {
    pub fn new(data: T, config: &'a OutputConfig) -> Self {
        Self { data, config }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(self.config)
    }
}

// ============================================================================
// Utility functions
// ============================================================================

/// Section heading for multi-part table output.
pub fn heading(title: &str, config: &OutputConfig) -> String {
    if config.use_colors() {
        format!("{}", title.bold().cyan())
    } else {
        title.to_string()
    }
}

/// Performance level label, colored by band.
pub fn level_label(level: PerformanceLevel, config: &OutputConfig) -> String {
    if !config.use_colors() {
        return level.to_string();
    }
    match level {
        PerformanceLevel::High => level.as_str().green().bold().to_string(),
        PerformanceLevel::Medium => level.as_str().yellow().to_string(),
        PerformanceLevel::Low => level.as_str().red().to_string(),
    }
}

/// Eligibility flag, colored when eligible.
pub fn eligibility_label(eligible: bool, config: &OutputConfig) -> String {
    let label = payscope_core::types::eligibility_label(eligible);
    if eligible && config.use_colors() {
        label.green().bold().to_string()
    } else {
        label.to_string()
    }
}

/// Whole numbers without a trailing `.0`, everything else to two decimals.
pub fn amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Correlation to two decimals, or "undefined".
pub fn correlation(value: Option<f64>) -> String {
    payscope_core::exporter::markdown::format_correlation(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert!("tree".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new(OutputFormat::Json)
            .without_colors()
            .without_wrapping()
            .compact();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.use_colors());
        assert!(!config.should_wrap());
        assert!(config.compact);
    }

    #[test]
    fn test_labels_without_color() {
        let config = OutputConfig::new(OutputFormat::Table).without_colors();
        assert_eq!(level_label(PerformanceLevel::High, &config), "HIGH");
        assert_eq!(eligibility_label(true, &config), "YES");
        assert_eq!(heading("Salary", &config), "Salary");
    }

    #[test]
    fn test_amount() {
        assert_eq!(amount(52000.0), "52000");
        assert_eq!(amount(41999.5), "41999.50");
        assert_eq!(correlation(None), "undefined");
    }
}
