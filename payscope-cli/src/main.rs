//! payscope CLI - employee salary and performance analytics
//!
//! Loads an employee dataset, derives performance levels and promotion
//! eligibility, and reports salary, performance, promotion and correlation
//! views in the terminal or as files.

use anyhow::bail;
use clap::{CommandFactory, Parser, Subcommand};
use payscope_core::{AnalyticsPipeline, Loader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::PayscopeConfig;
use output::{OutputConfig, OutputFormat};

/// Employee salary and performance analytics.
#[derive(Parser)]
#[command(name = "payscope")]
#[command(author, version)]
#[command(about = "Employee salary and performance analytics")]
#[command(propagate_version = true)]
#[command(next_help_heading = "Options")]
#[command(after_help = "Quick Start:
  payscope analyze --sample   Run every view on the built-in dataset
  payscope validate           Check employees.csv before analyzing
  payscope analyze --save     Full run, then write the processed file

Examples:
  payscope performance --top 5
  payscope promotion --eligible-only --format csv
  payscope report -o report.md
  payscope serve --port 9130")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dataset to analyze (overrides config)
    #[arg(short, long, global = true, env = "PAYSCOPE_DATA")]
    data: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Compact output: single-line JSON, borderless tables
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every view: salary, performance, promotion, insights, summary
    #[command(visible_alias = "a")]
    Analyze {
        /// Use the built-in five-employee dataset
        #[arg(long)]
        sample: bool,

        /// Also write the processed file
        #[arg(long)]
        save: bool,
    },

    /// List employees with performance level and promotion eligibility
    #[command(visible_alias = "ls")]
    Employees,

    /// Average, highest and lowest salary per department
    Salary,

    /// Performance levels per department and top performers
    #[command(visible_alias = "perf")]
    Performance {
        /// Number of top performers to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Promotion eligibility (4+ years and a score of 80+ by default)
    Promotion {
        /// Show only eligible employees
        #[arg(short, long)]
        eligible_only: bool,
    },

    /// Salary vs performance correlation
    Insights,

    /// Headcount, salary expense and level counts per department
    Summary,

    /// Write the processed dataset (input columns plus derived columns)
    Export {
        /// Output file (default: config or processed_employees.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a Markdown (or JSON) report document
    Report {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the dataset without analyzing it
    #[command(visible_alias = "check")]
    Validate,

    /// Start the HTTP query server
    Serve {
        /// Address to bind (default: config or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: config or 9130)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of the script
        #[arg(long)]
        instructions: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Merge flags and `.payscope.toml` into the shared command context.
fn build_context(cli: &Cli, config: &PayscopeConfig) -> anyhow::Result<Context> {
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    });

    let thresholds = config.thresholds();
    if let Err(e) = thresholds.validate() {
        bail!("Invalid [analytics] settings in {}: {}", crate::config::CONFIG_FILE, e);
    }

    let mut output = OutputConfig::auto_detect(format, config.use_color());
    if cli.compact {
        output = output.compact();
    }

    let delimiter = config.delimiter();
    Ok(Context {
        data_path: cli.data.clone().unwrap_or_else(|| config.input_path()),
        output_path: config.output_path(),
        loader: Loader::new()
            .with_delimiter(delimiter)
            .with_thresholds(thresholds),
        pipeline: AnalyticsPipeline::new(thresholds, config.top_n()),
        delimiter,
        output,
        server_host: config.server_host().to_string(),
        server_port: config.server_port(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .payscope.toml
    let config = PayscopeConfig::load(std::path::Path::new("."));

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let ctx = build_context(&cli, &config)?;

    // Handle case where no command is provided
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Analyze { sample, save } => analyze::run(&ctx, sample, save),
        Commands::Employees => employees::run(&ctx),
        Commands::Salary => salary::run(&ctx),
        Commands::Performance { top } => performance::run(&ctx, top),
        Commands::Promotion { eligible_only } => promotion::run(&ctx, eligible_only),
        Commands::Insights => insights::run(&ctx),
        Commands::Summary => summary::run(&ctx),
        Commands::Export { output } => export::run(&ctx, output),
        Commands::Report { output, json } => report::run(&ctx, output, json),
        Commands::Validate => validate::run(&ctx),
        Commands::Serve { host, port } => serve::run(&ctx, host, port).await,
        Commands::Completions {
            shell,
            instructions,
        } => completions::run(shell, instructions, &mut Cli::command(), &ctx.output),
    }
}
