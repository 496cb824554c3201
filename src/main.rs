// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod document;
mod errors;
mod export;
mod file_utils;
mod orchestrator;
mod services;
mod summary;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a video into a document (default command)
    #[command(alias = "summarise")]
    Summarize(SummarizeArgs),

    /// Fetch the quote of the day
    Quote(QuoteArgs),

    /// Generate shell completions for tubedoc
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Video URL to summarize
    #[arg(value_name = "URL")]
    url: String,

    /// Export the summary as a PDF file
    #[arg(short, long)]
    export: bool,

    /// Directory the exported PDF is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Base URL of the summarization backend
    #[arg(short, long, env = "TUBEDOC_API_URL")]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct QuoteArgs {
    /// Base URL of the summarization backend
    #[arg(short, long, env = "TUBEDOC_API_URL")]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// tubedoc - Video summaries as documents
///
/// Sends a video URL to a summarization backend, shows the structured
/// summary in the terminal and can export it as a paginated PDF.
#[derive(Parser, Debug)]
#[command(name = "tubedoc")]
#[command(version = "0.1.0")]
#[command(about = "Turn a video into a summary document and PDF")]
#[command(long_about = "tubedoc sends a video URL to a summarization backend, displays the
structured summary and can export it as a paginated A4 PDF.

EXAMPLES:
    tubedoc https://www.youtube.com/watch?v=abc      # Summarize using default config
    tubedoc -e https://youtu.be/abc                  # Summarize and export a PDF
    tubedoc -e -o ~/Documents https://youtu.be/abc   # Export into a directory
    tubedoc quote                                    # Quote of the day
    tubedoc --log-level debug https://youtu.be/abc   # Verbose logging
    tubedoc completions bash > tubedoc.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The backend base URL can also be set via
    the TUBEDOC_API_URL environment variable or the --base-url flag.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video URL to summarize
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Export the summary as a PDF file
    #[arg(short, long)]
    export: bool,

    /// Directory the exported PDF is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Base URL of the summarization backend
    #[arg(short, long, env = "TUBEDOC_API_URL")]
    base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "tubedoc", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        Some(Commands::Quote(args)) => run_quote(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let url = cli.url.ok_or_else(|| {
                anyhow::anyhow!("URL is required when no subcommand is specified")
            })?;

            let summarize_args = SummarizeArgs {
                url,
                export: cli.export,
                output_dir: cli.output_dir,
                base_url: cli.base_url,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_summarize(summarize_args).await
        }
    }
}

/// Load configuration, creating a default file when none exists, and apply
/// CLI overrides.
fn load_config(
    config_path: &str,
    base_url: Option<String>,
    log_level: Option<CliLogLevel>,
) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(log_level) = log_level {
        config.log_level = log_level.into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    log::set_max_level(level_filter(&config.log_level));

    Ok(config)
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    let config = load_config(&options.config_path, options.base_url, options.log_level)?;

    let controller = Controller::with_config(config)?;
    controller
        .run_summarize(&options.url, options.export, options.output_dir)
        .await
}

async fn run_quote(options: QuoteArgs) -> Result<()> {
    let config = load_config(&options.config_path, options.base_url, options.log_level)?;

    let controller = Controller::with_config(config)?;
    controller.run_quote().await
}
