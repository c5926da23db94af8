//! Command-line interface for the Harbor content-providing node.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use once_cell::sync::OnceCell;

use harbor_core::HarborConfig;

pub mod commands;
pub mod output;

pub use commands::*;

static LOGGING: OnceCell<()> = OnceCell::new();

fn init_logging(verbose: bool) {
    let _ = LOGGING.get_or_init(|| {
        let builder = tracing_subscriber::fmt().with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        );

        // Configure based on mode
        let builder = if verbose {
            builder
                .with_target(false)
                .with_ansi(true)
                .with_file(true)
                .with_line_number(true)
        } else {
            builder
                .with_target(false)
                .with_ansi(true)
                .with_file(false)
                .with_line_number(false)
        };

        let _ = builder.try_init();
    });
}

/// Output encoding for query commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// Aligned `Key: value` lines
    Text,
    /// A single JSON object
    Json,
}

/// CLI arguments parser
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output encoding for query commands
    #[arg(long, value_enum, default_value = "text")]
    encoding: Encoding,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the node in the foreground until interrupted
    Node,

    /// Announce a single content key and exit
    Provide {
        /// Content key to announce
        key: String,
    },

    /// Query node statistics
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Show statistics about the node's (re)provider system
    Provide,
}

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load or create config
    let config = if let Some(path) = cli.config {
        HarborConfig::from_file(path)?
    } else {
        let current_dir = std::env::current_dir()?;
        let default_path = current_dir.join("harbor.toml");
        if default_path.exists() {
            HarborConfig::from_file(default_path)?
        } else {
            let name = current_dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "harbor".to_string());
            HarborConfig::new(name, current_dir)
        }
    };

    // Execute command
    match cli.command {
        Commands::Node => {
            commands::execute_node(&config).await?;
        }
        Commands::Provide { key } => {
            commands::execute_provide(key, &config).await?;
        }
        Commands::Stats {
            command: StatsCommands::Provide,
        } => {
            commands::execute_stats_provide(&config, cli.encoding).await?;
        }
    }

    Ok(())
}
