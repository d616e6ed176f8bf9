//! CLI command definitions and dispatch.

pub mod channel;
pub mod config;
pub mod publish;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use forum_core::config::AppConfig;
use forum_core::error::AppError;

/// Forum notification service: broker tokens, channels and publishing
#[derive(Debug, Parser)]
#[command(name = "forum-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file
    #[arg(short, long, default_value = "config/default.toml", env = "FORUM_CONFIG")]
    pub config: String,

    /// Environment overlay loaded next to the base file (e.g. `production`)
    #[arg(short, long, default_value = "development", env = "FORUM_ENV")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Issue broker tokens
    Token(token::TokenArgs),
    /// Publish an event to a channel
    Publish(publish::PublishArgs),
    /// Channel naming helpers
    Channel(channel::ChannelArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, self).await,
            Commands::Token(args) => token::execute(args, self, self.format).await,
            Commands::Publish(args) => publish::execute(args, self, self.format).await,
            Commands::Channel(args) => channel::execute(args, self.format),
            Commands::Config(args) => config::execute(args, self, self.format),
        }
    }

    /// Whether the command logs with the configured `[logging]` settings
    /// rather than the CLI's terse stderr output.
    pub fn uses_config_logging(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Load configuration using the global `--config` and `--env` flags
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }
}
