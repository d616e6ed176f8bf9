//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use forum_core::error::AppError;
use forum_realtime::BrokerUrls;

use super::Cli;
use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration with secrets masked
    Show,
    /// Validate token signing and broker settings
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = cli.load_config()?;
            output::print_item(&config.masked(), format);
        }
        ConfigCommand::Validate => {
            let config = cli.load_config()?;
            let checked = config
                .centrifuge
                .validate_signing()
                .and_then(|()| config.centrifuge.validate_broker());

            if let Err(e) = checked {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }

            output::print_success(&format!("Configuration '{}' is valid", cli.config));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            if config.centrifuge.enabled {
                let urls = BrokerUrls::from_config(&config.centrifuge);
                output::print_kv("Broker API", &urls.api_url());
                output::print_kv("Broker WebSocket", &urls.ws_url());
            } else {
                output::print_kv("Broker", "disabled");
            }
            output::print_kv(
                "Token TTL",
                &format!("{}s", config.centrifuge.token_ttl_seconds),
            );
        }
    }

    Ok(())
}
