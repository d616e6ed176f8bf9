//! Start the notification HTTP server.

use clap::Args;

use forum_core::error::AppError;

use super::Cli;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, cli: &Cli) -> Result<(), AppError> {
    let mut config = cli.load_config()?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    forum_api::init_logging(&config.logging);

    println!("Starting forum notification server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!(
        "  Broker: {}",
        if config.centrifuge.enabled { "enabled" } else { "disabled" }
    );

    forum_api::run_server(config).await
}
