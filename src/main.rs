//! Forum notification server.
//!
//! Loads configuration, initializes logging and serves the broker token,
//! settings and notify endpoints until interrupted.

use forum_core::config::AppConfig;
use forum_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    forum_api::init_logging(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        broker_enabled = config.centrifuge.enabled,
        "Starting forum notification server"
    );

    if let Err(e) = forum_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment.
///
/// `FORUM_CONFIG` names the base file, `FORUM_ENV` the overlay next to it.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FORUM_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("FORUM_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}
