//! Process-wide tracing subscriber setup shared by the server binaries.

use tracing_subscriber::{EnvFilter, fmt};

use forum_core::config::LoggingConfig;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// `"json"` selects JSON; anything else is pretty.
    pub fn from_config(config: &LoggingConfig) -> Self {
        if config.format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Installs the global subscriber from `config`.
///
/// `RUST_LOG` overrides `config.level`. Does nothing if a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match LogFormat::from_config(config) {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        LogFormat::Pretty => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    if let Err(e) = installed {
        eprintln!("Logging already initialized: {e}");
    }
}
