//! Publish a one-off event through the broker.

use clap::Args;
use serde::Serialize;
use serde_json::Value;

use forum_core::error::AppError;
use forum_realtime::{BrokerGateway, ChannelKind, GatewayError, PublishEvent};

use super::Cli;
use crate::output::{self, OutputFormat};

/// Arguments for the publish command
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Owner kind of the target channel
    #[arg(short, long, default_value = "question")]
    pub kind: ChannelKind,

    /// Owner id, e.g. the question id
    #[arg(short, long)]
    pub id: u64,

    /// Event type
    #[arg(short = 't', long = "type", default_value = "new_answer")]
    pub event_type: String,

    /// JSON payload
    #[arg(short, long, default_value = "{}")]
    pub payload: String,
}

#[derive(Debug, Serialize)]
struct PublishOutcome {
    channel: String,
    delivered: bool,
    error: Option<String>,
}

/// Execute the publish command
pub async fn execute(args: &PublishArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    let payload: Value = serde_json::from_str(&args.payload)
        .map_err(|e| AppError::validation(format!("Payload is not valid JSON: {e}")))?;

    let config = cli.load_config()?;
    let gateway = BrokerGateway::from_config(&config.centrifuge)?;

    let channel = args.kind.make_channel_name(args.id);
    let event = PublishEvent::new(channel.clone(), args.event_type.clone(), payload);
    tracing::debug!(channel = %channel, event_type = %args.event_type, "Publishing from CLI");
    let result = gateway.try_publish(&event).await;

    let outcome = PublishOutcome {
        channel,
        delivered: result.is_ok(),
        error: result.as_ref().err().map(ToString::to_string),
    };

    if format == OutputFormat::Json {
        output::print_item(&outcome, format);
    }

    match result {
        Ok(()) => {
            if format == OutputFormat::Table {
                output::print_success(&format!(
                    "Published '{}' to {}",
                    args.event_type, outcome.channel
                ));
            }
            Ok(())
        }
        Err(GatewayError::Disabled) => {
            if format == OutputFormat::Table {
                output::print_warning("Broker publishing is disabled; nothing was sent");
            }
            Err(AppError::service_unavailable("Broker publishing is disabled"))
        }
        Err(e) => Err(AppError::external_service(format!(
            "Publish to {} failed: {e}",
            outcome.channel
        ))),
    }
}
