//! Issue broker connection and subscription tokens.

use clap::{Args, Subcommand};
use serde::Serialize;

use forum_core::error::AppError;
use forum_realtime::TokenIssuer;

use super::Cli;
use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a connection token
    Connection {
        /// User id to embed as subject; anonymous when omitted
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Issue a subscription token for one channel
    Subscription {
        /// Channel name, e.g. `question:42`
        #[arg(long)]
        channel: String,
        /// User id to embed as subject; anonymous when omitted
        #[arg(short, long)]
        user: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    token: String,
    subject: String,
    channel: Option<String>,
    ttl_seconds: i64,
}

/// Execute token commands
pub async fn execute(args: &TokenArgs, cli: &Cli, format: OutputFormat) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let issuer = TokenIssuer::from_config(&config.centrifuge)?;

    let issued = match &args.command {
        TokenCommand::Connection { user } => IssuedToken {
            token: issuer.issue_connection_token(user.as_deref())?,
            subject: user.clone().unwrap_or_default(),
            channel: None,
            ttl_seconds: issuer.ttl_seconds(),
        },
        TokenCommand::Subscription { channel, user } => IssuedToken {
            token: issuer.issue_subscription_token(channel, user.as_deref())?,
            subject: user.clone().unwrap_or_default(),
            channel: Some(channel.clone()),
            ttl_seconds: issuer.ttl_seconds(),
        },
    };

    match format {
        OutputFormat::Json => output::print_item(&issued, format),
        OutputFormat::Table => {
            println!("{}", issued.token);
            let subject = if issued.subject.is_empty() {
                "(anonymous)"
            } else {
                issued.subject.as_str()
            };
            output::print_kv("Subject", subject);
            if let Some(ref channel) = issued.channel {
                output::print_kv("Channel", channel);
            }
            output::print_kv("Expires in", &format!("{}s", issued.ttl_seconds));
        }
    }

    Ok(())
}
