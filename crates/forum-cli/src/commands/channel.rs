//! Channel naming helpers.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use forum_core::error::AppError;
use forum_realtime::{ChannelKind, ChannelRegistry};

use crate::output::{self, OutputFormat};

/// Arguments for channel commands
#[derive(Debug, Args)]
pub struct ChannelArgs {
    /// Channel subcommand
    #[command(subcommand)]
    pub command: ChannelCommand,
}

/// Channel subcommands
#[derive(Debug, Subcommand)]
pub enum ChannelCommand {
    /// List registered channel kinds
    Kinds,
    /// Build the channel name for a resource
    Make {
        /// Owner kind
        kind: ChannelKind,
        /// Owner id
        id: u64,
    },
    /// Resolve a channel name to its owner
    Resolve {
        /// Channel name, e.g. `question:42`
        name: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    kind: String,
    pattern: String,
    id_group: String,
}

#[derive(Debug, Serialize)]
struct Resolution {
    name: String,
    kind: ChannelKind,
    owner_id: u64,
}

/// Execute channel commands
pub fn execute(args: &ChannelArgs, format: OutputFormat) -> Result<(), AppError> {
    let registry = ChannelRegistry::default();

    match &args.command {
        ChannelCommand::Kinds => {
            let rows: Vec<KindRow> = registry
                .kinds()
                .iter()
                .map(|kind| KindRow {
                    kind: kind.to_string(),
                    pattern: kind.pattern().as_str().to_string(),
                    id_group: kind.id_group().to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        ChannelCommand::Make { kind, id } => {
            let name = kind.make_channel_name(*id);
            match format {
                OutputFormat::Json => {
                    output::print_item(&serde_json::json!({ "channel": name }), format)
                }
                OutputFormat::Table => println!("{name}"),
            }
        }
        ChannelCommand::Resolve { name } => {
            let resolved = registry
                .resolve(name)
                .ok_or_else(|| AppError::not_found(format!("No channel kind matches '{name}'")))?;
            let resolution = Resolution {
                name: resolved.name,
                kind: resolved.kind,
                owner_id: resolved.owner_id,
            };
            match format {
                OutputFormat::Json => output::print_item(&resolution, format),
                OutputFormat::Table => {
                    output::print_kv("Channel", &resolution.name);
                    output::print_kv("Kind", &resolution.kind.to_string());
                    output::print_kv("Owner id", &resolution.owner_id.to_string());
                }
            }
        }
    }

    Ok(())
}
