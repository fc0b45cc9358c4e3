//! CLI commands.

mod codec;
mod kinds;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use wlid::Wlid;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// wlidctl - Encode, decode, and validate workload identifiers.
#[derive(Debug, Parser)]
#[command(name = "wlidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to WLIDCTL_FORMAT, then table.
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Write logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a WLID from its parts.
    Encode(codec::EncodeArgs),

    /// Split a WLID into cluster, namespace, kind, and name.
    Decode(codec::DecodeArgs),

    /// Check one or more WLIDs.
    Validate(codec::ValidateArgs),

    /// Print the canonical spelling of a kind.
    Normalize(codec::NormalizeArgs),

    /// List the known kinds and their wire abbreviations.
    Kinds,

    /// Derive WLIDs for every workload in a manifest file.
    Manifest(manifest::ManifestArgs),
}

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Cluster from the flag, falling back to configuration.
    pub fn cluster(&self, flag: Option<String>) -> Result<String, CliError> {
        flag.or_else(|| self.config.cluster.clone())
            .ok_or(CliError::MissingCluster)
    }
}

/// A decoded WLID as a table row.
#[derive(Debug, Serialize, Tabled)]
pub struct WlidRow {
    #[tabled(rename = "Cluster")]
    pub cluster: String,

    #[tabled(rename = "Namespace")]
    pub namespace: String,

    #[tabled(rename = "Kind")]
    pub kind: String,

    #[tabled(rename = "Name")]
    pub name: String,
}

impl From<Wlid> for WlidRow {
    fn from(wlid: Wlid) -> Self {
        Self {
            cluster: wlid.cluster,
            namespace: wlid.namespace,
            kind: wlid.kind,
            name: wlid.name,
        }
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format '{}' (expected table or json)", s))
}

impl Cli {
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
            config,
        };

        tracing::debug!(format = ?ctx.format, command = ?self.command, "running command");

        match self.command {
            Commands::Encode(args) => codec::encode(args, &ctx),
            Commands::Decode(args) => codec::decode(args, &ctx),
            Commands::Validate(args) => codec::validate(args, &ctx),
            Commands::Normalize(args) => codec::normalize(args, &ctx),
            Commands::Kinds => kinds::list(&ctx),
            Commands::Manifest(args) => manifest::run(args, &ctx),
        }
    }
}
