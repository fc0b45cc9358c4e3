//! Deriving WLIDs from Kubernetes manifests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;
use wlid::{namespace_or_default, WorkloadRef};

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ManifestArgs {
    /// Path to a YAML or JSON manifest (multi-document YAML is supported).
    path: PathBuf,

    /// Cluster name. Defaults to WLIDCTL_CLUSTER.
    #[arg(long)]
    cluster: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ManifestRow {
    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Namespace")]
    namespace: String,

    #[tabled(rename = "WLID")]
    wlid: String,
}

pub fn run(args: ManifestArgs, ctx: &CommandContext) -> Result<()> {
    let cluster = ctx.cluster(args.cluster)?;
    let workloads = load_workloads(&args.path)?;

    if workloads.is_empty() {
        return Err(CliError::EmptyManifest(args.path.display().to_string()).into());
    }

    let rows: Vec<ManifestRow> = workloads
        .iter()
        .map(|workload| ManifestRow {
            kind: workload.kind.clone(),
            name: workload.name.clone(),
            namespace: namespace_or_default(workload).to_string(),
            wlid: workload.to_wlid(&cluster).to_string(),
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn load_workloads(path: &Path) -> Result<Vec<WorkloadRef>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest from {:?}", path))?;
    parse_workloads(&contents).with_context(|| format!("Failed to parse manifest {:?}", path))
}

/// Parse every non-empty document in `contents`.
fn parse_workloads(contents: &str) -> Result<Vec<WorkloadRef>> {
    let mut workloads = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(contents).enumerate() {
        let value = serde_yaml::Value::deserialize(document)
            .with_context(|| format!("document {} is not valid YAML", index))?;
        if value.is_null() {
            tracing::debug!(index, "skipping empty document");
            continue;
        }

        let workload: WorkloadRef = serde_yaml::from_value(value)
            .with_context(|| format!("document {} is not a Kubernetes object", index))?;
        tracing::debug!(index, kind = %workload.kind, name = %workload.name, "found workload");
        workloads.push(workload);
    }

    Ok(workloads)
}
