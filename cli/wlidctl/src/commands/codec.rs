//! Encode, decode, validate, and normalize commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, print_value, OutputFormat};

use super::{CommandContext, WlidRow};

#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Cluster name. Defaults to WLIDCTL_CLUSTER.
    #[arg(long)]
    cluster: Option<String>,

    /// Namespace of the workload.
    #[arg(long)]
    namespace: String,

    /// Resource kind (any casing).
    #[arg(long)]
    kind: String,

    /// Resource name.
    #[arg(long)]
    name: String,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// WLID to decode.
    wlid: String,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// WLIDs to check.
    #[arg(required = true)]
    wlids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Kind name in any casing.
    kind: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "WLID")]
    wlid: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Reason", display = "display_option")]
    reason: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

pub fn encode(args: EncodeArgs, ctx: &CommandContext) -> Result<()> {
    let cluster = ctx.cluster(args.cluster)?;
    let encoded = wlid::encode(&cluster, &args.namespace, &args.kind, &args.name);
    tracing::info!(wlid = %encoded, "encoded");
    print_value("wlid", &encoded, ctx.format);
    Ok(())
}

pub fn decode(args: DecodeArgs, ctx: &CommandContext) -> Result<()> {
    let decoded = wlid::decode(&args.wlid).map_err(CliError::from)?;
    print_single(&WlidRow::from(decoded), ctx.format);
    Ok(())
}

pub fn validate(args: ValidateArgs, ctx: &CommandContext) -> Result<()> {
    let rows = check_all(&args.wlids);
    let invalid = rows.iter().filter(|row| !row.valid).count();

    if ctx.format == OutputFormat::Table && invalid == 0 {
        print_success(&format!("{} identifier(s) valid", rows.len()));
    } else {
        print_output(&rows, ctx.format);
    }

    if invalid > 0 {
        return Err(CliError::InvalidIdentifiers {
            invalid,
            total: rows.len(),
        }
        .into());
    }
    Ok(())
}

fn check_all(wlids: &[String]) -> Vec<ValidationRow> {
    wlids
        .iter()
        .map(|input| {
            let result = wlid::validate(input);
            if let Err(e) = &result {
                tracing::debug!(wlid = %input, error = %e, "invalid identifier");
            }
            ValidationRow {
                wlid: input.clone(),
                valid: result.is_ok(),
                reason: result.err().map(|e| e.reason().to_string()),
            }
        })
        .collect()
}

pub fn normalize(args: NormalizeArgs, ctx: &CommandContext) -> Result<()> {
    print_value("kind", &wlid::normalize_kind(&args.kind), ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_all() {
        let rows = check_all(&[
            "wlid://cluster-a/namespace-b/pod-x".to_string(),
            "wlid://cluster-a/namespace-b /pod-x".to_string(),
            "cluster-a/namespace-b".to_string(),
        ]);
        assert!(rows[0].valid);
        assert_eq!(rows[0].reason, None);
        assert_eq!(rows[1].reason.as_deref(), Some("whitespace found"));
        assert_eq!(rows[2].reason.as_deref(), Some("invalid format"));
    }

    #[test]
    fn test_validate_reports_failures() {
        let ctx = CommandContext {
            config: Default::default(),
            format: OutputFormat::Json,
        };
        let args = ValidateArgs {
            wlids: vec!["a/b/Pod/x".to_string(), "a/b".to_string()],
        };
        let err = validate(args, &ctx).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidIdentifiers {
                invalid: 1,
                total: 2
            })
        ));
    }
}
