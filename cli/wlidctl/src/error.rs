//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use wlid::WlidError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No cluster given. Pass --cluster or set WLIDCTL_CLUSTER.")]
    MissingCluster,

    #[error("{invalid} of {total} identifier(s) invalid")]
    InvalidIdentifiers { invalid: usize, total: usize },

    #[error("No workloads found in {0}")]
    EmptyManifest(String),

    #[error(transparent)]
    Wlid(#[from] WlidError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::MissingCluster => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `wlidctl encode --cluster <name> ...`.".yellow()
                );
            }
            CliError::Wlid(wlid_err) => print_wlid_hint(wlid_err),
            _ => {}
        }
    }
}

fn print_wlid_hint(err: &WlidError) {
    match err {
        WlidError::WhitespaceFound { .. } => {
            eprintln!(
                "\n{}",
                "Hint: WLIDs cannot contain whitespace. Check your shell quoting.".yellow()
            );
        }
        WlidError::InvalidFormat { segments } => {
            eprintln!("\nParsed segments: {:?}", segments);
            eprintln!(
                "{}",
                "Hint: Expected wlid://cluster-<cluster>/namespace-<namespace>/<kind>-<name>."
                    .yellow()
            );
        }
    }
}
