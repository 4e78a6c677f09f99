//! Bulk Operation Executor
//!
//! Applies a single-item delete across an id list with independent
//! outcomes per id: no transaction, no rollback, no early abort. A
//! failure on one id never prevents processing of the rest. Invariant:
//! `deleted + failed == ids.len()`.

use std::future::Future;

use serde::Serialize;

use super::{RepoError, RepoResult};

/// Accumulated result of a bulk run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkOutcome {
    pub deleted: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub message: String,
}

impl BulkOutcome {
    /// Zero-work outcome, used when a scoped bulk resolves no targets.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            deleted: 0,
            failed: 0,
            errors: Vec::new(),
            message: message.into(),
        }
    }
}

/// Run `delete_one` sequentially over `ids`, classifying each outcome:
/// `Ok(true)` counts as deleted, `Ok(false)` as a not-found failure,
/// `Err` as an internal failure with its message recorded. Only an
/// empty input escapes as an error.
pub async fn run_bulk_delete<F, Fut>(
    label: &str,
    ids: &[String],
    mut delete_one: F,
) -> RepoResult<BulkOutcome>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = RepoResult<bool>>,
{
    if ids.is_empty() {
        return Err(RepoError::Validation(format!(
            "{label} ids must not be empty"
        )));
    }

    let mut outcome = BulkOutcome::default();
    for id in ids {
        match delete_one(id.clone()).await {
            Ok(true) => outcome.deleted += 1,
            Ok(false) => {
                outcome.failed += 1;
                outcome
                    .errors
                    .push(format!("{} not found: {id}", capitalize(label)));
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "Bulk delete item failed");
                outcome.failed += 1;
                outcome
                    .errors
                    .push(format!("Failed to delete {label} {id}: {err}"));
            }
        }
    }

    outcome.message = if outcome.failed == 0 {
        format!("Deleted {} {label}(s)", outcome.deleted)
    } else {
        format!(
            "Deleted {} {label}(s), {} failed",
            outcome.deleted, outcome.failed
        )
    };
    Ok(outcome)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
