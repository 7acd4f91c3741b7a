//! Sequential multi-item operations with per-item failure isolation.
//!
//! Items are issued one at a time, in input order. A failing item is recorded
//! and the loop moves on; nothing short-circuits.

use std::fmt::Display;
use std::future::Future;

use super::envelope::ResponseEnvelope;

/// Result of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome<T> {
    /// Identifying text of the item (title, name or ID).
    pub key: String,
    pub result: Result<T, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkStatus {
    AllSucceeded,
    Partial,
    AllFailed,
}

/// Outcomes in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkResult<T> {
    pub outcomes: Vec<BulkOutcome<T>>,
}

impl<T> BulkResult<T> {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn success_count(&self) -> usize {
        self.total() - self.failed_count()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = (&str, &T)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|v| (o.key.as_str(), v)))
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.key.as_str(), e.as_str())))
    }

    pub fn status(&self) -> BulkStatus {
        match self.failed_count() {
            0 => BulkStatus::AllSucceeded,
            f if f == self.total() => BulkStatus::AllFailed,
            _ => BulkStatus::Partial,
        }
    }
}

/// Run `op` over `items` one after another, collecting every outcome.
pub async fn run_sequential<I, T, E, F, Fut>(
    items: Vec<I>,
    key_of: impl Fn(&I) -> String,
    mut op: F,
) -> BulkResult<T>
where
    F: FnMut(I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut outcomes = Vec::with_capacity(items.len());
    for item in items {
        let key = key_of(&item);
        let result = op(item).await.map_err(|e| e.to_string());
        if let Err(reason) = &result {
            tracing::warn!(item = %key, %reason, "bulk item failed");
        }
        outcomes.push(BulkOutcome { key, result });
    }
    BulkResult { outcomes }
}

/// Build the envelope for a finished bulk run.
///
/// `action` is the verb (`create`, `delete`); `describe` renders one succeeded item.
/// Only a run where every item failed is an error.
pub fn render<T>(
    action: &str,
    entity: &str,
    result: &BulkResult<T>,
    describe: impl Fn(&str, &T) -> String,
) -> ResponseEnvelope {
    let total = result.total();
    let succeeded: Vec<String> = result
        .succeeded()
        .map(|(key, value)| format!("- {}", describe(key, value)))
        .collect();
    let failed: Vec<String> = result
        .failed()
        .map(|(key, reason)| format!("- {key}: {reason}"))
        .collect();

    match result.status() {
        BulkStatus::AllSucceeded => ResponseEnvelope::success(vec![
            format!("Bulk {action} {entity}: all {total} item(s) succeeded."),
            succeeded.join("\n"),
        ]),
        BulkStatus::AllFailed => ResponseEnvelope::error(vec![
            format!("Bulk {action} {entity} failed: 0/{total} succeeded."),
            format!("Failed:\n{}", failed.join("\n")),
        ]),
        BulkStatus::Partial => ResponseEnvelope::success(vec![
            format!(
                "Bulk {action} {entity} partially succeeded: {}/{total} succeeded, {} failed.",
                result.success_count(),
                result.failed_count()
            ),
            format!("Succeeded:\n{}", succeeded.join("\n")),
            format!("Failed:\n{}", failed.join("\n")),
        ]),
    }
}
