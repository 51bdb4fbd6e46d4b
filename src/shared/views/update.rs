use std::future::Future;

use crate::core::error::Result;
use crate::shared::views::ModelState;

/// How an edit submission for an existing record ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The submitted record carries a different id than the one addressed
    IdMismatch,
    Invalid,
    /// The service found no record to update
    Missing,
    Updated,
}

/// Run an edit submission: the addressed id must match the record's own id,
/// then the model state must be valid, and only then is `update` called.
///
/// Shared by the HTML edit actions and the JSON `PUT` endpoints so both
/// reject the same submissions in the same order.
pub async fn apply_update<F, Fut>(
    id: i32,
    record_id: i32,
    model_state: &ModelState,
    update: F,
) -> Result<UpdateOutcome>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    if id != record_id {
        return Ok(UpdateOutcome::IdMismatch);
    }

    if !model_state.is_valid() {
        return Ok(UpdateOutcome::Invalid);
    }

    Ok(if update().await? {
        UpdateOutcome::Updated
    } else {
        UpdateOutcome::Missing
    })
}
