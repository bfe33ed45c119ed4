use super::change::ChangeSet;
use crate::error::ConfigError;

/// Splits `changes` into batches of at most `limit` entries.
///
/// Every entry lands in exactly one batch with its change untouched. An empty
/// change set yields no batches, a change set smaller than `limit` is returned
/// as one batch, and otherwise all batches hold exactly `limit` entries except
/// the last, which holds the remainder. Batches are filled in alias order.
///
/// # Errors
///
/// `ConfigError::ValidationError` when `limit` is zero.
pub fn split_changes(changes: &ChangeSet, limit: usize) -> Result<Vec<ChangeSet>, ConfigError> {
    if limit == 0 {
        return Err(ConfigError::invalid("limit", "batch limit must be at least 1"));
    }
    if changes.is_empty() {
        return Ok(Vec::new());
    }
    if changes.len() < limit {
        return Ok(vec![changes.clone()]);
    }

    let mut batches = Vec::with_capacity(changes.len().div_ceil(limit));
    let mut batch = ChangeSet::new();
    for (alias, change) in changes {
        batch.insert(alias.clone(), change.clone());
        if batch.len() == limit {
            batches.push(std::mem::take(&mut batch));
        }
    }
    if !batch.is_empty() {
        batches.push(batch);
    }

    Ok(batches)
}
