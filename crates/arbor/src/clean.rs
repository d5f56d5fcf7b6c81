//! Record cleaning for datasets that mark missing readings with NaN.

use crate::value::Value;

/// Accounting from a [`clean_non_finite`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanStats {
    pub original: usize,
    pub kept: usize,
    pub removed: usize,
}

/// Builds a new array keeping only records whose `field` is not a non-finite
/// number, along with how many were kept and removed.
///
/// Records that are not objects, or that lack the field, pass through
/// unchanged; only a present NaN or infinite reading disqualifies one.
/// Returns `None` when `records` is not an array.
///
/// Pairs with [`NonFinitePolicy::Error`](crate::NonFinitePolicy::Error):
/// datasets carrying NaN sentinels get cleaned before formatting instead of
/// failing mid-render.
pub fn clean_non_finite(records: &Value, field: &str) -> Option<(Value, CleanStats)> {
    let items = records.as_array()?;

    let mut kept = Vec::with_capacity(items.len());
    for record in items {
        let disqualified = matches!(record.get(field), Some(Value::Number(n)) if !n.is_finite());
        if !disqualified {
            kept.push(record.clone());
        }
    }

    let stats = CleanStats {
        original: items.len(),
        kept: kept.len(),
        removed: items.len() - kept.len(),
    };
    Some((Value::Array(kept), stats))
}
