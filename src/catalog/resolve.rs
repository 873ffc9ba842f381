//! Free-text name resolution
//!
//! Resolution order, first hit wins:
//! 1. Exact normalized match against any record's name or alias
//! 2. Exact normalized match against a record's display label
//! 3. Substring containment, first match in catalog order
//!
//! Step 3 is a deliberate "good enough" policy, not a ranked search; the
//! catalog is small and its ordering is stable. Absence is a normal
//! outcome: the function never fails on unknown input.

use crate::catalog::normalize::normalize;
use crate::catalog::{PortCatalog, PortRecord};

/// Resolve a user-supplied port name to a catalog record
///
/// Returns `None` when nothing matches; the caller is expected to prompt
/// for a valid selection.
pub fn resolve<'a>(catalog: &'a PortCatalog, query: &str) -> Option<&'a PortRecord> {
    let key = normalize(query);
    if key.is_empty() {
        return None;
    }

    // 1. Exact name/alias key
    if let Some(record) = catalog
        .records()
        .iter()
        .find(|r| r.lookup_keys().contains(&key))
    {
        return Some(record);
    }

    // 2. Exact display label
    if let Some(record) = catalog
        .records()
        .iter()
        .find(|r| r.label().map(|l| normalize(&l)) == Some(key.clone()))
    {
        return Some(record);
    }

    // 3. Substring containment, catalog order
    catalog.records().iter().find(|r| {
        r.lookup_keys().iter().any(|k| k.contains(&key))
            || r.label()
                .map(|l| normalize(&l).contains(&key))
                .unwrap_or(false)
    })
}
