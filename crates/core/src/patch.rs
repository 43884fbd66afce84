//! Helpers for partial-update DTOs.
//!
//! Update payloads use `Option<T>` for non-nullable columns ("absent" means
//! "leave untouched") and `Option<Option<T>>` for nullable columns, where the
//! outer `Option` records whether the key was present at all and the inner one
//! carries an explicit `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field so that a present `null` becomes
/// `Some(None)` instead of collapsing into `None`.
///
/// Must be combined with `#[serde(default)]` so that a missing key yields
/// `None`:
///
/// ```ignore
/// #[serde(default, deserialize_with = "double_option")]
/// pub bio: Option<Option<String>>,
/// ```
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

/// Split a double option into the `(provided, value)` pair bound by
/// repositories as `CASE WHEN $n THEN $m ELSE column END`.
pub fn split<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    match field {
        Some(inner) => (true, inner.as_ref()),
        None => (false, None),
    }
}
