//! Runtime selection of the sabotage variant.
//!
//! The page picks its script with `?variant=psychedelic` (default) or
//! `?variant=interstitial`. Anything unparseable falls back to the default.

use crate::constants::VARIANT_QUERY_KEY;
use crate::core::{SabotageVariant, UnknownVariant};

/// Look up the variant in a `location.search` string such as `"?variant=b"`.
///
/// `Ok(None)` when the parameter is absent or empty.
pub fn variant_from_query(search: &str) -> Result<Option<SabotageVariant>, UnknownVariant> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let value = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == VARIANT_QUERY_KEY)
        .map(|(_, value)| value);
    match value {
        Some(v) if !v.is_empty() => v.parse().map(Some),
        _ => Ok(None),
    }
}

pub fn resolve_variant(search: &str) -> SabotageVariant {
    match variant_from_query(search) {
        Ok(Some(v)) => v,
        Ok(None) => SabotageVariant::default(),
        Err(e) => {
            log::warn!("[config] {}; using {}", e, SabotageVariant::default().name());
            SabotageVariant::default()
        }
    }
}
