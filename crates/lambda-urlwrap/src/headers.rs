//! Projections between the platform's single-valued header maps and the
//! multi-valued [`HeaderMap`] handlers see
//!
//! Both directions are lossy by contract: expansion wraps each value in a
//! one-element sequence (last write wins on duplicate keys), and collapse
//! keeps only the first value per key. They are named functions rather than
//! implicit coercions so the loss is visible at the call site.

use std::collections::HashMap;
use std::str::FromStr;

use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

/// Expand a single-valued header map into a [`HeaderMap`].
///
/// Entries whose name or value is not a legal HTTP header are skipped with a
/// debug log rather than failing the invocation; the platform should never
/// deliver one, but a bad header is not a reason to drop the request.
pub fn expand_single_valued(single: &HashMap<String, String>) -> HeaderMap {
    let mut multi = HeaderMap::with_capacity(single.len());

    for (key, value) in single {
        let Ok(name) = HeaderName::from_str(key) else {
            debug!("skipping inbound header '{}' - invalid header name", key);
            continue;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            debug!("skipping inbound header '{}' - invalid header value", key);
            continue;
        };

        // insert, not append: duplicate keys resolve to the last write
        multi.insert(name, value);
    }

    multi
}

/// Collapse a [`HeaderMap`] into a single-valued map, keeping only the first
/// value recorded for each key.
///
/// This mirrors the platform's single-valued response header shape. Dropping
/// second and later values is deliberate, not a bug to fix here. Names come
/// back in [`HeaderMap`]'s lowercase form rather than whatever casing the
/// handler typed; the platform treats header names case-insensitively.
pub fn collapse_first_value(multi: &HeaderMap) -> HashMap<String, String> {
    let mut single = HashMap::with_capacity(multi.keys_len());

    for key in multi.keys() {
        if let Some(value) = multi.get(key) {
            // HeaderMap::get returns the first value for the key
            single.insert(
                key.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
    }

    single
}
