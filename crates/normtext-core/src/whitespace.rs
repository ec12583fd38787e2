//! Whitespace collapsing.
//!
//! Category replacement substitutes whitespace 1:1 per code point, so a
//! stripped input ends up littered with space runs. This pass reduces every
//! maximal run of whitespace-classified characters (including original tabs
//! and newlines) to a single ASCII space and strips leading/trailing runs.

use crate::defaults;

/// Collapse whitespace runs to single spaces and trim the ends.
///
/// Returns `None` when nothing remains: callers treat that as "no usable
/// normalized text", distinct from a string that merely contains spaces.
/// A `Some` result is never empty and never starts or ends with whitespace.
pub fn collapse_spaces(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(defaults::WS);
        }
        out.push_str(word);
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
