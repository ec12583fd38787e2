//! Latin transliteration.
//!
//! Two variants:
//! - `latinize`: substitute every code point the transliteration table maps,
//!   leave unmapped code points intact. The output is "more Latin" but not
//!   guaranteed pure ASCII.
//! - `ascii_text`: `latinize`, then delete every remaining code point outside
//!   the printable ASCII range. Callers asking for ASCII want a 7-bit
//!   guarantee even at the cost of information loss.
//!
//! The mapping table is a versioned data dependency (the `deunicode` crate),
//! not logic owned by this crate. Both functions are total and deterministic.

use deunicode::deunicode_char;

/// The transliteration table entry for a single code point, if any.
///
/// Replacement strings may be empty or multi-character (e.g. `æ` → `"ae"`).
pub fn latin_mapping(ch: char) -> Option<&'static str> {
    deunicode_char(ch)
}

/// General transliteration: map what the table covers, keep the rest.
pub fn latinize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match latin_mapping(ch) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(ch),
        }
    }
    out
}

/// Strict transliteration: transliterate, then keep only printable ASCII
/// (0x20–0x7E). Untranslatable residue is deleted, not replaced.
pub fn ascii_text(text: &str) -> String {
    latinize(text)
        .chars()
        .filter(|ch| matches!(ch, '\x20'..='\x7e'))
        .collect()
}
