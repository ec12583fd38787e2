//! The composed normalization pipeline and slug generation.
//!
//! Stage order is fixed and deliberate:
//! 1. decode byte input (the only fallible step)
//! 2. Unicode-aware lowercasing
//! 3. NFKD decomposition
//! 4. script reduction: strict ASCII wins over general transliteration
//! 5. category replacement (always runs)
//! 6. whitespace collapse
//!
//! Strict transliteration runs before category replacement so untranslatable
//! residue is deleted outright instead of later becoming stray whitespace.
//!
//! Absent input and inputs that reduce to nothing both come back as `None`,
//! so heterogeneous values can flow through a pipeline without branching.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::categories::category_replace;
use crate::config::NormalizeOptions;
use crate::defaults;
use crate::encoding;
use crate::errors::NormResult;
use crate::transliterate::{ascii_text, latinize};
use crate::whitespace::collapse_spaces;

/// Input to `normalize`: text, raw bytes, or nothing.
///
/// `Absent` is the rendering of "not a textual value"; it normalizes to
/// `None` without error.
#[derive(Debug, Clone, Copy)]
pub enum TextInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Absent,
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for TextInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for TextInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<Option<&'a str>> for TextInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        match text {
            Some(t) => Self::Text(t),
            None => Self::Absent,
        }
    }
}

/// Normalize arbitrary input into canonical text.
///
/// Returns `Ok(None)` for absent input and for input that reduces to
/// nothing. Byte input is decoded first (see `encoding`); a decode failure
/// is the only error this function can produce.
pub fn normalize<'a>(
    input: impl Into<TextInput<'a>>,
    opts: &NormalizeOptions,
) -> NormResult<Option<String>> {
    let text: Cow<'a, str> = match input.into() {
        TextInput::Absent => return Ok(None),
        TextInput::Bytes(bytes) => Cow::Owned(encoding::decode(bytes, defaults::ENCODING)?),
        TextInput::Text(text) => Cow::Borrowed(text),
    };
    Ok(normalize_str(&text, opts))
}

/// Normalize text that is already a string. Infallible: the decode step is
/// the pipeline's only error surface, and there is none here.
pub fn normalize_str(text: &str, opts: &NormalizeOptions) -> Option<String> {
    let mut text = if opts.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if opts.decompose {
        text = text.nfkd().collect();
    }

    if opts.ascii {
        text = ascii_text(&text);
    } else if opts.latinize {
        text = latinize(&text);
    }

    text = category_replace(&text, &opts.replace_categories);

    if opts.collapse {
        collapse_spaces(&text)
    } else if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Generate a separator-joined slug.
///
/// Normalizes with strict ASCII transliteration, then joins on `sep`. A
/// pure string transform: no uniqueness guarantee across calls.
pub fn slugify<'a>(input: impl Into<TextInput<'a>>, sep: char) -> NormResult<Option<String>> {
    let slug = normalize(input, &NormalizeOptions::slug())?.map(|text| join_on(&text, sep));
    Ok(slug)
}

/// Slug generation for input that is already a string. Infallible.
pub fn slugify_str(text: &str, sep: char) -> Option<String> {
    normalize_str(text, &NormalizeOptions::slug()).map(|text| join_on(&text, sep))
}

fn join_on(text: &str, sep: char) -> String {
    text.chars()
        .map(|ch| if ch == defaults::WS { sep } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_by_default() {
        let out = normalize_str("HELLO World", &NormalizeOptions::default());
        assert_eq!(out.as_deref(), Some("hello world"));
    }

    #[test]
    fn category_stripping_keeps_letters() {
        let opts = NormalizeOptions {
            lowercase: false,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize_str("a1!b", &opts).as_deref(), Some("a b"));
    }

    #[test]
    fn ascii_wins_over_latinize() {
        let opts = NormalizeOptions {
            latinize: true,
            ascii: true,
            ..NormalizeOptions::default()
        };
        let out = normalize_str("héllo ☃", &opts).unwrap();
        assert!(out.chars().all(|c| matches!(c, '\x20'..='\x7e')));
    }

    #[test]
    fn collapse_off_keeps_runs() {
        let opts = NormalizeOptions {
            collapse: false,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize_str("a, b", &opts).as_deref(), Some("a  b"));
    }

    #[test]
    fn collapse_off_empty_input_is_none() {
        let opts = NormalizeOptions {
            collapse: false,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize_str("", &opts), None);
    }

    #[test]
    fn decompose_strips_marks_via_categories() {
        let opts = NormalizeOptions {
            decompose: true,
            collapse: true,
            ..NormalizeOptions::default()
        };
        // NFKD splits é into e + combining acute; the mark is then replaced.
        assert_eq!(normalize_str("café", &opts).as_deref(), Some("cafe"));
    }

    #[test]
    fn absent_input_is_none_not_error() {
        let out = normalize(TextInput::Absent, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, None);
        let out = normalize(None::<&str>, &NormalizeOptions::default()).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn byte_input_is_decoded() {
        let out = normalize("HELLO World".as_bytes(), &NormalizeOptions::default()).unwrap();
        assert_eq!(out.as_deref(), Some("hello world"));
    }

    #[test]
    fn slugify_joins_on_separator() {
        assert_eq!(slugify_str("Hello, World!", '-').as_deref(), Some("hello-world"));
    }

    #[test]
    fn slugify_custom_separator_transliterates() {
        assert_eq!(slugify_str("Bon Apétit", '_').as_deref(), Some("bon_apetit"));
    }

    #[test]
    fn slugify_pure_punctuation_is_none() {
        assert_eq!(slugify_str("@@@", '-'), None);
    }
}
