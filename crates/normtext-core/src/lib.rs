//! normtext-core
//!
//! Core primitives for normtext:
//! - Unicode general-category classification and category-based replacement
//! - Latin transliteration (general and strict ASCII-only variants)
//! - Whitespace collapsing
//! - Encoding resolution for raw byte input
//! - The composed `normalize` and `slugify` operations

pub mod categories;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod normalize;
pub mod transliterate;
pub mod whitespace;

pub use crate::errors::{NormError, NormResult};
pub use crate::normalize::{normalize, normalize_str, slugify, slugify_str, TextInput};

/// Default normalization settings.
pub mod defaults {
    /// Replacement character for category-stripped code points.
    pub const WS: char = ' ';
    /// Fallback encoding label for byte input.
    pub const ENCODING: &str = "utf-8";
    /// Default separator for slug generation.
    pub const SLUG_SEP: char = '-';
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::categories::{category, category_replace, Category, CategorySet};
    pub use crate::config::NormalizeOptions;
    pub use crate::encoding::{decode, decode_as, resolve_encoding};
    pub use crate::normalize::{normalize, normalize_str, slugify, slugify_str, TextInput};
    pub use crate::transliterate::{ascii_text, latinize};
    pub use crate::whitespace::collapse_spaces;
    pub use crate::{NormError, NormResult};
}
