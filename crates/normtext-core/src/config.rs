//! Configuration for the normalization pipeline.
//!
//! Options are explicit values constructed by the caller and passed by
//! reference into every call. The core crate reads no environment and keeps
//! no mutable global state, so identical options on identical input always
//! yield identical output.

use crate::categories::CategorySet;

/// Options controlling the `normalize` pipeline.
///
/// Stage order is fixed: lowercase, decompose, script reduction, category
/// replacement, collapse. Options only switch stages on or off; they never
/// reorder them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeOptions {
    /// Apply full Unicode-aware lowercasing before any other stage.
    pub lowercase: bool,

    /// Collapse whitespace runs and trim the ends at the end of the pipeline.
    pub collapse: bool,

    /// Apply NFKD decomposition, separating base characters from their
    /// combining marks so that category replacement can strip the marks.
    pub decompose: bool,

    /// General transliteration of non-Latin scripts. Ignored when `ascii`
    /// is set.
    pub latinize: bool,

    /// Strict transliteration: transliterate, then delete anything outside
    /// the printable ASCII range. Takes precedence over `latinize`.
    pub ascii: bool,

    /// Categories replaced with whitespace. Defaults to every category
    /// except letters.
    pub replace_categories: CategorySet,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            collapse: true,
            decompose: false,
            latinize: false,
            ascii: false,
            replace_categories: CategorySet::default_replace(),
        }
    }
}

impl NormalizeOptions {
    /// The option set used for slug generation: defaults plus strict ASCII
    /// transliteration.
    pub fn slug() -> Self {
        Self {
            ascii: true,
            ..Self::default()
        }
    }
}
