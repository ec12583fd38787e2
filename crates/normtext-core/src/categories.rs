//! Unicode general-category classification and category-based replacement.
//!
//! Every code point is assigned exactly one general category by the Unicode
//! standard. This module:
//! - exposes that assignment as a total lookup (`category`)
//! - defines `CategorySet`, an explicit set of categories to replace
//! - implements the replacement pass (`category_replace`)
//!
//! The category table itself is a versioned data dependency (the
//! `unicode-general-category` crate, pinned to a specific Unicode release),
//! not logic owned by this crate.

use std::collections::BTreeSet;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::defaults;
use crate::errors::{NormError, NormResult};

/// A Unicode general category.
///
/// Codes follow the two-letter abbreviations of the Unicode Character
/// Database (`Ll`, `Po`, `Zs`, ...). Rust `char` excludes surrogate values,
/// so `Surrogate` cannot be produced by `category`, but the variant is kept
/// so the enumeration is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Control,
    Format,
    Surrogate,
    PrivateUse,
    Unassigned,
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
}

/// All categories, in UCD order.
pub const ALL_CATEGORIES: [Category; 30] = [
    Category::Control,
    Category::Format,
    Category::Surrogate,
    Category::PrivateUse,
    Category::Unassigned,
    Category::UppercaseLetter,
    Category::LowercaseLetter,
    Category::TitlecaseLetter,
    Category::ModifierLetter,
    Category::OtherLetter,
    Category::NonspacingMark,
    Category::SpacingMark,
    Category::EnclosingMark,
    Category::DecimalNumber,
    Category::LetterNumber,
    Category::OtherNumber,
    Category::ConnectorPunctuation,
    Category::DashPunctuation,
    Category::OpenPunctuation,
    Category::ClosePunctuation,
    Category::InitialPunctuation,
    Category::FinalPunctuation,
    Category::OtherPunctuation,
    Category::MathSymbol,
    Category::CurrencySymbol,
    Category::ModifierSymbol,
    Category::OtherSymbol,
    Category::SpaceSeparator,
    Category::LineSeparator,
    Category::ParagraphSeparator,
];

impl Category {
    /// The two-letter UCD code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
        }
    }

    /// Parse a two-letter UCD code (case-insensitive).
    pub fn parse(code: &str) -> NormResult<Self> {
        for cat in ALL_CATEGORIES {
            if cat.code().eq_ignore_ascii_case(code.trim()) {
                return Ok(cat);
            }
        }
        Err(NormError::invalid_argument(format!(
            "unknown category code: {code}"
        )))
    }

    /// Whether this is one of the five letter categories.
    pub fn is_letter(&self) -> bool {
        matches!(
            self,
            Self::UppercaseLetter
                | Self::LowercaseLetter
                | Self::TitlecaseLetter
                | Self::ModifierLetter
                | Self::OtherLetter
        )
    }
}

/// Total category lookup for a single code point.
pub fn category(ch: char) -> Category {
    match get_general_category(ch) {
        GeneralCategory::Control => Category::Control,
        GeneralCategory::Format => Category::Format,
        GeneralCategory::Surrogate => Category::Surrogate,
        GeneralCategory::PrivateUse => Category::PrivateUse,
        GeneralCategory::Unassigned => Category::Unassigned,
        GeneralCategory::UppercaseLetter => Category::UppercaseLetter,
        GeneralCategory::LowercaseLetter => Category::LowercaseLetter,
        GeneralCategory::TitlecaseLetter => Category::TitlecaseLetter,
        GeneralCategory::ModifierLetter => Category::ModifierLetter,
        GeneralCategory::OtherLetter => Category::OtherLetter,
        GeneralCategory::NonspacingMark => Category::NonspacingMark,
        GeneralCategory::SpacingMark => Category::SpacingMark,
        GeneralCategory::EnclosingMark => Category::EnclosingMark,
        GeneralCategory::DecimalNumber => Category::DecimalNumber,
        GeneralCategory::LetterNumber => Category::LetterNumber,
        GeneralCategory::OtherNumber => Category::OtherNumber,
        GeneralCategory::ConnectorPunctuation => Category::ConnectorPunctuation,
        GeneralCategory::DashPunctuation => Category::DashPunctuation,
        GeneralCategory::OpenPunctuation => Category::OpenPunctuation,
        GeneralCategory::ClosePunctuation => Category::ClosePunctuation,
        GeneralCategory::InitialPunctuation => Category::InitialPunctuation,
        GeneralCategory::FinalPunctuation => Category::FinalPunctuation,
        GeneralCategory::OtherPunctuation => Category::OtherPunctuation,
        GeneralCategory::MathSymbol => Category::MathSymbol,
        GeneralCategory::CurrencySymbol => Category::CurrencySymbol,
        GeneralCategory::ModifierSymbol => Category::ModifierSymbol,
        GeneralCategory::OtherSymbol => Category::OtherSymbol,
        GeneralCategory::SpaceSeparator => Category::SpaceSeparator,
        GeneralCategory::LineSeparator => Category::LineSeparator,
        GeneralCategory::ParagraphSeparator => Category::ParagraphSeparator,
    }
}

/// An explicit set of categories subject to replacement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySet(BTreeSet<Category>);

impl CategorySet {
    /// The empty set (nothing is replaced).
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Every category.
    pub fn all() -> Self {
        Self(ALL_CATEGORIES.into_iter().collect())
    }

    /// The default replacement set: every category except the five letter
    /// categories. With this set only letters survive unreplaced.
    pub fn default_replace() -> Self {
        Self(
            ALL_CATEGORIES
                .into_iter()
                .filter(|c| !c.is_letter())
                .collect(),
        )
    }

    /// Parse a comma-separated list of UCD codes, e.g. `"Po,Sm,Zs"`.
    pub fn parse_codes(codes: &str) -> NormResult<Self> {
        let mut set = BTreeSet::new();
        for code in codes.split(',') {
            let code = code.trim();
            if code.is_empty() {
                continue;
            }
            set.insert(Category::parse(code)?);
        }
        Ok(Self(set))
    }

    pub fn insert(&mut self, cat: Category) -> bool {
        self.0.insert(cat)
    }

    pub fn remove(&mut self, cat: Category) -> bool {
        self.0.remove(&cat)
    }

    pub fn contains(&self, cat: Category) -> bool {
        self.0.contains(&cat)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Inputs at least this large go through the parallel replacement path.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD_BYTES: usize = 64 * 1024;

/// Replace every code point whose category is in `replace` with a single
/// whitespace character.
///
/// Replacement is 1:1 per code point: nothing is removed outright, which is
/// what makes a subsequent collapse pass meaningful. Positions have no data
/// dependency on each other, so large inputs may be processed in parallel
/// (feature `parallel`) without changing the output.
pub fn category_replace(text: &str, replace: &CategorySet) -> String {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        if text.len() >= PARALLEL_THRESHOLD_BYTES {
            return text
                .par_chars()
                .map(|ch| {
                    if replace.contains(category(ch)) {
                        defaults::WS
                    } else {
                        ch
                    }
                })
                .collect();
        }
    }

    text.chars()
        .map(|ch| {
            if replace.contains(category(ch)) {
                defaults::WS
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_total() {
        assert_eq!(category('a'), Category::LowercaseLetter);
        assert_eq!(category('A'), Category::UppercaseLetter);
        assert_eq!(category('1'), Category::DecimalNumber);
        assert_eq!(category('!'), Category::OtherPunctuation);
        assert_eq!(category('$'), Category::CurrencySymbol);
        assert_eq!(category('+'), Category::MathSymbol);
        assert_eq!(category(' '), Category::SpaceSeparator);
        assert_eq!(category('\n'), Category::Control);
        assert_eq!(category('\u{0301}'), Category::NonspacingMark);
        assert_eq!(category('\u{2028}'), Category::LineSeparator);
        assert_eq!(category('\u{e000}'), Category::PrivateUse);
    }

    #[test]
    fn unassigned_maps_to_defined_label() {
        // U+0378 has no assignment in current Unicode.
        assert_eq!(category('\u{0378}'), Category::Unassigned);
    }

    #[test]
    fn codes_round_trip() {
        for cat in ALL_CATEGORIES {
            assert_eq!(Category::parse(cat.code()).unwrap(), cat);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("po").unwrap(), Category::OtherPunctuation);
        assert_eq!(Category::parse("LL").unwrap(), Category::LowercaseLetter);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Category::parse("Xx").is_err());
    }

    #[test]
    fn default_replace_excludes_exactly_letters() {
        let set = CategorySet::default_replace();
        assert_eq!(set.len(), 25);
        for cat in ALL_CATEGORIES {
            assert_eq!(set.contains(cat), !cat.is_letter(), "category {}", cat.code());
        }
    }

    #[test]
    fn parse_codes_builds_set() {
        let set = CategorySet::parse_codes("Po, Sm,Zs").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Category::OtherPunctuation));
        assert!(set.contains(Category::MathSymbol));
        assert!(set.contains(Category::SpaceSeparator));
    }

    #[test]
    fn replace_substitutes_whitespace_one_to_one() {
        let out = category_replace("a1!b", &CategorySet::default_replace());
        assert_eq!(out, "a  b");
    }

    #[test]
    fn replace_with_empty_set_is_identity() {
        let out = category_replace("a1!b £", &CategorySet::empty());
        assert_eq!(out, "a1!b £");
    }

    #[test]
    fn currency_and_math_symbols_are_in_default_set() {
        let set = CategorySet::default_replace();
        assert!(set.contains(Category::CurrencySymbol));
        assert!(set.contains(Category::MathSymbol));
        assert_eq!(category_replace("a$b+c", &set), "a b c");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_path_matches_serial() {
        let chunk = "ab1!ü£ 中\u{0301}";
        let large: String = chunk.repeat(PARALLEL_THRESHOLD_BYTES / chunk.len() + 1);
        let set = CategorySet::default_replace();

        let parallel = category_replace(&large, &set);
        let serial: String = large
            .chars()
            .map(|ch| if set.contains(category(ch)) { defaults::WS } else { ch })
            .collect();
        assert_eq!(parallel, serial);
    }
}
