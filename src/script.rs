pub mod data;

pub use data::{ARA, ENG, FRA, SCRIPT_TABLE, all_scripts};

use phf::Map;

/// One of the three scripts a glossary entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Script {
    pub code: &'static str,
    pub name: &'static str,
}

impl Script {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

pub const DEFAULT_SCRIPT: Script = ENG;

/// Static orthographic rules for a script.
///
/// Every field is optional: a stage whose rule is absent for the current
/// script leaves the text untouched.
#[derive(Clone, Copy, Debug)]
pub struct ScriptEntry {
    /// Inclusive code point range of the script's native block.
    pub block: Option<(char, char)>,
    /// Inclusive range of combining marks stripped before comparison.
    pub diacritics: Option<(char, char)>,
    /// Typographic elongation character with no phonetic value.
    pub elongation: Option<char>,
    /// Word-initial definite article removed from headwords.
    pub definite_article: Option<&'static str>,
    /// Letter variants folded onto a single base letter.
    pub letter_folds: Option<&'static Map<char, char>>,
    /// Literal annotation substrings removed from glosses.
    pub gender_markers: &'static [&'static str],
}

impl ScriptEntry {
    /// An entry with no rules at all.
    pub const NEUTRAL: ScriptEntry = ScriptEntry {
        block: None,
        diacritics: None,
        elongation: None,
        definite_article: None,
        letter_folds: None,
        gender_markers: &[],
    };

    #[inline(always)]
    pub fn is_native(&self, c: char) -> bool {
        self.block.is_some_and(|(lo, hi)| (lo..=hi).contains(&c))
    }

    #[inline(always)]
    pub fn is_diacritic(&self, c: char) -> bool {
        self.diacritics.is_some_and(|(lo, hi)| (lo..=hi).contains(&c))
    }

    #[inline(always)]
    pub fn is_elongation(&self, c: char) -> bool {
        self.elongation == Some(c)
    }

    #[inline(always)]
    pub fn fold(&self, c: char) -> char {
        self.letter_folds
            .and_then(|folds| folds.get(&c).copied())
            .unwrap_or(c)
    }

    #[inline]
    pub fn has_letter_folds(&self) -> bool {
        self.letter_folds.is_some_and(|folds| !folds.is_empty())
    }
}
