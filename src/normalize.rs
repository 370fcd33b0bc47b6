//! Text normalizers for the three glossary scripts.
//!
//! Each function is pure and total: any string in, a string out, never an
//! error. English and French are idempotent; Arabic is idempotent unless
//! its output still starts a word with `ال` (see [`normalize_arabic`]).

use crate::{
    context::Context,
    profile::preset,
    script::{ARA, ENG, FRA, Script},
};
use std::borrow::Cow;

/// Canonical Arabic headword used as the clustering key.
///
/// One pass, in this order: strip tashkīl, strip tatweel, drop the
/// word-initial article `ال`, fold hamza-bearing alefs to `ا`, delete
/// parenthesized asides, turn every non-Arabic character into a space,
/// collapse whitespace.
///
/// Idempotent except when the pass itself leaves a word-initial `ال` behind:
/// folding creates one (`آلة` → `الة`), a removed aside or foreign prefix
/// exposes one (`(x)الكتاب` → `الكتاب`), or the word carried two
/// (`الالكتاب` → `الكتاب`). A second call strips that article.
///
/// A headword made only of foreign text normalizes to `""`.
pub fn normalize_arabic(text: &str) -> String {
    preset::arabic_headword()
        .run(Cow::Borrowed(text), &Context::new(ARA))
        .into_owned()
}

/// Collapse whitespace runs and trim. Case is significant.
pub fn normalize_english(text: &str) -> String {
    preset::english_gloss()
        .run(Cow::Borrowed(text), &Context::new(ENG))
        .into_owned()
}

/// Drop `(m.)`, `(f.)`, `[m.]`, `[f.]`, then collapse whitespace and trim.
pub fn normalize_french(text: &str) -> String {
    preset::french_gloss()
        .run(Cow::Borrowed(text), &Context::new(FRA))
        .into_owned()
}

/// Dispatch on a script constant. Unknown scripts pass through whitespace
/// normalization only.
pub fn normalize(script: Script, text: &str) -> String {
    match script.code() {
        "ARA" => normalize_arabic(text),
        "FRA" => normalize_french(text),
        _ => normalize_english(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize_arabic("مُحَمَّد"), "محمد");
    }

    #[test]
    fn strips_article() {
        assert_eq!(normalize_arabic("الكتاب"), "كتاب");
        assert_eq!(normalize_arabic("الكتاب المقدس"), "كتاب مقدس");
    }

    #[test]
    fn folds_alef() {
        assert_eq!(normalize_arabic("أحمد"), normalize_arabic("احمد"));
        assert_eq!(normalize_arabic("إسلام"), "اسلام");
    }

    #[test]
    fn article_created_by_folding_is_kept() {
        assert_eq!(normalize_arabic("آلة"), "الة");
        assert_eq!(normalize_arabic("ألمانيا"), "المانيا");
        assert_eq!(normalize_arabic("إلكترون"), "الكترون");
        assert_ne!(normalize_arabic("ألم"), normalize_arabic("م"));
    }

    #[test]
    fn single_pass_leaves_exposed_article() {
        assert_eq!(normalize_arabic("(x)الكتاب"), "الكتاب");
        assert_eq!(normalize_arabic("الالكتاب"), "الكتاب");
    }

    #[test]
    fn foreign_only_headword_collapses_to_empty() {
        assert_eq!(normalize_arabic("CPU"), "");
        assert_eq!(normalize_arabic("(وحدة)"), "");
        assert_eq!(normalize_arabic("ال"), "");
        assert_eq!(normalize_arabic(""), "");
    }

    #[test]
    fn mixed_script_headword() {
        assert_eq!(normalize_arabic("الحاسوب (computer) PC"), "حاسوب");
        assert_eq!(normalize_arabic("برنامج\u{00A0}حاسوبي"), "برنامج حاسوبي");
    }

    #[test]
    fn english_is_case_sensitive() {
        assert_eq!(normalize_english("  Car "), "Car");
        assert_ne!(normalize_english("Car"), normalize_english("car"));
    }

    #[test]
    fn french_markers() {
        assert_eq!(normalize_french("chat (m.)"), "chat");
        assert_eq!(normalize_french("  table   [f.] "), "table");
        assert_eq!(normalize_french("(m.)"), "");
    }

    #[test]
    fn dispatch_by_script() {
        assert_eq!(normalize(ARA, "الكتاب"), "كتاب");
        assert_eq!(normalize(FRA, "chat (m.)"), "chat");
        assert_eq!(normalize(ENG, "chat (m.)"), "chat (m.)");
    }
}
