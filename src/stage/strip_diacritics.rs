//! src/stage/strip_diacritics.rs
//!
//! Removes the script's combining vowel marks (Arabic tashkīl).

use crate::{
    context::Context,
    script::Script,
    stage::{CharMapper, Stage, map_chars, mapper_changes},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Removes the diacritics declared by the script's [`ScriptEntry`].
///
/// For Arabic this is the contiguous block U+064B–U+0652: the three tanwīn
/// forms, fatha, damma, kasra, shadda and sukūn. Marks outside that range
/// (maddah above, superscript alef) are kept.
///
/// Unlike Latin accent folding there is no decomposition step: Arabic
/// diacritics are always separate code points in stored text.
///
/// [`ScriptEntry`]: crate::script::ScriptEntry
#[derive(Debug, Default, Clone, Copy)]
pub struct StripDiacritics;

impl Stage for StripDiacritics {
    fn name(&self) -> &'static str {
        "strip_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        if text.is_ascii() || ctx.entry.diacritics.is_none() {
            return false;
        }
        mapper_changes(self, text, ctx)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if ctx.entry.diacritics.is_none() {
            return text;
        }
        map_chars(self, text, ctx)
    }
}

impl CharMapper for StripDiacritics {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        if ctx.entry.is_diacritic(c) {
            None
        } else {
            Some(c)
        }
    }
}

impl StageTestConfig for StripDiacritics {
    fn should_pass_through(script: Script) -> &'static [&'static str] {
        match script.code() {
            "ARA" => &["كتاب", "محمد", "hello", ""],
            _ => &["hello", "مُحَمَّد", "café", ""],
        }
    }

    fn should_transform(script: Script) -> &'static [(&'static str, &'static str)] {
        match script.code() {
            "ARA" => &[
                ("مُحَمَّد", "محمد"),
                ("كِتَابٌ", "كتاب"),
                ("مَرْحَبًا", "مرحبا"),
            ],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripDiacritics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{ARA, FRA};

    #[test]
    fn strips_shadda_and_short_vowels() {
        let ctx = Context::new(ARA);
        let out = StripDiacritics.apply(Cow::Borrowed("مُحَمَّد"), &ctx);
        assert_eq!(out, "محمد");
    }

    #[test]
    fn keeps_superscript_alef() {
        let ctx = Context::new(ARA);
        let input = "هٰذا";
        assert!(!StripDiacritics.needs_apply(input, &ctx));
        assert_eq!(StripDiacritics.apply(Cow::Borrowed(input), &ctx), input);
    }

    #[test]
    fn latin_scripts_never_strip() {
        let ctx = Context::new(FRA);
        assert!(!StripDiacritics.needs_apply("مُحَمَّد", &ctx));
    }

    #[test]
    fn clean_arabic_stays_borrowed() {
        let ctx = Context::new(ARA);
        let input = "كتاب جميل";
        let out = StripDiacritics.apply(Cow::Borrowed(input), &ctx);
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
