use crate::{
    context::Context,
    script::Script,
    stage::{CharMapper, Stage, map_chars, mapper_changes},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Fold orthographic letter variants onto their base letter.
///
/// Arabic: `أ` (hamza above), `إ` (hamza below) and `آ` (madda) all become
/// the bare alef `ا`, so `أحمد` and `احمد` group together. The mapping is
/// 1→1 and lives in the script's static fold table.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldLetters;

impl Stage for FoldLetters {
    fn name(&self) -> &'static str {
        "fold_letters"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        if text.is_ascii() || !ctx.entry.has_letter_folds() {
            return false;
        }
        mapper_changes(self, text, ctx)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !ctx.entry.has_letter_folds() {
            return text;
        }
        map_chars(self, text, ctx)
    }
}

impl CharMapper for FoldLetters {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        Some(ctx.entry.fold(c))
    }
}

impl StageTestConfig for FoldLetters {
    fn should_pass_through(script: Script) -> &'static [&'static str] {
        match script.code() {
            "ARA" => &["احمد", "كتاب", "hello", ""],
            _ => &["hello", "أحمد", ""],
        }
    }

    fn should_transform(script: Script) -> &'static [(&'static str, &'static str)] {
        match script.code() {
            "ARA" => &[
                ("أحمد", "احمد"),
                ("إسلام", "اسلام"),
                ("آلة", "الة"),
                ("أإآ", "ااا"),
            ],
            _ => &[],
        }
    }
}
