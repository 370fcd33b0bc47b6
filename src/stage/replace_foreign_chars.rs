use crate::{
    context::Context,
    script::Script,
    stage::{CharMapper, Stage, map_chars, mapper_changes},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Replace every character outside the script's native block with a space.
///
/// Whitespace is kept as is (a later whitespace stage collapses it). Latin
/// letters, digits, punctuation and emoji in an Arabic headword all become
/// spaces, one per character. Scripts without a declared block are left
/// untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReplaceForeignChars;

impl Stage for ReplaceForeignChars {
    fn name(&self) -> &'static str {
        "replace_foreign_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.entry.block.is_some() && mapper_changes(self, text, ctx)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if ctx.entry.block.is_none() {
            return text;
        }
        map_chars(self, text, ctx)
    }
}

impl CharMapper for ReplaceForeignChars {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        if ctx.entry.block.is_none() || ctx.entry.is_native(c) || c.is_whitespace() {
            Some(c)
        } else {
            Some(' ')
        }
    }
}

impl StageTestConfig for ReplaceForeignChars {
    fn should_pass_through(script: Script) -> &'static [&'static str] {
        match script.code() {
            "ARA" => &["كتاب", "كتاب جميل", " \t ", "؟،", ""],
            _ => &["hello", "abc def", "كتاب (x)", ""],
        }
    }

    fn should_transform(script: Script) -> &'static [(&'static str, &'static str)] {
        match script.code() {
            "ARA" => &[
                ("كتابx", "كتاب "),
                ("CPU وحدة", "    وحدة"),
                ("رقم 12", "رقم   "),
                ("\u{08A0}", " "), // Arabic Extended-A is outside the block
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
        assert_stage_contract!(ReplaceForeignChars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ARA;

    #[test]
    fn arabic_punctuation_and_digits_are_native() {
        let ctx = Context::new(ARA);
        // U+060C comma, U+061F question mark, U+0661 ARABIC-INDIC DIGIT ONE
        let input = "،؟١";
        assert!(!ReplaceForeignChars.needs_apply(input, &ctx));
    }

    #[test]
    fn one_space_per_foreign_char() {
        let ctx = Context::new(ARA);
        let out = ReplaceForeignChars.apply(Cow::Borrowed("ab"), &ctx);
        assert_eq!(out, "  ");
    }
}
