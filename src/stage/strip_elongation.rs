use crate::{
    context::Context,
    script::Script,
    stage::{CharMapper, Stage, map_chars, mapper_changes},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Remove the typographic elongation character (Arabic tatweel, U+0640).
///
/// Tatweel only stretches a word for justification; `كـــتاب` and `كتاب`
/// are the same word.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripElongation;

impl Stage for StripElongation {
    fn name(&self) -> &'static str {
        "strip_elongation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.entry.elongation.is_some() && mapper_changes(self, text, ctx)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if ctx.entry.elongation.is_none() {
            return text;
        }
        map_chars(self, text, ctx)
    }
}

impl CharMapper for StripElongation {
    #[inline(always)]
    fn map(&self, c: char, ctx: &Context) -> Option<char> {
        (!ctx.entry.is_elongation(c)).then_some(c)
    }
}

impl StageTestConfig for StripElongation {
    fn should_transform(script: Script) -> &'static [(&'static str, &'static str)] {
        match script.code() {
            "ARA" => &[("كـــتاب", "كتاب"), ("ـ", ""), ("الـمـعـجـم", "المعجم")],
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
        assert_stage_contract!(StripElongation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{ARA, ENG};

    #[test]
    fn english_context_keeps_tatweel() {
        let ctx = Context::new(ENG);
        assert!(!StripElongation.needs_apply("كـتاب", &ctx));
    }

    #[test]
    fn removes_runs() {
        let ctx = Context::new(ARA);
        assert_eq!(
            StripElongation.apply(Cow::Borrowed("جـــــميل"), &ctx),
            "جميل"
        );
    }
}
