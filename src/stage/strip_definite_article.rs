use crate::{
    context::Context,
    script::Script,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Remove the definite article from the start of every word.
///
/// A word starts at the beginning of the text or right after a whitespace
/// character. Only one article is removed per word: `الالكتاب` becomes
/// `الكتاب`. The article inside a word (`مالك`) is left alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripDefiniteArticle;

/// Byte offsets of every non-whitespace character that begins a word.
#[inline]
fn word_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut prev_ws = true;
    text.char_indices().filter_map(move |(i, c)| {
        let ws = c.is_whitespace();
        let start = prev_ws && !ws;
        prev_ws = ws;
        start.then_some(i)
    })
}

impl Stage for StripDefiniteArticle {
    fn name(&self) -> &'static str {
        "strip_definite_article"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        let Some(article) = ctx.entry.definite_article else {
            return false;
        };
        word_starts(text).any(|i| text[i..].starts_with(article))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let Some(article) = ctx.entry.definite_article else {
            return text;
        };
        let cuts: SmallVec<[usize; 8]> = word_starts(&text)
            .filter(|&i| text[i..].starts_with(article))
            .collect();
        if cuts.is_empty() {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for start in cuts {
            out.push_str(&text[last..start]);
            last = start + article.len();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

impl StageTestConfig for StripDefiniteArticle {
    fn should_pass_through(script: Script) -> &'static [&'static str] {
        match script.code() {
            "ARA" => &["مالك", "كتاب", "كتاب جميل", "hello", ""],
            _ => &["hello", "الكتاب", ""],
        }
    }

    fn should_transform(script: Script) -> &'static [(&'static str, &'static str)] {
        match script.code() {
            "ARA" => &[
                ("الكتاب", "كتاب"),
                ("الكتاب المقدس", "كتاب مقدس"),
                ("  الشمس", "  شمس"),
                ("كتاب\tالعلم", "كتاب\tعلم"),
                ("الالكتاب", "الكتاب"),
                ("ال", ""),
            ],
            _ => &[],
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ARA;

    #[test]
    fn word_starts_follow_whitespace() {
        let starts: Vec<usize> = word_starts(" ab  c").collect();
        assert_eq!(starts, vec![1, 5]);
    }

    #[test]
    fn article_after_punctuation_is_not_word_initial() {
        let ctx = Context::new(ARA);
        assert!(!StripDefiniteArticle.needs_apply("(الكتاب)", &ctx));
    }

    #[test]
    fn strips_every_word() {
        let ctx = Context::new(ARA);
        let out = StripDefiniteArticle.apply(Cow::Borrowed("الجمعية العامة للامم"), &ctx);
        assert_eq!(out, "جمعية عامة للامم");
    }
}
