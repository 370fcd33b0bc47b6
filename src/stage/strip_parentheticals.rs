use crate::{
    context::Context,
    script::Script,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use memchr::{memchr, memchr2};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Delete parenthesized asides, parentheses included.
///
/// Matching is leftmost and non-greedy: each `(` pairs with the nearest
/// following `)`. A span never crosses a line break; an `(` that meets `\n`
/// before any `)` is left in place. Nesting is not tracked, so `((a)b)`
/// becomes `b)`.
///
/// Script-agnostic: dictionary headwords annotate usage in parentheses in
/// any language.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripParentheticals;

/// Byte ranges `[start, end)` of every removable span, in order.
fn spans(text: &str) -> SmallVec<[(usize, usize); 4]> {
    let bytes = text.as_bytes();
    let mut spans = SmallVec::new();
    let mut pos = 0;

    // `(`, `)` and `\n` are ASCII, so byte offsets are always char boundaries.
    while let Some(offset) = memchr(b'(', &bytes[pos..]) {
        let open = pos + offset;
        match memchr2(b')', b'\n', &bytes[open + 1..]) {
            Some(len) if bytes[open + 1 + len] == b')' => {
                let end = open + len + 2;
                spans.push((open, end));
                pos = end;
            }
            _ => pos = open + 1,
        }
    }
    spans
}

impl Stage for StripParentheticals {
    fn name(&self) -> &'static str {
        "strip_parentheticals"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        memchr(b'(', text.as_bytes()).is_some() && !spans(text).is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        let spans = spans(&text);
        if spans.is_empty() {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (start, end) in spans {
            out.push_str(&text[last..start]);
            last = end;
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

impl StageTestConfig for StripParentheticals {
    fn should_pass_through(_script: Script) -> &'static [&'static str] {
        &[
            "no parens",
            "open ( only",
            "(line\nbreak)",
            "close ) first (",
            "",
        ]
    }

    fn should_transform(_script: Script) -> &'static [(&'static str, &'static str)] {
        &[
            ("حاسوب (كمبيوتر)", "حاسوب "),
            ("a (b) c (d)", "a  c "),
            ("(x)(y)z", "z"),
            ("((a)b)", "b)"),
            ("()", ""),
            ("(a\nb) (c)", "(a\nb) "),
        ]
    }
}
