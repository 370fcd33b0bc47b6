use crate::{
    context::Context,
    script::Script,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Collapse whitespace runs to a single ASCII space and trim both edges.
///
/// Whitespace is every character with Unicode `White_Space=Yes`: ASCII
/// `\t \n \v \f \r` and space, plus NBSP, the U+2000 block, U+3000 and the
/// rest. A lone non-space whitespace character (`a\tb`) is also rewritten
/// to `' '`.
///
/// Zero-copy when the text is already clean, which is the common case for
/// stored dictionary text.
///
/// | input              | output     |
/// |--------------------|------------|
/// | `"  a  b "`        | `"a b"`    |
/// | `"a\u{00A0}b"`     | `"a b"`    |
/// | `"\t\n"`           | `""`       |
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeWhitespace;

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        if text.is_empty() {
            return false;
        }

        // Hot path: ASCII bytes, no decoding.
        if text.is_ascii() {
            let bytes = text.as_bytes();
            let mut prev_ws = true;
            for &b in bytes {
                let ws = b.is_ascii_whitespace() || b == 0x0B;
                if ws && (prev_ws || b != b' ') {
                    return true;
                }
                prev_ws = ws;
            }
            return prev_ws;
        }

        // Leading whitespace counts as a run start, hence `prev_ws = true`.
        let mut prev_ws = true;
        for c in text.chars() {
            let ws = c.is_whitespace();
            if ws && (prev_ws || c != ' ') {
                return true;
            }
            prev_ws = ws;
        }
        // Trailing whitespace.
        prev_ws
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        for word in text.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for NormalizeWhitespace {
    fn should_pass_through(_script: Script) -> &'static [&'static str] {
        &["hello", "abc def", "كتاب جميل", "a b c", ""]
    }

    fn should_transform(_script: Script) -> &'static [(&'static str, &'static str)] {
        &[
            ("  a  b ", "a b"),
            ("a\tb", "a b"),
            ("a\u{00A0}b", "a b"),
            ("\u{3000}كتاب\u{2003}جميل\u{3000}", "كتاب جميل"),
            ("\t\n", ""),
            (" ", ""),
            ("a\u{000B}b", "a b"),
        ]
    }
}
