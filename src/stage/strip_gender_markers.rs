use crate::{
    context::Context,
    script::Script,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use memchr::memmem;
use std::borrow::Cow;

/// Remove grammatical-gender annotations from glosses.
///
/// French dictionaries tag nouns with `(m.)`, `(f.)`, `[m.]` or `[f.]`. Every
/// occurrence is removed, wherever it sits. Surrounding whitespace is left
/// for the whitespace stage.
///
/// Removal deliberately repeats until no marker is left, going past a single
/// literal replace: a marker spliced together by a removal (`(m(f.).)`) goes
/// too, which keeps the stage idempotent. Natural glosses never nest markers,
/// so both readings agree on them.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripGenderMarkers;

#[inline]
fn contains_marker(text: &str, markers: &[&str]) -> bool {
    markers
        .iter()
        .any(|m| memmem::find(text.as_bytes(), m.as_bytes()).is_some())
}

impl Stage for StripGenderMarkers {
    fn name(&self) -> &'static str {
        "strip_gender_markers"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        contains_marker(text, ctx.entry.gender_markers)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let markers = ctx.entry.gender_markers;
        if !contains_marker(&text, markers) {
            return text;
        }

        let mut out = text.into_owned();
        // Every pass removes at least one marker, so this terminates.
        while contains_marker(&out, markers) {
            for marker in markers {
                if memmem::find(out.as_bytes(), marker.as_bytes()).is_some() {
                    out = out.replace(marker, "");
                }
            }
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for StripGenderMarkers {
    fn should_pass_through(script: Script) -> &'static [&'static str] {
        match script.code() {
            "FRA" => &["chat", "(m)", "m.", "[ m.]", "(M.)", ""],
            _ => &["hello", "chat (m.)", ""],
        }
    }

    fn should_transform(script: Script) -> &'static [(&'static str, &'static str)] {
        match script.code() {
            "FRA" => &[
                ("chat (m.)", "chat "),
                ("chatte [f.]", "chatte "),
                ("livre (m.) [m.]", "livre  "),
                ("(f.)table", "table"),
                ("(m(f.).)", ""),
            ],
            _ => &[],
        }
    }
}
