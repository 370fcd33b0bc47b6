use crate::{script::Script, stage::Stage};

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes). Every sample
    /// must be a fixpoint after one application.
    fn samples(_script: Script) -> &'static [&'static str] {
        &[
            "Hello World 123",
            "  spaced \t out ",
            "كتاب",
            "مُحَمَّد",
            "chat (m.)",
            "",
        ]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through(_script: Script) -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_script: Script) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal contract:
///
/// 1. `zero_copy_when_no_changes` → pass-through samples are returned borrowed
/// 2. `needs_apply_is_accurate` → `needs_apply` predicts exactly whether `apply` changes text
/// 3. `stage_is_idempotent` → on the samples, applying twice equals applying once
/// 4. `transforms_as_expected` → known input/output pairs hold
/// 5. `handles_empty_string` → empty in, empty out, no work
/// 6. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::transforms_as_expected(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use crate::{context::Context, script::all_scripts};
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
const MIXED_SCRIPT_INPUTS: &[&str] = &[
    "ال",
    "(",
    ")(",
    "((()))",
    "[m.](f.)",
    "\u{0640}\u{0640}\u{064B}",
    "الـكِتَابُ (book) [m.] 📚",
    "\u{200F}مرحبا\u{200E} world\u{00A0}\u{3000}",
    "a\u{0301}\u{0302}\u{0303}",
    "\u{FEFF}\u{0000}\u{001F}",
    "أإآ ٱ",
];

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        for &input in S::should_pass_through(script) {
            assert!(
                !stage.needs_apply(input, &ctx),
                "`{}` claims work on pass-through sample `{input}` ({script:?})",
                stage.name()
            );
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(out.as_ref(), input);
            assert!(
                matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                "`{}` allocated on pass-through sample `{input}` ({script:?})",
                stage.name()
            );
        }
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        let inputs = S::samples(script)
            .iter()
            .copied()
            .chain(S::should_transform(script).iter().map(|&(i, _)| i))
            .chain(MIXED_SCRIPT_INPUTS.iter().copied());
        for input in inputs {
            let predicted = stage.needs_apply(input, &ctx);
            let changed = stage.apply(Cow::Borrowed(input), &ctx) != input;
            assert_eq!(
                predicted,
                changed,
                "`{}` needs_apply mismatch on `{input}` ({script:?})",
                stage.name()
            );
        }
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        for &input in S::samples(script) {
            let once = stage.apply(Cow::Borrowed(input), &ctx).into_owned();
            let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx);
            assert_eq!(
                twice.as_ref(),
                once,
                "`{}` not idempotent on `{input}` ({script:?})",
                stage.name()
            );
            assert!(!stage.needs_apply(&once, &ctx));
        }
    }
}

#[cfg(test)]
pub fn transforms_as_expected<S: StageTestConfig>(stage: &S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        for &(input, expected) in S::should_transform(script) {
            assert_eq!(
                stage.apply(Cow::Borrowed(input), &ctx),
                expected,
                "`{}` on `{input}` ({script:?})",
                stage.name()
            );
        }
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        assert!(!stage.needs_apply("", &ctx));
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx), "");
    }
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for &script in all_scripts() {
        let ctx = Context::new(script);
        for &input in MIXED_SCRIPT_INPUTS {
            let _ = stage.needs_apply(input, &ctx);
            let _ = stage.apply(Cow::Borrowed(input), &ctx);
        }
    }
}
