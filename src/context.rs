// src/context.rs
// Tiny, Copy, 'static-only: passed by reference through every stage.

use crate::script::{DEFAULT_SCRIPT, SCRIPT_TABLE, Script, ScriptEntry};

/// Runtime context passed to every normalization stage.
///
/// - `script`: human identifier (for logging and debugging)
/// - `entry`: the orthographic rules the stages read in their hot loops
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub script: Script,
    pub entry: ScriptEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}

impl Context {
    /// Create a context using the canonical static data for a script.
    ///
    /// A script missing from `SCRIPT_TABLE` gets the neutral entry, so every
    /// stage degrades to a no-op instead of failing.
    #[inline(always)]
    pub fn new(script: Script) -> Self {
        let entry = SCRIPT_TABLE
            .get(script.code())
            .copied()
            .unwrap_or(ScriptEntry::NEUTRAL);
        Self { script, entry }
    }

    /// Create a context and let the caller override rules before use.
    #[inline(always)]
    pub fn with_modified(script: Script, f: impl FnOnce(&mut ScriptEntry)) -> Self {
        let mut ctx = Self::new(script);
        f(&mut ctx.entry);
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{ARA, ENG};

    #[test]
    fn unknown_script_falls_back_to_neutral() {
        let ctx = Context::new(Script {
            code: "XXX",
            name: "Unknown",
        });
        assert!(ctx.entry.block.is_none());
        assert!(ctx.entry.gender_markers.is_empty());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Context::default().script, ENG);
    }

    #[test]
    fn with_modified_overrides_a_single_rule() {
        let ctx = Context::with_modified(ARA, |e| e.definite_article = None);
        assert!(ctx.entry.definite_article.is_none());
        assert!(ctx.entry.is_diacritic('\u{064E}'));
    }
}
