//! Core normalization stage abstraction.
//!
//! A stage is one orthographic rule. Stages are pure and total: every input
//! string produces an output string, and a stage that has nothing to do
//! returns the input `Cow` untouched so clean text never allocates.
//!
//! Stages that are a per-character map (strip, fold, replace) implement
//! [`CharMapper`] and share [`map_chars`] / [`mapper_changes`] for their
//! `apply` / `needs_apply`. Stages that look at more than one character at a
//! time (articles, parentheses, whitespace runs) scan the text themselves.

pub mod fold_letters;
pub mod normalize_whitespace;
pub mod replace_foreign_chars;
pub mod strip_definite_article;
pub mod strip_diacritics;
pub mod strip_elongation;
pub mod strip_gender_markers;
pub mod strip_parentheticals;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Must return `true` exactly when `apply` would change
    /// the text.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Returns `text` unchanged (same
    /// buffer) when there is nothing to do.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// A stage expressible as a 1→1 or 1→0 character mapping.
pub trait CharMapper: Send + Sync {
    /// Map a single Unicode scalar value.
    /// Return `None` if the character should be **removed**.
    fn map(&self, c: char, ctx: &Context) -> Option<char>;
}

/// `true` if `mapper` would alter at least one character of `text`.
#[inline]
pub fn mapper_changes<M: CharMapper + ?Sized>(mapper: &M, text: &str, ctx: &Context) -> bool {
    text.chars().any(|c| mapper.map(c, ctx) != Some(c))
}

/// Run `mapper` over `text`, copying only from the first changed character on.
pub fn map_chars<'a, M: CharMapper + ?Sized>(
    mapper: &M,
    text: Cow<'a, str>,
    ctx: &Context,
) -> Cow<'a, str> {
    let Some(first) = text
        .char_indices()
        .find(|&(_, c)| mapper.map(c, ctx) != Some(c))
        .map(|(i, _)| i)
    else {
        return text;
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    out.extend(text[first..].chars().filter_map(|c| mapper.map(c, ctx)));
    Cow::Owned(out)
}
