//! Process abstraction.
//!
//! `ChainedProcess` is monomorphised: the compiler knows the concrete type of
//! every stage, so a preset compiles down to straight-line calls with no
//! vtable and no per-stage allocation beyond what a stage itself needs.
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }
}

/// `previous` runs first, then `stage`.
pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process(text, ctx);
        if !self.stage.needs_apply(&current, ctx) {
            return current;
        }
        self.stage.apply(current, ctx)
    }
}
