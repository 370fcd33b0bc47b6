pub mod preset;

use crate::{
    context::Context,
    process::{ChainedProcess, EmptyProcess, Process},
    stage::Stage,
};
use std::borrow::Cow;

/// A named, ordered chain of stages.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One pass through every stage, in order.
    #[inline]
    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        self.pipeline.process(text, ctx)
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{ARA, FRA};
    use crate::stage::{
        normalize_whitespace::NormalizeWhitespace, strip_gender_markers::StripGenderMarkers,
    };

    #[test]
    fn builder_keeps_name() {
        let p = Profile::builder("custom")
            .add_stage(NormalizeWhitespace)
            .build();
        assert_eq!(p.name(), "custom");
    }

    #[test]
    fn empty_profile_is_identity() {
        let p = Profile::builder("empty").build();
        assert_eq!(p.run(Cow::Borrowed(" x "), &Context::new(FRA)), " x ");
        assert_eq!(p.run(Cow::Borrowed(" x "), &Context::new(ARA)), " x ");
    }

    #[test]
    fn stages_see_previous_output() {
        let p = Profile::builder("fr")
            .add_stage(StripGenderMarkers)
            .add_stage(NormalizeWhitespace)
            .build();
        let ctx = Context::new(FRA);
        let once = p.run(Cow::Borrowed(" chat (m.) "), &ctx).into_owned();
        assert_eq!(once, "chat");
        assert!(matches!(p.run(Cow::Borrowed(once.as_str()), &ctx), Cow::Borrowed(_)));
    }
}
