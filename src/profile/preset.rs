use crate::{
    FoldLetters, NormalizeWhitespace, ReplaceForeignChars, StripDefiniteArticle, StripDiacritics,
    StripElongation, StripGenderMarkers, StripParentheticals, process::Process, profile::Profile,
};

/// Arabic headword → grouping key. Stage order is significant.
pub fn arabic_headword() -> Profile<impl Process> {
    Profile::builder("arabic_headword")
        .add_stage(StripDiacritics)
        .add_stage(StripElongation)
        .add_stage(StripDefiniteArticle)
        .add_stage(FoldLetters)
        .add_stage(StripParentheticals)
        .add_stage(ReplaceForeignChars)
        .add_stage(NormalizeWhitespace)
        .build()
}

/// English gloss: whitespace only, case preserved.
pub fn english_gloss() -> Profile<impl Process> {
    Profile::builder("english_gloss")
        .add_stage(NormalizeWhitespace)
        .build()
}

/// French gloss: gender annotations dropped, then whitespace.
pub fn french_gloss() -> Profile<impl Process> {
    Profile::builder("french_gloss")
        .add_stage(StripGenderMarkers)
        .add_stage(NormalizeWhitespace)
        .build()
}
