pub mod aggregate;
pub mod config;
pub mod context;
pub mod error;
pub mod normalize;
pub mod process;
pub mod profile;
pub mod provider;
pub mod script;
pub mod search;
pub mod stage;
pub mod term;
#[doc(hidden)]
pub mod testing;

pub use aggregate::{Occurrence, TermCluster, aggregate, aggregate_terms};
pub use config::SearchConfig;
pub use error::{AggregateError, ProviderError, Result, SearchError};
pub use normalize::{normalize, normalize_arabic, normalize_english, normalize_french};
pub use provider::{InMemoryProvider, SearchProvider};
pub use script::{ARA, ENG, FRA, Script};
pub use search::{AggregatedResponse, GlossarySearch, RawSearchResponse};
pub use stage::fold_letters::FoldLetters;
pub use stage::normalize_whitespace::NormalizeWhitespace;
pub use stage::replace_foreign_chars::ReplaceForeignChars;
pub use stage::strip_definite_article::StripDefiniteArticle;
pub use stage::strip_diacritics::StripDiacritics;
pub use stage::strip_elongation::StripElongation;
pub use stage::strip_gender_markers::StripGenderMarkers;
pub use stage::strip_parentheticals::StripParentheticals;
pub use term::{Identifier, RawRecord, RawTerm};
