//! Raw match records and their validated form.

use crate::error::AggregateError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// One match record as delivered by the search provider: a JSON object.
///
/// Kept untyped so that a missing key, a `null` and a wrongly typed value can
/// each be reported precisely.
pub type RawRecord = Map<String, Value>;

/// Opaque identifier: integer primary keys or string ids (e.g. Wikidata QIDs).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One matched dictionary entry, validated.
///
/// Optional fields are `None` when the provider omitted them (or sent
/// `null`); they are skipped on serialization rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTerm {
    pub id: Identifier,
    pub dictionary_id: Identifier,
    pub arabic: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub french: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub relevance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_wikidata_id: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_name_arabic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Page reference inside the source dictionary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl RawTerm {
    /// A term with every optional field absent.
    pub fn new(
        id: impl Into<Identifier>,
        dictionary_id: impl Into<Identifier>,
        arabic: impl Into<String>,
        english: impl Into<String>,
        relevance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            dictionary_id: dictionary_id.into(),
            arabic: arabic.into(),
            english: english.into(),
            french: None,
            description: None,
            relevance,
            dictionary_wikidata_id: None,
            dictionary_name_arabic: None,
            uri: None,
            page: None,
        }
    }

    pub fn with_french(mut self, french: impl Into<String>) -> Self {
        self.french = Some(french.into());
        self
    }

    pub fn with_wikidata_id(mut self, qid: impl Into<Identifier>) -> Self {
        self.dictionary_wikidata_id = Some(qid.into());
        self
    }

    /// `french`, unless absent or empty.
    #[inline]
    pub fn french_gloss(&self) -> Option<&str> {
        self.french.as_deref().filter(|f| !f.is_empty())
    }

    /// Validate the record at position `index` of the provider's output.
    ///
    /// # Errors
    ///
    /// [`AggregateError::MissingField`] when `id`, `dictionary_id`, `arabic`,
    /// `english` or `relevance` is absent or `null`;
    /// [`AggregateError::MalformedInput`] when a value has the wrong JSON type
    /// or `relevance` is negative.
    pub fn from_record(index: usize, record: &RawRecord) -> Result<Self, AggregateError> {
        let id = identifier(required(record, index, "id")?, index, "id")?;
        let dictionary_id = identifier(
            required(record, index, "dictionary_id")?,
            index,
            "dictionary_id",
        )?;
        let arabic = text(required(record, index, "arabic")?, index, "arabic")?;
        let english = text(required(record, index, "english")?, index, "english")?;
        let relevance = relevance(required(record, index, "relevance")?, index)?;

        Ok(Self {
            id,
            dictionary_id,
            arabic,
            english,
            french: optional(record, "french")
                .map(|v| text(v, index, "french"))
                .transpose()?,
            description: optional(record, "description")
                .map(|v| text(v, index, "description"))
                .transpose()?,
            relevance,
            dictionary_wikidata_id: optional(record, "dictionary_wikidata_id")
                .map(|v| identifier(v, index, "dictionary_wikidata_id"))
                .transpose()?,
            dictionary_name_arabic: optional(record, "dictionary_name_arabic")
                .map(|v| text(v, index, "dictionary_name_arabic"))
                .transpose()?,
            uri: optional(record, "uri")
                .map(|v| text(v, index, "uri"))
                .transpose()?,
            page: optional(record, "page")
                .map(|v| label(v, index, "page"))
                .transpose()?,
        })
    }
}

/// Relevance must be a finite, non-negative number.
pub(crate) fn check_relevance(index: usize, relevance: f64) -> Result<(), AggregateError> {
    if relevance.is_finite() && relevance >= 0.0 {
        Ok(())
    } else {
        Err(malformed(
            index,
            "relevance",
            format!("must be finite and non-negative, got {relevance}"),
        ))
    }
}

fn malformed(index: usize, field: &'static str, reason: impl Into<String>) -> AggregateError {
    AggregateError::MalformedInput {
        index,
        field,
        reason: reason.into(),
    }
}

fn required<'r>(
    record: &'r RawRecord,
    index: usize,
    field: &'static str,
) -> Result<&'r Value, AggregateError> {
    optional(record, field).ok_or(AggregateError::MissingField { index, field })
}

#[inline]
fn optional<'r>(record: &'r RawRecord, field: &str) -> Option<&'r Value> {
    record.get(field).filter(|v| !v.is_null())
}

fn identifier(value: &Value, index: usize, field: &'static str) -> Result<Identifier, AggregateError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Identifier::Number)
            .ok_or_else(|| malformed(index, field, format!("expected an integer id, got {n}"))),
        Value::String(s) => Ok(Identifier::Text(s.clone())),
        other => Err(malformed(
            index,
            field,
            format!("expected an integer or string id, got {}", json_type(other)),
        )),
    }
}

fn text(value: &Value, index: usize, field: &'static str) -> Result<String, AggregateError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| malformed(index, field, format!("expected a string, got {}", json_type(value))))
}

/// A string, or a number rendered as its decimal form.
fn label(value: &Value, index: usize, field: &'static str) -> Result<String, AggregateError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(malformed(
            index,
            field,
            format!("expected a string or number, got {}", json_type(other)),
        )),
    }
}

fn relevance(value: &Value, index: usize) -> Result<f64, AggregateError> {
    let relevance = value.as_f64().ok_or_else(|| {
        malformed(
            index,
            "relevance",
            format!("expected a number, got {}", json_type(value)),
        )
    })?;
    check_relevance(index, relevance)?;
    Ok(relevance)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
