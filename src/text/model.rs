//! Typed response model and the decoder for raw prediction replies.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A source the model attributes part of its output to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Citation {
    /// Character offset where the cited span starts.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub start_index: i64,
    /// Character offset where the cited span ends.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub end_index: i64,
    /// Source URL.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Source title.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Source license.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license: String,
    /// Source publication date, as reported.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub publication_date: String,
}

/// Citations attached to one prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationMetadata {
    /// Citations, possibly empty.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
}

/// Safety classification of one prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyAttributes {
    /// Whether the provider blocked the output.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "std::ops::Not::not")]
    pub blocked: bool,
    /// Category names.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Scores, parallel to `categories`.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<f64>,
}

impl SafetyAttributes {
    /// Iterates `(category, score)` pairs.
    pub fn scored_categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories.iter().map(String::as_str).zip(self.scores.iter().copied())
    }
}

/// One candidate generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Generated text.
    pub content: String,
    /// Citations for parts of `content`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub citation_metadata: CitationMetadata,
    /// Safety classification.
    #[serde(default, deserialize_with = "null_as_default")]
    pub safety_attributes: SafetyAttributes,
}

/// Billable characters and tokens for one side of a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenCountMetadata {
    /// Characters billed.
    pub total_billable_characters: u64,
    /// Tokens counted.
    pub total_tokens: u64,
}

/// Token accounting for input and output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenMetadata {
    /// Counts for the prompt.
    pub input_token_count: TokenCountMetadata,
    /// Counts for the generated candidates.
    pub output_token_count: TokenCountMetadata,
}

/// The decoded result of a prediction call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Candidates in the order the model ranked them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predictions: Vec<Prediction>,
    /// Token accounting for the whole call.
    #[serde(rename = "tokenMetadata", default)]
    pub metadata: TokenMetadata,
}

/// Loosely typed reply as returned by the service.
#[derive(Deserialize)]
struct RawReply {
    #[serde(default, deserialize_with = "null_as_default")]
    predictions: Vec<serde_json::Value>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    #[serde(default)]
    token_metadata: serde_json::Value,
}

impl Response {
    /// Decodes a raw prediction reply body.
    ///
    /// Known fields are transcoded into the typed model; unknown fields are
    /// ignored and absent optional fields take their zero value.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON, or if a known field is
    /// present with the wrong shape (including a prediction without `content`).
    pub fn decode(body: &str) -> Result<Self, serde_json::Error> {
        Self::decode_with(body, |_, _| {})
    }

    /// Decodes like [`Response::decode`], handing each payload to `inspect`
    /// (labelled `"metadata"` or `"prediction"`) before it is parsed.
    pub(crate) fn decode_with(
        body: &str,
        mut inspect: impl FnMut(&str, &serde_json::Value),
    ) -> Result<Self, serde_json::Error> {
        let raw: RawReply = serde_json::from_str(body)?;

        let metadata = match raw.metadata {
            Some(RawMetadata { token_metadata }) if !token_metadata.is_null() => {
                inspect("metadata", &token_metadata);
                serde_json::from_value(token_metadata)?
            }
            _ => TokenMetadata::default(),
        };

        let predictions = raw
            .predictions
            .into_iter()
            .map(|value| {
                inspect("prediction", &value);
                serde_json::from_value::<Prediction>(value)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { predictions, metadata })
    }

    /// The top-ranked prediction, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    /// Whether any prediction was blocked by the provider's safety filters.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.predictions.iter().any(|p| p.safety_attributes.blocked)
    }

    /// Billable characters for input plus output.
    #[must_use]
    pub fn total_billable_characters(&self) -> u64 {
        self.metadata.input_token_count.total_billable_characters
            + self.metadata.output_token_count.total_billable_characters
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "{e}"),
        }
    }
}

/// Reads an optional field, treating an explicit `null` like an absent one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &i64) -> bool {
    *n == 0
}
