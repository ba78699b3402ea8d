//! Generation parameters and their named presets.

use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every prediction request.
///
/// There is no `Default` impl: zero values for `top_k` or `max_tokens`
/// produce degenerate calls, so every field must be chosen explicitly or
/// taken from one of the presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Randomness of token selection.
    pub temperature: f64,
    /// Nucleus-sampling probability cutoff.
    pub top_p: f64,
    /// Size of the candidate token pool.
    pub top_k: u32,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Number of alternative completions to return.
    pub candidate_count: u32,
}

impl Parameters {
    /// The values used by default in the Generative AI Studio.
    pub const DEFAULT: Self =
        Self { temperature: 0.2, top_p: 0.8, top_k: 40, max_tokens: 1024, candidate_count: 1 };

    /// Suggested values for more deterministic output.
    pub const MORE_DETERMINISTIC: Self =
        Self { temperature: 0.0, top_p: 0.8, top_k: 1, max_tokens: 1024, candidate_count: 1 };

    /// Suggested values for more creative output.
    pub const MORE_CREATIVE: Self =
        Self { temperature: 1.0, top_p: 1.0, top_k: 40, max_tokens: 1024, candidate_count: 1 };

    /// Maps the parameters onto the remote API's parameter names.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(WireParameters {
            temperature: self.temperature,
            max_output_tokens: self.max_tokens,
            top_p: self.top_p,
            top_k: self.top_k,
            candidate_count: self.candidate_count,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireParameters {
    temperature: f64,
    max_output_tokens: u32,
    top_p: f64,
    top_k: u32,
    candidate_count: u32,
}
