//! Text generation client for the hosted `text-bison` model.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use super::model::Response;
use super::params::Parameters;
use super::prompt;
use crate::error::GenerateError;
use crate::ports::prediction::{PredictRequest, PredictionService};

/// Model version used by every prediction call.
pub const MODEL_VERSION: &str = "text-bison@001";

/// Region hosting the model.
pub const REGION: &str = "us-central1";

/// Publisher of the model.
pub const PUBLISHER: &str = "google";

/// Static configuration of a [`TextClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Cloud project billed for the calls.
    pub project_id: String,
}

impl ClientConfig {
    /// Creates a configuration for `project_id`.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self { project_id: project_id.into() }
    }

    /// Resource path of the model for this project.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "projects/{}/locations/{REGION}/publishers/{PUBLISHER}/models/{MODEL_VERSION}",
            self.project_id
        )
    }
}

/// Generates text by calling the model through a [`PredictionService`].
///
/// The client holds only its configuration and a debug flag; every call is
/// an independent request/decode cycle.
pub struct TextClient {
    config: ClientConfig,
    service: Arc<dyn PredictionService>,
    debug: bool,
}

impl TextClient {
    /// Creates a client that sends requests through `service`.
    pub fn new(config: ClientConfig, service: Arc<dyn PredictionService>) -> Self {
        Self { config, service, debug: false }
    }

    /// Turns diagnostic logging of requests and raw replies on or off.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Whether diagnostic logging is enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Builds the prediction request for a compiled prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Payload`] if the parameters cannot be encoded.
    pub fn build_request(
        &self,
        compiled_prompt: &str,
        params: &Parameters,
    ) -> Result<PredictRequest, GenerateError> {
        let parameters = params.to_payload().map_err(GenerateError::Payload)?;
        Ok(PredictRequest {
            endpoint: self.config.endpoint(),
            instances: vec![json!({ "prompt": compiled_prompt })],
            parameters,
        })
    }

    /// Generates text for `prompt` using `template` (see [`prompt::compile`]).
    ///
    /// A response whose safety attributes mark it as blocked is returned
    /// normally; callers decide whether to reject it.
    ///
    /// # Errors
    ///
    /// Returns the failure of whichever layer failed: payload construction,
    /// transport, the remote service, or decoding of the reply.
    pub async fn generate_text(
        &self,
        template: &str,
        prompt: &str,
        params: &Parameters,
    ) -> Result<Response, GenerateError> {
        let compiled = prompt::compile(template, prompt);
        let request = self.build_request(&compiled, params)?;
        if self.debug {
            debug!(request = ?request, "sending request");
        }

        let body = self.service.predict(&request).await?;
        if self.debug {
            debug!(body = %body, "got response");
        }

        Response::decode_with(&body, |label, value| {
            if self.debug {
                debug!(payload = %value, "parsing {label}");
            }
        })
        .map_err(GenerateError::Decode)
    }
}
