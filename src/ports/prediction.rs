//! Prediction service port: one unary call to a hosted model endpoint.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::InvokeError;

/// Boxed future type alias used by [`PredictionService`] to keep the trait dyn-compatible.
pub type PredictFuture<'a> = Pin<Box<dyn Future<Output = Result<String, InvokeError>> + Send + 'a>>;

/// A prediction request addressed to a model resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Resource path of the model
    /// (`projects/<project>/locations/<region>/publishers/<publisher>/models/<model>`).
    pub endpoint: String,
    /// Instance payloads, one per input.
    pub instances: Vec<serde_json::Value>,
    /// Generation parameters payload.
    pub parameters: serde_json::Value,
}

/// Body sent on the wire; the endpoint travels in the URL.
#[derive(Serialize)]
pub(crate) struct PredictBody<'a> {
    pub instances: &'a [serde_json::Value],
    pub parameters: &'a serde_json::Value,
}

impl PredictRequest {
    /// The JSON body for this request.
    pub(crate) fn body(&self) -> PredictBody<'_> {
        PredictBody { instances: &self.instances, parameters: &self.parameters }
    }
}

/// Sends prediction requests to a model endpoint.
pub trait PredictionService: Send + Sync {
    /// Issues the request and returns the raw reply body on success.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::Transport`] when the endpoint cannot be reached
    /// and [`InvokeError::Remote`] when the provider rejects the call.
    fn predict(&self, request: &PredictRequest) -> PredictFuture<'_>;
}
