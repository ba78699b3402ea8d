//! Live adapter for the `PredictionService` port using the Vertex AI REST API.

use reqwest::Client;

use crate::error::{InvokeError, RemoteError};
use crate::ports::credentials::AccessTokenSource;
use crate::ports::prediction::{PredictFuture, PredictRequest, PredictionService};

/// Host serving the prediction API for the configured region.
pub const API_HOST: &str = "us-central1-aiplatform.googleapis.com";

/// Live prediction service that calls the hosted endpoint over HTTPS.
pub struct LivePredictionService {
    client: Client,
    base_url: String,
    credentials: Box<dyn AccessTokenSource>,
}

impl LivePredictionService {
    /// Creates a service talking to [`API_HOST`].
    #[must_use]
    pub fn new(credentials: Box<dyn AccessTokenSource>) -> Self {
        Self::with_base_url(format!("https://{API_HOST}"), credentials)
    }

    /// Creates a service talking to `base_url` (scheme and host, no trailing slash).
    #[must_use]
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: Box<dyn AccessTokenSource>,
    ) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), credentials }
    }

    /// Full URL of the `:predict` method for `endpoint`.
    #[must_use]
    pub fn predict_url(&self, endpoint: &str) -> String {
        format!("{}/v1/{endpoint}:predict", self.base_url)
    }
}

impl PredictionService for LivePredictionService {
    fn predict(&self, request: &PredictRequest) -> PredictFuture<'_> {
        let url = self.predict_url(&request.endpoint);
        let request = request.clone();

        Box::pin(async move {
            let token = self.credentials.access_token().map_err(InvokeError::Transport)?;

            let response = self
                .client
                .post(&url)
                .bearer_auth(token)
                .json(&request.body())
                .send()
                .await
                .map_err(|e| InvokeError::Transport(Box::new(e)))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| InvokeError::Transport(Box::new(e)))?;

            if !status.is_success() {
                return Err(RemoteError::from_reply(status.as_u16(), &body).into());
            }

            Ok(body)
        })
    }
}
