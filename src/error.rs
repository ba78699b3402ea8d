//! Error types returned by the text-generation client.
//!
//! Every variant is transparent: the message a caller sees is the message of
//! the layer that failed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error used for transport failures whose concrete type depends on the adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single `generate_text` call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The instance or parameters payload could not be built.
    #[error(transparent)]
    Payload(serde_json::Error),
    /// The remote endpoint could not be reached (credentials, DNS, TLS, I/O).
    #[error(transparent)]
    Transport(BoxError),
    /// The provider rejected or failed the call.
    #[error(transparent)]
    Remote(RemoteError),
    /// The reply could not be decoded into a [`Response`](crate::text::Response).
    #[error(transparent)]
    Decode(serde_json::Error),
}

/// Failure reported by a [`PredictionService`](crate::ports::PredictionService).
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Connection or credential failure before a reply was received.
    #[error(transparent)]
    Transport(BoxError),
    /// The provider answered with an error status.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl From<InvokeError> for GenerateError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Transport(source) => Self::Transport(source),
            InvokeError::Remote(remote) => Self::Remote(remote),
        }
    }
}

/// Error returned by the provider, kept exactly as reported.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{status} ({code}): {message}")]
pub struct RemoteError {
    /// HTTP status code of the reply.
    pub code: u16,
    /// Canonical status name (e.g. `PERMISSION_DENIED`), empty if absent.
    #[serde(default)]
    pub status: String,
    /// Provider supplied message.
    pub message: String,
}

/// Error envelope returned by Google APIs on non-success replies.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl RemoteError {
    /// Builds a remote error from an HTTP status and the reply body.
    ///
    /// Uses the `{"error": {...}}` envelope when the body carries one, and
    /// falls back to the raw body as the message otherwise.
    #[must_use]
    pub fn from_reply(code: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                Self { code, status: envelope.error.status, message: envelope.error.message }
            }
            Err(_) => Self { code, status: String::new(), message: body.trim().to_string() },
        }
    }
}
