//! Port implementations: live network access, cassette recording, and replay.

pub mod live;
pub mod recording;
pub mod replaying;

use serde::{Deserialize, Serialize};

use crate::error::{InvokeError, RemoteError};

/// Cassette form of a failed prediction call.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RecordedError {
    Transport(String),
    Remote(RemoteError),
}

/// Encodes a prediction outcome using the Ok/Err JSON convention.
///
/// - `Ok(body)` is `{"Ok": body}`
/// - a transport failure is `{"Err": {"transport": message}}`
/// - a provider error is `{"Err": {"remote": {code, status, message}}}`
pub(crate) fn encode_outcome(result: &Result<String, InvokeError>) -> serde_json::Value {
    let recorded: Result<&str, RecordedError> = match result {
        Ok(body) => Ok(body.as_str()),
        Err(InvokeError::Transport(e)) => Err(RecordedError::Transport(e.to_string())),
        Err(InvokeError::Remote(r)) => Err(RecordedError::Remote(r.clone())),
    };
    serde_json::to_value(recorded).unwrap_or(serde_json::Value::Null)
}

/// Decodes an outcome written by [`encode_outcome`].
///
/// # Errors
///
/// Returns the recorded failure, or a transport error if the output is not a
/// recorded outcome at all.
pub(crate) fn decode_outcome(output: serde_json::Value) -> Result<String, InvokeError> {
    let recorded: Result<String, RecordedError> = serde_json::from_value(output).map_err(|e| {
        InvokeError::Transport(format!("cassette output is not a prediction outcome: {e}").into())
    })?;
    match recorded {
        Ok(body) => Ok(body),
        Err(RecordedError::Transport(message)) => Err(InvokeError::Transport(message.into())),
        Err(RecordedError::Remote(remote)) => Err(InvokeError::Remote(remote)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcomes_use_ok_err_convention() {
        assert_eq!(encode_outcome(&Ok("{}".into())), json!({"Ok": "{}"}));
        assert_eq!(
            encode_outcome(&Err(InvokeError::Transport("connection refused".into()))),
            json!({"Err": {"transport": "connection refused"}})
        );
        let remote =
            RemoteError { code: 400, status: "INVALID_ARGUMENT".into(), message: "bad".into() };
        assert_eq!(
            encode_outcome(&Err(InvokeError::Remote(remote))),
            json!({"Err": {"remote": {"code": 400, "status": "INVALID_ARGUMENT", "message": "bad"}}})
        );
    }

    #[test]
    fn decode_restores_remote_error() {
        let err = decode_outcome(json!({"Err": {"remote": {"code": 429, "message": "quota"}}}))
            .unwrap_err();
        match err {
            InvokeError::Remote(r) => {
                assert_eq!(r.code, 429);
                assert_eq!(r.status, "");
                assert_eq!(r.message, "quota");
            }
            InvokeError::Transport(e) => panic!("expected remote error, got transport: {e}"),
        }
    }

    #[test]
    fn decode_rejects_foreign_output() {
        let err = decode_outcome(json!({"text": "world"})).unwrap_err();
        assert!(err.to_string().starts_with("cassette output is not a prediction outcome"));
    }
}
