//! Recording adapter for the `PredictionService` port.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::adapters::encode_outcome;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::prediction::{PredictFuture, PredictRequest, PredictionService};

/// Records prediction calls while delegating to an inner implementation.
pub struct RecordingPredictionService {
    inner: Box<dyn PredictionService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPredictionService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn PredictionService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl PredictionService for RecordingPredictionService {
    fn predict(&self, request: &PredictRequest) -> PredictFuture<'_> {
        let request = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.predict(&request).await;

            match serde_json::to_value(&request) {
                Ok(input) => match recorder.lock() {
                    Ok(mut guard) => {
                        guard.record("prediction", "predict", input, encode_outcome(&result));
                    }
                    Err(e) => warn!(error = %e, "recorder lock poisoned, interaction not recorded"),
                },
                Err(e) => warn!(error = %e, "request not serializable, interaction not recorded"),
            }

            result
        })
    }
}
