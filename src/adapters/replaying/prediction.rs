//! Replaying adapter for the `PredictionService` port.

use std::sync::Mutex;

use crate::adapters::decode_outcome;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::InvokeError;
use crate::ports::prediction::{PredictFuture, PredictRequest, PredictionService};

/// Serves recorded prediction replies from a cassette.
pub struct ReplayingPredictionService {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPredictionService {
    /// Create a replaying service backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_output(&self) -> Result<serde_json::Value, InvokeError> {
        let mut replayer = self
            .replayer
            .lock()
            .map_err(|e| InvokeError::Transport(format!("replayer lock poisoned: {e}").into()))?;
        replayer
            .next_interaction("prediction", "predict")
            .map(|interaction| interaction.output.clone())
            .map_err(|message| InvokeError::Transport(message.into()))
    }
}

impl PredictionService for ReplayingPredictionService {
    fn predict(&self, _request: &PredictRequest) -> PredictFuture<'_> {
        let result = self.next_output().and_then(decode_outcome);
        Box::pin(async move { result })
    }
}
