//! Service context selecting the prediction service for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{GcloudTokenSource, LivePredictionService};
use crate::adapters::recording::RecordingPredictionService;
use crate::adapters::replaying::ReplayingPredictionService;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::prediction::PredictionService;
use crate::text::{ClientConfig, TextClient, MODEL_VERSION};

/// Owns the prediction service used by the demo commands.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Service that answers prediction requests.
    pub prediction: Arc<dyn PredictionService>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context calling the hosted endpoint.
    #[must_use]
    pub fn live() -> Self {
        Self {
            prediction: Arc::new(LivePredictionService::new(Box::new(GcloudTokenSource))),
            recorder: None,
        }
    }

    /// Creates a recording context that writes a cassette file on drop.
    ///
    /// Uses the live service for actual work. This is the developer-only
    /// mechanism for capturing cassettes via the `GENAI_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let live = Box::new(LivePredictionService::new(Box::new(GcloudTokenSource)));
        Self::recording_with(live, path)
    }

    /// Creates a recording context around an arbitrary inner service.
    #[must_use]
    pub fn recording_with(inner: Box<dyn PredictionService>, path: &Path) -> Self {
        let name = path
            .file_stem()
            .map_or_else(|| "genai-session".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, name, MODEL_VERSION)));
        Self {
            prediction: Arc::new(RecordingPredictionService::new(inner, Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::load(path)?;
        Ok(Self { prediction: Arc::new(ReplayingPredictionService::new(replayer)), recorder: None })
    }

    /// Creates a text client for `config` backed by this context's service.
    #[must_use]
    pub fn text_client(&self, config: ClientConfig) -> TextClient {
        TextClient::new(config, Arc::clone(&self.prediction))
    }

    /// Writes the cassette now if this context is recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn flush_recording(&self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = &self.recorder else {
            return Ok(None);
        };
        let guard = recorder.lock().map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        let path = guard.flush().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        match self.flush_recording() {
            Ok(Some(path)) => tracing::info!(path = %path.display(), "recording saved"),
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to write cassette: {e}"),
        }
    }
}
