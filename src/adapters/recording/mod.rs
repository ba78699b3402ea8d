//! Recording adapters that capture interactions to cassettes.

pub mod prediction;

pub use prediction::RecordingPredictionService;
