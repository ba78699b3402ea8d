//! Replaying adapters that replay recorded interactions.

pub mod prediction;

pub use prediction::ReplayingPredictionService;
