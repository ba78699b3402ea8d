//! Live adapters for real external interactions.

pub mod credentials;
pub mod prediction;

pub use credentials::{GcloudTokenSource, StaticTokenSource};
pub use prediction::LivePredictionService;
