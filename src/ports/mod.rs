//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the text client and an external
//! system (the prediction endpoint and its credentials). Implementations live
//! in `src/adapters/`.

pub mod credentials;
pub mod prediction;

pub use credentials::AccessTokenSource;
pub use prediction::{PredictFuture, PredictRequest, PredictionService};
