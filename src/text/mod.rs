//! Text generation: prompt compiling, request parameters, the client, and
//! the typed response model.

pub mod client;
pub mod model;
pub mod params;
pub mod prompt;

pub use client::{ClientConfig, TextClient, MODEL_VERSION};
pub use model::{
    Citation, CitationMetadata, Prediction, Response, SafetyAttributes, TokenCountMetadata,
    TokenMetadata,
};
pub use params::Parameters;
pub use prompt::compile;
