//! Access token port for authenticating prediction calls.

use crate::error::BoxError;

/// Supplies OAuth access tokens for the prediction endpoint.
pub trait AccessTokenSource: Send + Sync {
    /// Returns a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials are available.
    fn access_token(&self) -> Result<String, BoxError>;
}
