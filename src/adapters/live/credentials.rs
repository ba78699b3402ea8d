//! Live access token source backed by the environment or the `gcloud` CLI.

use std::env;
use std::process::Command;

use crate::error::BoxError;
use crate::ports::credentials::AccessTokenSource;

/// Environment variable checked before falling back to `gcloud`.
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Reads a token from [`ACCESS_TOKEN_ENV`], or asks
/// `gcloud auth print-access-token` for one.
pub struct GcloudTokenSource;

impl AccessTokenSource for GcloudTokenSource {
    fn access_token(&self) -> Result<String, BoxError> {
        if let Some(token) = env::var(ACCESS_TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()) {
            return Ok(token.trim().to_string());
        }

        let output = Command::new("gcloud")
            .args(["auth", "print-access-token"])
            .output()
            .map_err(|e| -> BoxError {
                format!("no {ACCESS_TOKEN_ENV} set and gcloud could not be run: {e}").into()
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("gcloud auth print-access-token failed: {}", stderr.trim()).into());
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err("gcloud auth print-access-token returned an empty token".into());
        }
        Ok(token)
    }
}

/// Token source returning a fixed token.
pub struct StaticTokenSource(pub String);

impl AccessTokenSource for StaticTokenSource {
    fn access_token(&self) -> Result<String, BoxError> {
        Ok(self.0.clone())
    }
}
