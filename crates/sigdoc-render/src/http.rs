//! Shared HTTP response helpers for completion clients.

use crate::error::RenderError;

/// Longest response body quoted in an [`RenderError::Api`] message.
const MAX_ERROR_BODY: usize = 500;

/// Check a provider response for a non-success status.
///
/// Returns the response unchanged on success; otherwise
/// [`RenderError::Api`] with the status code and (truncated) body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RenderError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(RenderError::Api {
            status,
            message: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }
    Ok(resp)
}
