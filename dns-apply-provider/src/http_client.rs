//! Generic HTTP client tools
//!
//! Reusable request-execution logic shared by writer implementations.
//! The writer keeps full control over URL, headers and body and constructs
//! the `RequestBuilder` itself; this module only unifies sending, logging,
//! and transport-error mapping.

use reqwest::RequestBuilder;

use crate::error::WriterError;

/// Maximum number of characters of a response body to include in debug logs.
const TRUNCATE_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return the status code and body text.
    ///
    /// Transport failures map to [`WriterError::Timeout`] or
    /// [`WriterError::NetworkError`]. Non-success HTTP statuses are NOT
    /// treated as errors here: the caller decides what a given status means
    /// (the apply loop's replace→create fallback depends on seeing them).
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - writer name, for logging and error context
    /// * `method_name` - request method name, for logging
    /// * `url` - request URL, for logging
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), WriterError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                WriterError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                WriterError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| WriterError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}

/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for safe logging.
///
/// Bodies can carry record values and token-related error details; cap what
/// ends up in debug output and note the total length instead.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}
