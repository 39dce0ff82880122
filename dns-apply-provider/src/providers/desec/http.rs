//! deSEC HTTP request methods

use serde::Serialize;

use crate::error::{Result, WriterError};
use crate::http_client::{truncate_for_log, HttpUtils};

use super::{DesecProvider, PROVIDER_ID};

impl DesecProvider {
    /// Execute a PUT request against `{base_url}{path}`.
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        Self::log_request_body(body);

        let request = self
            .client
            .put(&url)
            .header("Authorization", format!("Token {}", self.api_token))
            .json(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, PROVIDER_ID, "PUT", &url).await?;
        Self::check_status(status, response_text)
    }

    /// Execute a POST request against `{base_url}{path}`.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        Self::log_request_body(body);

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_token))
            .json(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, PROVIDER_ID, "POST", &url).await?;
        Self::check_status(status, response_text)
    }

    fn log_request_body<B: Serialize>(body: &B) {
        let body_json = serde_json::to_string(body)
            .unwrap_or_else(|_| "<unserializable request body>".to_string());
        log::debug!("[{PROVIDER_ID}] Request Body: {}", truncate_for_log(&body_json));
    }

    /// Map a completed exchange to success or [`WriterError::ApiFailure`].
    ///
    /// The response body text is preserved verbatim in the error; the apply
    /// loop surfaces it in the final abort message.
    fn check_status(status: u16, response_text: String) -> Result<()> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(WriterError::ApiFailure {
                provider: PROVIDER_ID.to_string(),
                status,
                body: response_text,
            })
        }
    }
}
