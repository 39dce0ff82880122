//! deSEC record-set writer

mod http;
mod provider;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) const DESEC_API_BASE: &str = "https://desec.io/api/v1";
pub(crate) const PROVIDER_ID: &str = "desec";

/// deSEC rrsets API writer.
///
/// Authenticates with a deSEC API token, sent as `Authorization: Token <value>`
/// on every request.
pub struct DesecProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl DesecProvider {
    /// Writer for the rrsets collection of `domain` on the public deSEC API.
    #[must_use]
    pub fn new(api_token: String, domain: &str) -> Self {
        Self::with_base_url(
            api_token,
            format!("{DESEC_API_BASE}/domains/{domain}/rrsets"),
        )
    }

    /// Writer addressing an explicit rrsets endpoint, e.g. a local test server.
    #[must_use]
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: create_http_client(),
            api_token,
            base_url,
        }
    }
}
