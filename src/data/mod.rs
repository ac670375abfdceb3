pub mod commentary;
pub mod forecast;
pub mod geocode;

use std::time::Duration;

use reqwest::Client;
use tracing::warn;

const USER_AGENT: &str = concat!("skycast/", env!("CARGO_PKG_VERSION"));

/// Client with a bounded request timeout. Falls back to reqwest defaults if
/// the configured client cannot be built.
pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default HTTP client");
            Client::new()
        })
}
