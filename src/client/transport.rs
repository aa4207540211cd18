//! Transport trait and the reqwest-backed implementation.

use std::future::Future;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::error::BoxError;

/// Issues a single GET and hands back the raw body.
///
/// Implementations must not retry, cache, or interpret the HTTP status:
/// a completed transfer is a success whatever the status code says.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, BoxError>> + Send;
}

/// HTTP transport over a shared reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, BoxError> {
        debug!(url = %url, "sending request");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            // not treated as a failure, body is still handed to the decoder
            warn!(url = %url, status = status.as_u16(), "non-success HTTP status");
        }

        let body = response.bytes().await?;
        debug!(url = %url, bytes = body.len(), "received response body");

        Ok(body.to_vec())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_transports() {
        let _default = HttpTransport::new();
        let _custom = HttpTransport::with_user_agent("media-search-test/0.1").unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_get_itunes() {
        let transport = HttpTransport::new();
        let url = Url::parse("https://itunes.apple.com/search?term=jack+johnson").unwrap();
        let body = transport.get(&url).await.unwrap();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_connection_refused_is_error() {
        // port 9 (discard) is almost never listening on localhost
        let transport = HttpTransport::new();
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        assert!(transport.get(&url).await.is_err());
    }
}
