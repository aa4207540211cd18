//! Search client: fetch, encode, decode.

use std::ffi::{OsStr, OsString};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;
use url::Url;

use super::Outcome;
use super::document::Document;
use super::error::{NetworkError, SearchError};
use super::transport::Transport;

/// iTunes Search API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Fetch the raw body at `url` with a single request.
///
/// Any completed transfer is a success; the status code is not inspected.
pub async fn fetch<T: Transport>(transport: &T, url: &Url) -> Outcome<Vec<u8>, NetworkError> {
    transport.get(url).await.map_err(|err| {
        debug!(url = %url, error = %err, "transport failed");
        NetworkError::FetchFailed(err)
    })
}

/// One-shot fetch and search pipelines over a [`Transport`].
///
/// Each call issues at most one request and produces exactly one outcome.
/// Nothing is retried or cached.
pub struct SearchClient<T> {
    transport: Arc<T>,
    endpoint: Url,
    limit: Option<u32>,
}

impl<T> Clone for SearchClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            limit: self.limit,
        }
    }
}

impl<T: Transport> SearchClient<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoint,
            limit: None,
        }
    }

    /// Append a `limit` parameter to every search URL.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the raw body at `url`.
    pub async fn fetch(&self, url: &Url) -> Outcome<Vec<u8>, NetworkError> {
        fetch(self.transport.as_ref(), url).await
    }

    /// Search for `term` and decode the response into a [`Document`].
    ///
    /// Terms that are not valid Unicode cannot be encoded into the query
    /// and fail with [`SearchError::InvalidTerm`] before any request is made.
    pub async fn search(&self, term: impl AsRef<OsStr>) -> Outcome<Document, SearchError> {
        let term = term.as_ref();
        let Some(text) = term.to_str() else {
            let lossy = term.to_string_lossy().into_owned();
            debug!(term = %lossy, "term is not valid unicode");
            return Err(SearchError::InvalidTerm(lossy));
        };

        let url = self.search_url(text);
        debug!(term = text, url = %url, "searching");

        let body = self.fetch(&url).await?;

        Document::from_slice(&body).map_err(|err| {
            debug!(url = %url, error = %err, bytes = body.len(), "failed to decode response");
            SearchError::InvalidDecode
        })
    }

    /// Build the request URL for `term`.
    pub fn search_url(&self, term: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("term", term);
            if let Some(limit) = self.limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        url
    }
}

impl<T: Transport + 'static> SearchClient<T> {
    /// Run [`fetch`](Self::fetch) on a spawned task and hand the outcome to `on_complete`.
    ///
    /// Await the returned handle to block until the callback has run.
    pub fn fetch_with<F>(&self, url: Url, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Outcome<Vec<u8>, NetworkError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let outcome = client.fetch(&url).await;
            on_complete(outcome);
        })
    }

    /// Run [`search`](Self::search) on a spawned task and hand the outcome to `on_complete`.
    pub fn search_with<F>(&self, term: impl Into<OsString>, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Outcome<Document, SearchError>) + Send + 'static,
    {
        let client = self.clone();
        let term = term.into();
        tokio::spawn(async move {
            let outcome = client.search(&term).await;
            on_complete(outcome);
        })
    }
}
