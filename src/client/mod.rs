//! Fetch-and-decode client for search endpoints.
//!
//! A search is a one-shot pipeline: encode the term into the URL,
//! issue one GET, translate transport errors, decode the body as a JSON
//! object. Each step that fails ends the pipeline with a typed error.
//!
//! # Example
//!
//! ```ignore
//! use media_search::client::{HttpTransport, SearchClient, DEFAULT_ENDPOINT};
//!
//! let client = SearchClient::new(HttpTransport::new(), DEFAULT_ENDPOINT.parse()?);
//! let doc = client.search("jack johnson").await?;
//! println!("{:?}", doc.get("resultCount"));
//! ```

mod document;
mod error;
mod search;
mod transport;

pub use document::Document;
pub use error::{BoxError, NetworkError, SearchError};
pub use search::{DEFAULT_ENDPOINT, SearchClient, fetch};
pub use transport::{HttpTransport, Transport};

/// Tagged success/failure of a single operation.
pub type Outcome<T, E> = std::result::Result<T, E>;
