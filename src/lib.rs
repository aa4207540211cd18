//! media-search - typed fetch-and-decode client for search endpoints.

pub mod client;
pub mod config;
