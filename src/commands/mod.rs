//! CLI command implementations.

mod config;
mod fetch;
mod search;

pub use config::ConfigCmd;
pub use fetch::FetchCmd;
pub use search::SearchCmd;
