//! Search command - query the configured search endpoint.

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Args;

use media_search::client::{HttpTransport, SearchClient};
use media_search::config::SearchConfig;

#[derive(Args)]
pub struct SearchCmd {
    /// Free-text search term
    pub term: OsString,

    /// Max results (overrides config)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Print the full decoded document as JSON
    #[arg(long)]
    pub raw: bool,
}

impl SearchCmd {
    pub async fn run(&self) -> Result<()> {
        let config = SearchConfig::load()?;
        let transport = HttpTransport::with_user_agent(&config.user_agent)
            .context("Failed to build HTTP client")?;
        let client = SearchClient::new(transport, config.endpoint()?)
            .with_limit(self.limit.or(config.limit));

        let start = std::time::Instant::now();
        let doc = client.search(&self.term).await?;
        let elapsed = start.elapsed().as_millis();

        if doc.is_empty() {
            println!("Empty response document");
            return Ok(());
        }

        if self.raw {
            println!("{}", serde_json::to_string_pretty(&doc)?);
            return Ok(());
        }

        let count = doc
            .get("resultCount")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        println!("Found {} results in {}ms\n", count, elapsed);

        for (i, item) in doc.results().unwrap_or_default().iter().enumerate() {
            let name = item
                .get("trackName")
                .or_else(|| item.get("collectionName"))
                .and_then(|v| v.as_str())
                .unwrap_or("(untitled)");
            let artist = item
                .get("artistName")
                .and_then(|v| v.as_str())
                .unwrap_or("(unknown)");
            let kind = item.get("kind").and_then(|v| v.as_str()).unwrap_or("-");

            println!("{}. {} - {} [{}]", i + 1, name, artist, kind);
        }

        Ok(())
    }
}
