//! Fetch command - download a URL and print its body.

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use media_search::client::{self, HttpTransport};
use media_search::config::SearchConfig;

#[derive(Args)]
pub struct FetchCmd {
    /// Absolute URL to fetch
    pub url: String,

    /// Only print the body size
    #[arg(short, long)]
    pub quiet: bool,
}

impl FetchCmd {
    pub async fn run(&self) -> Result<()> {
        let url = Url::parse(&self.url).with_context(|| format!("Invalid URL: {}", self.url))?;

        let config = SearchConfig::load()?;
        let transport = HttpTransport::with_user_agent(&config.user_agent)
            .context("Failed to build HTTP client")?;
        let body = client::fetch(&transport, &url).await?;

        if self.quiet {
            println!("{} bytes", body.len());
        } else {
            println!("{}", String::from_utf8_lossy(&body));
        }

        Ok(())
    }
}
