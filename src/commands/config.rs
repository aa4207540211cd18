//! Config command - manage local configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use media_search::config::SearchConfig;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the search endpoint (default: https://itunes.apple.com/search)
    SetEndpoint(SetEndpointCmd),

    /// Set the User-Agent header sent with requests
    SetUserAgent(SetUserAgentCmd),

    /// Set the default result limit (omit to clear)
    SetLimit(SetLimitCmd),

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetEndpointCmd {
    /// Endpoint URL (e.g., http://localhost:8080/search)
    pub url: String,
}

#[derive(Args)]
pub struct SetUserAgentCmd {
    pub user_agent: String,
}

#[derive(Args)]
pub struct SetLimitCmd {
    pub limit: Option<u32>,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetEndpoint(cmd) => {
                let mut config = SearchConfig::load()?;
                config.endpoint = cmd.url.clone();
                // reject before persisting
                config.endpoint()?;
                config.save()?;
                println!("Endpoint set to: {}", cmd.url);
            }
            ConfigSubCmd::SetUserAgent(cmd) => {
                let mut config = SearchConfig::load()?;
                config.user_agent = cmd.user_agent.clone();
                config.save()?;
                println!("User-Agent set to: {}", cmd.user_agent);
            }
            ConfigSubCmd::SetLimit(cmd) => {
                let mut config = SearchConfig::load()?;
                config.limit = cmd.limit;
                config.save()?;
                match cmd.limit {
                    Some(limit) => println!("Limit set to: {}", limit),
                    None => println!("Limit cleared."),
                }
            }
            ConfigSubCmd::Show => {
                let config = SearchConfig::load()?;
                println!("Config: {}", SearchConfig::config_path()?.display());
                println!();
                println!("endpoint:   {}", config.endpoint);
                println!("user_agent: {}", config.user_agent);
                println!(
                    "limit:      {}",
                    config
                        .limit
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| "(not set)".to_string())
                );
            }
        }
        Ok(())
    }
}
