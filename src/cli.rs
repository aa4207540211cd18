//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{ConfigCmd, FetchCmd, SearchCmd};

#[derive(Parser)]
#[command(name = "msearch")]
#[command(about = "msearch - typed search and fetch over HTTP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the configured endpoint for a term
    Search(SearchCmd),

    /// Fetch a URL and print the raw body
    Fetch(FetchCmd),

    /// Manage configuration (endpoint, user agent, limit)
    Config(ConfigCmd),
}

impl Command {
    pub async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Search(cmd) => cmd.run().await,
            Command::Fetch(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["msearch", "search", "iron man", "--limit", "3"]).unwrap();
        match cli.command {
            Command::Search(cmd) => {
                assert_eq!(cmd.term, "iron man");
                assert_eq!(cmd.limit, Some(3));
                assert!(!cmd.raw);
            }
            _ => panic!("expected search"),
        }
    }
}
