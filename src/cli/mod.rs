//! CLI module for the bundle.social gateway
//!
//! - `serve`: run the HTTP gateway
//! - `check`: call the bundle.social health endpoint once and print the result

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

/// Demo HTTP gateway in front of the bundle.social API
#[derive(Parser)]
#[command(name = "bundlesocial-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Default)]
pub enum Command {
    /// Run the HTTP gateway
    #[default]
    Serve,

    /// Verify the API key against the bundle.social health endpoint
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["bundlesocial-gateway", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve)));

        let cli = Cli::try_parse_from(["bundlesocial-gateway", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check)));
    }

    #[test]
    fn test_serve_is_the_default() {
        let cli = Cli::try_parse_from(["bundlesocial-gateway"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Serve));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["bundlesocial-gateway", "migrate"]).is_err());
    }
}
