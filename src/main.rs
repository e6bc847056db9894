use bundlesocial_gateway::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    match args.command.unwrap_or_default() {
        Command::Serve => cli::serve::run().await,
        Command::Check => cli::check::run().await,
    }
}
