use clap::Parser;
use vocab_desktop::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_desktop::run(Cli::parse()).await
}
