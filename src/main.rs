use anyhow::Result;
use clap::Parser;
use nameplate::cli::{Cli, handle_command};
use nameplate::config::Config;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let config = Config::load_or_default()?;
    handle_command(cli.command, &config).await?;
    Ok(())
}
