use clap::Parser;
use tracing::{debug, Level};
use yt_schema::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the script tag
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting yt-schema v{}", env!("CARGO_PKG_VERSION"));

    cli.run().await?;

    Ok(())
}
