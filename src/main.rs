// src/main.rs
use anyhow::Result;
use clap::Parser;
use flashcard_api::cli::args::Args;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Values from .env become defaults for the environment-backed arguments
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("flashcard_api={}", filter).parse()?)
                .add_directive(format!("tower_http={}", filter).parse()?),
        )
        .init();

    flashcard_api::run(args).await
}
