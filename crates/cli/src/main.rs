//! # nl2sql: Natural Language to SQL
//!
//! This is the main entry point for the `nl2sql` command-line interface.
//! The binary is a thin entrypoint; all logic lives in the `nl2sql_cli`
//! library crate.

use anyhow::Result;
use clap::Parser;
use nl2sql::PromptError;
use nl2sql_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

// --- Main Application Entry ---

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load .env before clap reads the environment
    dotenvy::dotenv().ok();

    // 2. Setup logging on stderr so stdout only ever carries SQL
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 3. Parse CLI arguments
    let cli = Cli::parse();

    // 4. Run the pipeline and handle the final result
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(cli, &mut stdout).await {
        eprintln!("ERROR: {e}");
        if matches!(e, PromptError::MissingApiKey) {
            eprintln!("Usage: AI_API_KEY=\"your_key\" nl2sql \"your question\"");
        }
        std::process::exit(1);
    }

    Ok(())
}
