//! # `nl2sql-cli` Library Crate
//!
//! This crate contains the logic behind the `nl2sql` command: argument
//! parsing and the one-shot pipeline that reads the schema, asks the AI
//! provider for SQL and prints it.

use clap::Parser;
use nl2sql::{
    constants::{DEFAULT_GEMINI_MODEL, DEFAULT_SCHEMA_PATH, DEFAULT_TIMEOUT_SECS},
    prompts::build_prompt,
    providers::factory::create_provider,
    schema::read_schema,
    AiConfig, PromptClientBuilder, PromptError, ProviderKind,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

// --- CLI Argument Struct ---

/// Translate a natural-language question into a SQL SELECT statement.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The question, in plain language. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
    /// Path to the schema file (SQL DDL) used as grounding context.
    #[arg(long, env = "NL2SQL_SCHEMA_PATH", default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,
    /// The AI provider to use: "gemini" or "local".
    #[arg(long, env = "AI_PROVIDER", default_value = "gemini")]
    pub provider: ProviderKind,
    /// The provider API key.
    #[arg(long, env = "AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Overrides the provider endpoint. Required for the local provider.
    #[arg(long, env = "AI_API_URL")]
    pub api_url: Option<String>,
    /// The model name.
    #[arg(long, env = "AI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,
    /// Request timeout in seconds. The request is never retried.
    #[arg(
        long,
        env = "AI_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
    /// Echo the input question before the generated SQL.
    #[arg(long)]
    pub echo: bool,
    /// Print the prompt that would be sent and exit without calling the provider.
    #[arg(long)]
    pub print_prompt: bool,
}

impl Cli {
    /// The question as a single string.
    pub fn question_text(&self) -> String {
        self.question.join(" ")
    }

    /// The provider configuration described by these arguments.
    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            provider: self.provider,
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

// --- Public Entrypoint ---

/// Runs the pipeline and writes the result to `out`.
///
/// Configuration problems (missing API key, unreadable schema) are reported
/// before any request is made. Nothing is written to `out` on failure.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), PromptError> {
    let question = cli.question_text();

    if cli.print_prompt {
        let schema = read_schema(&cli.schema)?;
        let payload = build_prompt(&schema, &question);
        write_out(out, &payload.render())?;
        return Ok(());
    }

    let config = cli.ai_config();
    debug!(?config, "Resolved AI configuration");
    let ai_provider = create_provider(&config)?;
    let schema = read_schema(&cli.schema)?;

    let client = PromptClientBuilder::new().ai_provider(ai_provider).build()?;

    info!(schema = %cli.schema.display(), "Generating SQL");
    let sql = client.generate_sql(&schema, &question).await?;

    if cli.echo {
        write_out(
            out,
            &format!("--- Input Data ---\nUser Question: {question}\n\n--- Output ---\nGenerated SQL:"),
        )?;
    }
    write_out(out, &sql)
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<(), PromptError> {
    writeln!(out, "{text}").map_err(PromptError::Output)
}
