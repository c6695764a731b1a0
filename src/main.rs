// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use embed_probe::config::{
    ProbeConfig, DEFAULT_API_TOKEN, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use embed_probe::embeddings::EmbeddingClient;
use embed_probe::report;
use std::time::Duration;

/// Smoke test for an OpenAI-compatible embeddings endpoint
#[derive(Parser, Debug)]
#[command(name = "embed-probe")]
#[command(version = "0.1.0")]
#[command(about = "Send a fixed batch to an embeddings endpoint and print the result", long_about = None)]
struct Cli {
    /// Base URL of the embedding endpoint
    #[arg(long, env = "EMBED_PROBE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Bearer token for the Authorization header
    #[arg(long, env = "EMBED_PROBE_API_TOKEN", default_value = DEFAULT_API_TOKEN)]
    api_token: String,

    /// Embedding model to request
    #[arg(long, env = "EMBED_PROBE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Total request timeout in seconds
    #[arg(long, env = "EMBED_PROBE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ProbeConfig {
        endpoint: cli.endpoint,
        api_token: cli.api_token,
        model: cli.model,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    println!("🧪 Testing embedding API at {}...", config.endpoint);

    let texts = vec![
        "Hello, how are you?".to_string(),
        "The weather is nice today.".to_string(),
        "Machine learning is fascinating.".to_string(),
        "Rust is a great programming language.".to_string(),
    ];

    let client = EmbeddingClient::new(config)?;
    let response = client.get_embeddings(&texts).await?;

    print!("{}", report::render(&texts, &response));
    Ok(())
}
