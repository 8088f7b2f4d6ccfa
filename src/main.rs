use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use devrel_relay::connector::api::{build_router, Container, ContainerConfig};
use devrel_relay::DEFAULT_CONTROL_HOST;

#[derive(Parser)]
#[command(name = "devrel-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Address to serve the form page on.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Name of the hosted assistant to relay questions to.
    #[arg(short, long, default_value = "devrel-library")]
    assistant: String,

    /// Prompt-template document (flat TOML key→string mapping).
    #[arg(short, long, default_value = "prompts.toml")]
    prompts: PathBuf,

    #[arg(long, default_value = DEFAULT_CONTROL_HOST)]
    control_host: String,

    /// Answer with a canned reply instead of calling the remote service.
    #[arg(long)]
    mock_assistant: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api_key = if cli.mock_assistant {
        String::new()
    } else {
        std::env::var("PINECONE_API_KEY")
            .context("PINECONE_API_KEY must be set (or run with --mock-assistant)")?
    };

    let container = Container::new(ContainerConfig {
        api_key,
        assistant_name: cli.assistant,
        prompts_path: cli.prompts,
        control_host: cli.control_host,
        mock_assistant: cli.mock_assistant,
    })?;

    let app = build_router(Arc::new(container));

    let listener = TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", cli.bind))?;

    info!("Serving on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
