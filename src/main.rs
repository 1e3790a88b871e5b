use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use churnscore_rs::artifacts::ArtifactState;
use churnscore_rs::server::{run_server, Engine};

#[derive(Parser)]
#[command(name = "churnscore", version)]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,
    /// Directory holding churn_model.json and churn_encoders.json
    #[arg(long, default_value = "./artifacts")]
    artifact_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "churnscore starting");

    // Load once; a failed load still serves, rendering the reason in-page.
    let artifacts = ArtifactState::load(&cli.artifact_dir);
    run_server(Engine { artifacts }, &cli.addr).await
}
