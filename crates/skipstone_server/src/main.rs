//! Skipstone demo server binary.

use anyhow::Result;
use clap::Parser;
use skipstone_server::{AppState, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Curling pre-placement demo server.
#[derive(Debug, Parser)]
#[command(name = "skipstone_server", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    info!("Starting Skipstone demo server");
    let app = router(AppState::default());

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", cli.port)).await?;
    info!(port = cli.port, "Server ready at http://localhost:{}/", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
