//! Entry point for the movie indexer demo.

use tracing::error;
use tracing_subscriber::EnvFilter;

use movie_indexer::{Dependencies, IndexingError};

async fn run() -> Result<(), IndexingError> {
    let deps = Dependencies::new().await?;
    deps.runner.run().await
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Workflow failed");
        std::process::exit(1);
    }
}
