//! boardtint — tag-driven recoloring for a kanban board view.
//!
//! Run with:  `RUST_LOG=info boardtint`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("boardtint v{} starting", env!("CARGO_PKG_VERSION"));

    boardtint_host::run().map_err(Into::into)
}
