use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::category::Category;
use crate::domain::error::Result;

/// Install the tracing subscriber: console output plus an append-only
/// per-category log file. `RUST_LOG` overrides the `info` default.
pub fn init_logging(log_root: &Path, category: Category) -> Result<()> {
    let log_file = Arc::new(
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_root.join(category.log_file()))?,
    );

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_file),
        )
        .try_init()
        .ok();

    Ok(())
}
