use std::path::{Path, PathBuf};

use clap::Parser;

use stride_ingest::domain::category::Category;
use stride_ingest::domain::error::AppError;
use stride_ingest::infrastructure::bootstrap::init_logging;
use stride_ingest::infrastructure::settings::DEFAULT_CONFIG_FILE;

/// Batch ingestion of running clubs and shops: query the completion
/// service per city, persist per-city JSON artifacts, and forward each
/// record to the directory intake API.
#[derive(Parser)]
#[command(name = "stride-ingest", version)]
struct Cli {
    /// Business category to ingest in this run
    #[arg(value_enum)]
    category: Category,

    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(Path::new("."), cli.category)?;

    stride_ingest::run(&cli.config, cli.category).await?;
    Ok(())
}
