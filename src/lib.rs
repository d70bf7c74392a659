pub mod application;
pub mod domain;
pub mod infrastructure;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::application::Pipeline;
use crate::domain::category::Category;
use crate::domain::error::Result;
use crate::infrastructure::cities::load_cities;
use crate::infrastructure::intake::HttpIntakeClient;
use crate::infrastructure::llm_clients::GeminiClient;
use crate::infrastructure::settings::Settings;

/// Load configuration and the city list, then run one full pipeline pass
/// for the given category. Fatal errors (missing config keys, missing or
/// malformed cities file) surface here before any city is processed.
pub async fn run(config_file: &Path, category: Category) -> Result<u32> {
    let settings = Settings::load(config_file)?;
    let cities = load_cities(&settings.cities_file)?;
    info!(
        "Loaded {} cities from {}",
        cities.len(),
        settings.cities_file.display()
    );

    let completion = Arc::new(GeminiClient::new(&settings));
    let intake = Arc::new(HttpIntakeClient::new(&settings));
    let pipeline = Pipeline::new(&settings, category, completion, intake)?;

    Ok(pipeline.run(&cities).await)
}
