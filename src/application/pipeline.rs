use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{error, info};

use crate::application::llm_output::extract_json_payload;
use crate::domain::business::BusinessRecord;
use crate::domain::category::Category;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::artifact_store::ArtifactStore;
use crate::infrastructure::intake::IntakeClient;
use crate::infrastructure::llm_clients::CompletionClient;
use crate::infrastructure::settings::Settings;

/// Attempts per city before it is abandoned for this run. An abandoned
/// city leaves no artifact and so becomes eligible again on the next run.
const MAX_FETCH_ATTEMPTS: u32 = 2;

/// Process-local run counters. Resume safety across runs comes from
/// artifact existence, not from this state.
struct RunState {
    api_calls: u32,
    started: Instant,
}

impl RunState {
    fn new() -> Self {
        Self {
            api_calls: 0,
            started: Instant::now(),
        }
    }
}

enum CityOutcome {
    Fetched,
    Skipped,
    Failed,
}

/// One parameterized pipeline covering both category variants: fetch a
/// city's businesses from the completion service, persist the artifact,
/// forward every record to the intake endpoint.
pub struct Pipeline {
    category: Category,
    max_api_calls: u32,
    store: ArtifactStore,
    completion: Arc<dyn CompletionClient + Send + Sync>,
    intake: Arc<dyn IntakeClient + Send + Sync>,
}

impl Pipeline {
    pub fn new(
        settings: &Settings,
        category: Category,
        completion: Arc<dyn CompletionClient + Send + Sync>,
        intake: Arc<dyn IntakeClient + Send + Sync>,
    ) -> Result<Self> {
        let store = ArtifactStore::new(&settings.data_root, category)?;
        Ok(Self {
            category,
            max_api_calls: settings.max_api_calls,
            store,
            completion,
            intake,
        })
    }

    /// Process cities in order, stopping once the call budget is reached.
    /// Returns the number of successful completion calls made.
    pub async fn run(&self, cities: &[String]) -> u32 {
        let mut state = RunState::new();

        for city in cities {
            if state.api_calls >= self.max_api_calls {
                info!(
                    "Maximum API calls limit of {} reached. Stopping for now.",
                    self.max_api_calls
                );
                break;
            }

            if let CityOutcome::Fetched = self.process_city(city).await {
                state.api_calls += 1;
            }
        }

        info!(
            "Total API calls made: {}. Total time taken: {:.2} seconds.",
            state.api_calls,
            state.started.elapsed().as_secs_f64()
        );
        state.api_calls
    }

    async fn process_city(&self, city: &str) -> CityOutcome {
        if self.store.exists(city, self.category) {
            info!("File for {} already exists. Skipping API call.", city);
            return CityOutcome::Skipped;
        }

        let mut attempt = 0;
        while attempt < MAX_FETCH_ATTEMPTS {
            attempt += 1;
            match self.fetch_and_forward(city).await {
                Ok(()) => return CityOutcome::Fetched,
                Err(err) => {
                    error!("Attempt {} for {} failed with error: {}", attempt, city, err);
                    if attempt < MAX_FETCH_ATTEMPTS {
                        info!("Retrying...");
                    }
                }
            }
        }

        CityOutcome::Failed
    }

    fn prompt_for(&self, city: &str) -> String {
        format!(
            "Give me exhaustive list of running {} in {} in json format only. \
             name, link, social link, address, town, state, contactAddressStreet1, \
             contactAddressStreet2, contactAddressZip, insta, twitter, meetup link. \
             put null if not found",
            self.category.prompt_noun(),
            city
        )
    }

    async fn fetch_and_forward(&self, city: &str) -> Result<()> {
        let text = self.completion.complete(&self.prompt_for(city)).await?;
        let payload = extract_json_payload(&text);
        let value: Value = serde_json::from_str(payload).map_err(|e| {
            AppError::ParseError(format!("Completion for {} is not valid JSON: {}", city, e))
        })?;

        let path = self.store.write(city, self.category, &value)?;
        info!(
            "Running {} data for {} has been saved to {}",
            self.category.prompt_noun(),
            city,
            path.display()
        );

        // The artifact is durable from here on; forwarding failures are
        // logged per record and never roll it back.
        self.forward_records(&value).await;
        Ok(())
    }

    async fn forward_records(&self, value: &Value) {
        let Some(items) = value.as_array() else {
            error!("Completion payload is not an array; nothing to forward");
            return;
        };

        for item in items {
            let record: BusinessRecord = match serde_json::from_value(item.clone()) {
                Ok(record) => record,
                Err(err) => {
                    error!("Skipping malformed record: {}", err);
                    continue;
                }
            };

            match self.intake.submit(&record, self.category).await {
                Ok(()) => {
                    info!("Successfully sent data for {} to API", record.display_name());
                }
                Err(err) => {
                    error!(
                        "Failed to send data for {} to API. Error: {}",
                        record.display_name(),
                        err
                    );
                }
            }
        }
    }
}
