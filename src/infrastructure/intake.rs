use async_trait::async_trait;
use reqwest::multipart::Form;

use crate::domain::business::BusinessRecord;
use crate::domain::category::Category;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::settings::Settings;

/// Record-acceptance transport. One submission per record; failures are
/// reported per record and never affect siblings.
#[async_trait]
pub trait IntakeClient {
    async fn submit(&self, record: &BusinessRecord, category: Category) -> Result<()>;
}

/// Fixed form field layout of the intake endpoint. Missing record fields
/// are submitted as empty strings; `runs` and `memberships` are always
/// empty-list literals. The parsed `address` field is not part of the form.
pub fn form_fields(record: &BusinessRecord, category: Category) -> Vec<(&'static str, String)> {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();

    vec![
        ("isRunningClub", category.is_running_club().to_string()),
        ("isRunningCoach", "false".to_string()),
        ("name", field(&record.name)),
        ("website", field(&record.link)),
        ("contactAddressStreet1", field(&record.contact_address_street1)),
        ("contactAddressStreet2", field(&record.contact_address_street2)),
        ("contactAddressCity", field(&record.town)),
        ("contactAddressState", field(&record.state)),
        ("contactAddressZip", field(&record.contact_address_zip)),
        ("fb", field(&record.social_link)),
        ("insta", field(&record.insta)),
        ("twitter", field(&record.twitter)),
        ("meetup", field(&record.meetup_link)),
        ("isRunningStore", category.is_running_store().to_string()),
        ("runs", "[]".to_string()),
        ("memberships", "[]".to_string()),
    ]
}

pub struct HttpIntakeClient {
    client: reqwest::Client,
    url: String,
}

impl HttpIntakeClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(settings.http_timeout_secs))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            url: settings.intake_url.clone(),
        }
    }
}

#[async_trait]
impl IntakeClient for HttpIntakeClient {
    async fn submit(&self, record: &BusinessRecord, category: Category) -> Result<()> {
        let mut form = Form::new();
        for (name, value) in form_fields(record, category) {
            form = form.text(name, value);
        }

        let response = self
            .client
            .post(&self.url)
            .header("accept", "*/*")
            .header("accept-language", "en-US,en;q=0.9")
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::IntakeError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::IntakeError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let record = BusinessRecord {
            name: Some("River Runners".to_string()),
            ..Default::default()
        };
        let fields = form_fields(&record, Category::Club);
        let get = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("name"), "River Runners");
        assert_eq!(get("insta"), "");
        assert_eq!(get("website"), "");
        assert_eq!(get("runs"), "[]");
        assert_eq!(get("memberships"), "[]");
    }

    #[test]
    fn test_category_flags_per_pipeline() {
        let record = BusinessRecord::default();

        let club = form_fields(&record, Category::Club);
        assert!(club.contains(&("isRunningClub", "true".to_string())));
        assert!(club.contains(&("isRunningStore", "false".to_string())));
        assert!(club.contains(&("isRunningCoach", "false".to_string())));

        let shop = form_fields(&record, Category::Shop);
        assert!(shop.contains(&("isRunningClub", "false".to_string())));
        assert!(shop.contains(&("isRunningStore", "true".to_string())));
    }

    #[test]
    fn test_address_is_not_forwarded() {
        let record = BusinessRecord {
            address: Some("1 Main St".to_string()),
            ..Default::default()
        };
        let fields = form_fields(&record, Category::Club);
        assert!(!fields.iter().any(|(_, v)| v == "1 Main St"));
    }
}
