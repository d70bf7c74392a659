use serde::{Deserialize, Serialize};

/// One business entry as produced by the completion service. Every field is
/// optional; the model is asked to put null where it found nothing, and the
/// intake form downgrades missing fields to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRecord {
    pub name: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "social link")]
    pub social_link: Option<String>,
    pub address: Option<String>,
    pub town: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "contactAddressStreet1")]
    pub contact_address_street1: Option<String>,
    #[serde(rename = "contactAddressStreet2")]
    pub contact_address_street2: Option<String>,
    #[serde(rename = "contactAddressZip")]
    pub contact_address_zip: Option<String>,
    pub insta: Option<String>,
    pub twitter: Option<String>,
    #[serde(rename = "meetup link")]
    pub meetup_link: Option<String>,
}

impl BusinessRecord {
    /// Display name used in per-record forwarding logs.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
