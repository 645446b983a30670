use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredContact::Email => "email",
            PreferredContact::Phone => "phone",
        }
    }
}

/// One contact-form submission as it travels over the wire.
///
/// Every field is serde-defaulted so a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub inquiry_type: String,
    #[serde(default)]
    pub preferred_contact: PreferredContact,
}

/// A persisted submission. `email_sent` stays NULL until a notification
/// attempt completes, then is written exactly once.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: i64,
    pub form: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub skills: Option<String>,
    pub subject: String,
    pub message: Option<String>,
    pub inquiry_type: String,
    pub preferred_contact: String,
    pub email_sent: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Unified happy-path response. `success` means "request accepted and
/// processed"; storage and notification outcomes are reported as
/// independent flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub application_id: Option<i64>,
    pub saved_to_db: bool,
    pub email_sent: bool,
}
