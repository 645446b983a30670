//! Client-side form controller.
//!
//! Owns the field values for one hosted form, runs the shared validation
//! rules locally, posts the request, and drives the
//! idle/submitting/success/error lifecycle. After a successful submission
//! the form is locked until the user explicitly resets it.

use std::collections::HashMap;
use std::time::Duration;

use crate::form::config::FormConfig;
use crate::models::{PreferredContact, SubmissionRequest};
use crate::submission::validate::{self, Field};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

type SuccessCallback = Box<dyn Fn(&SubmissionRequest) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&str) + Send + Sync>;

pub struct FormController {
    config: FormConfig,
    endpoint: String,
    client: reqwest::Client,
    data: SubmissionRequest,
    errors: HashMap<Field, String>,
    status: SubmitStatus,
    locked: bool,
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
}

impl FormController {
    pub fn new(config: FormConfig, endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        let data = defaults(&config);
        Ok(Self {
            config,
            endpoint: endpoint.into(),
            client,
            data,
            errors: HashMap::new(),
            status: SubmitStatus::Idle,
            locked: false,
            on_success: None,
            on_error: None,
        })
    }

    /// Called with the submitted data once the server accepts it.
    pub fn on_success(mut self, f: impl Fn(&SubmissionRequest) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Called with a human-readable message when submission fails.
    pub fn on_error(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Set a field value. Silently ignored while the form is locked;
    /// otherwise any existing error on that field is cleared.
    pub fn update_field(&mut self, field: Field, value: &str) {
        if self.locked {
            return;
        }
        match field {
            Field::Name => self.data.name = value.to_string(),
            Field::Email => self.data.email = value.to_string(),
            Field::Phone => self.data.phone = Some(value.to_string()),
            Field::Company => self.data.company = Some(value.to_string()),
            Field::Skills => self.data.skills = Some(value.to_string()),
            Field::Subject => self.data.subject = value.to_string(),
            Field::Message => self.data.message = Some(value.to_string()),
            Field::InquiryType => self.data.inquiry_type = value.to_string(),
        }
        self.errors.remove(&field);
    }

    pub fn set_preferred_contact(&mut self, preference: PreferredContact) {
        if !self.locked {
            self.data.preferred_contact = preference;
        }
    }

    /// Run the shared validation rules. Records the errors and returns
    /// true iff none were found.
    pub fn validate(&mut self) -> bool {
        self.errors = validate::validate(&self.config, &self.data)
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect();
        self.errors.is_empty()
    }

    /// Submit the form. No-op when already submitting, locked, or
    /// validation fails. A failed submission leaves the fields populated
    /// and editable so the user can retry.
    pub async fn submit(&mut self) {
        if self.status == SubmitStatus::Submitting || self.locked {
            return;
        }
        if !self.validate() {
            return;
        }

        self.status = SubmitStatus::Submitting;
        match self.send().await {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.locked = true;
                if let Some(cb) = &self.on_success {
                    cb(&self.data);
                }
            }
            Err(message) => {
                self.status = SubmitStatus::Error;
                if let Some(cb) = &self.on_error {
                    cb(&message);
                }
            }
        }
    }

    async fn send(&self) -> Result<(), String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.data)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Prefer the server's own error message when the body is parseable.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Err(message)
    }

    /// Restore defaults, clear errors, and unlock. Only honored from the
    /// success state; resetting is always an explicit user action.
    pub fn reset(&mut self) {
        if self.status != SubmitStatus::Success {
            return;
        }
        self.data = defaults(&self.config);
        self.errors.clear();
        self.locked = false;
        self.status = SubmitStatus::Idle;
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn data(&self) -> &SubmissionRequest {
        &self.data
    }

    pub fn field_errors(&self) -> &HashMap<Field, String> {
        &self.errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

fn defaults(config: &FormConfig) -> SubmissionRequest {
    SubmissionRequest {
        inquiry_type: config.inquiry.default_value().to_string(),
        ..Default::default()
    }
}
