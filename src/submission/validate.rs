//! Validation rules shared by the form controller and the HTTP handler.
//!
//! The server re-runs exactly these checks on every request; the client is
//! never trusted.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::config::{FieldConfig, FormConfig};
use crate::models::SubmissionRequest;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

/// Fields a validation error can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Skills,
    Subject,
    Message,
    InquiryType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a request against a form configuration. Returns one error per
/// violated rule; an empty vec means the request is acceptable.
pub fn validate(config: &FormConfig, request: &SubmissionRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_required(&mut errors, Field::Name, &config.name, &request.name);
    check_required(&mut errors, Field::Email, &config.email, &request.email);

    // Email format is enforced whenever a value was entered, required or not.
    if !request.email.trim().is_empty() && !EMAIL_RE.is_match(&request.email) {
        errors.push(FieldError::new(Field::Email, "Email is invalid"));
    }

    if let Some(cfg) = &config.phone {
        check_required(&mut errors, Field::Phone, cfg, opt(&request.phone));
    }
    if let Some(cfg) = &config.company {
        check_required(&mut errors, Field::Company, cfg, opt(&request.company));
    }
    if let Some(cfg) = &config.skills {
        check_required(&mut errors, Field::Skills, cfg, opt(&request.skills));
    }

    check_required(&mut errors, Field::Subject, &config.subject, &request.subject);
    check_required(&mut errors, Field::Message, &config.message, opt(&request.message));

    if !config.inquiry.allows(&request.inquiry_type) {
        errors.push(FieldError::new(Field::InquiryType, "Invalid inquiry type"));
    }

    if config.contact_preference
        && request.email.trim().is_empty()
        && opt(&request.phone).trim().is_empty()
    {
        let message = "Please provide either email or phone number";
        errors.push(FieldError::new(Field::Email, message));
        errors.push(FieldError::new(Field::Phone, message));
    }

    errors
}

/// Flatten field errors into the `details` strings carried by a 400 response.
pub fn messages(errors: &[FieldError]) -> Vec<String> {
    errors.iter().map(|e| e.message.clone()).collect()
}

fn check_required(errors: &mut Vec<FieldError>, field: Field, config: &FieldConfig, value: &str) {
    if config.required && value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", config.label)));
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn careers_request() -> SubmissionRequest {
        SubmissionRequest {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            skills: Some("React".to_string()),
            subject: "Why join".to_string(),
            inquiry_type: "typescript".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_careers_request_passes() {
        let errors = validate(&FormConfig::careers(), &careers_request());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn missing_required_fields_reported_per_field() {
        let request = SubmissionRequest {
            inquiry_type: "general".to_string(),
            ..Default::default()
        };
        let errors = validate(&FormConfig::careers(), &request);
        let msgs = messages(&errors);
        assert!(msgs.contains(&"Your Name is required".to_string()));
        assert!(msgs.contains(&"Email Address is required".to_string()));
        assert!(msgs.contains(&"Your Skills is required".to_string()));
        assert!(msgs.contains(&"Why Join Our Team? is required".to_string()));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut request = careers_request();
        request.name = "   ".to_string();
        let errors = validate(&FormConfig::careers(), &request);
        assert!(messages(&errors).contains(&"Your Name is required".to_string()));
    }

    #[test]
    fn malformed_email_rejected_even_when_optional() {
        let mut config = FormConfig::careers();
        config.email.required = false;
        let mut request = careers_request();
        request.email = "not-an-email".to_string();
        let errors = validate(&config, &request);
        assert!(messages(&errors).contains(&"Email is invalid".to_string()));
    }

    #[test]
    fn unknown_inquiry_type_rejected() {
        let mut request = careers_request();
        request.inquiry_type = "unknown-type".to_string();
        let errors = validate(&FormConfig::careers(), &request);
        assert_eq!(messages(&errors), vec!["Invalid inquiry type".to_string()]);
    }

    #[test]
    fn contact_preference_flags_both_fields_when_neither_given() {
        let mut config = FormConfig::careers();
        config.email.required = false;
        let mut request = careers_request();
        request.email = String::new();
        request.phone = None;
        let errors = validate(&config, &request);
        let flagged: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert!(flagged.contains(&Field::Email));
        assert!(flagged.contains(&Field::Phone));
        for e in errors {
            assert_eq!(e.message, "Please provide either email or phone number");
        }
    }

    #[test]
    fn contact_preference_satisfied_by_phone_alone() {
        let mut config = FormConfig::careers();
        config.email.required = false;
        let mut request = careers_request();
        request.email = String::new();
        request.phone = Some("+1 555 123 4567".to_string());
        assert!(validate(&config, &request).is_empty());
    }

    #[test]
    fn contact_form_requires_message() {
        let request = SubmissionRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hello".to_string(),
            inquiry_type: "business".to_string(),
            ..Default::default()
        };
        let errors = validate(&FormConfig::contact(), &request);
        assert_eq!(messages(&errors), vec!["Message is required".to_string()]);
    }
}
