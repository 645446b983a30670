//! Typed form configuration.
//!
//! Which fields a form carries, their labels, and required-ness are decided
//! here once, at construction time. The same `FormConfig` drives client-side
//! validation in the controller and authoritative validation on the server.

/// Configuration for a single text field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub label: String,
    pub required: bool,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
}

impl FieldConfig {
    pub fn required(label: &str) -> Self {
        Self {
            label: label.to_string(),
            required: true,
            placeholder: None,
            helper_text: None,
        }
    }

    pub fn optional(label: &str) -> Self {
        Self {
            label: label.to_string(),
            required: false,
            placeholder: None,
            helper_text: None,
        }
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    pub fn helper_text(mut self, text: &str) -> Self {
        self.helper_text = Some(text.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct InquiryOption {
    pub value: String,
    pub label: String,
}

/// The enumerated inquiry-type selector. The first option is the default.
#[derive(Debug, Clone)]
pub struct InquiryConfig {
    pub label: String,
    pub options: Vec<InquiryOption>,
}

impl InquiryConfig {
    pub fn new(label: &str, options: &[(&str, &str)]) -> Self {
        Self {
            label: label.to_string(),
            options: options
                .iter()
                .map(|(value, label)| InquiryOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    pub fn default_value(&self) -> &str {
        self.options.first().map(|o| o.value.as_str()).unwrap_or("")
    }

    pub fn allows(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Human-readable label for an option value, falling back to the raw
    /// value for anything unrecognized.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

/// Full description of one hosted form. `phone`, `company` and `skills` are
/// only part of the form when present.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub name: FieldConfig,
    pub email: FieldConfig,
    pub phone: Option<FieldConfig>,
    pub company: Option<FieldConfig>,
    pub skills: Option<FieldConfig>,
    pub subject: FieldConfig,
    pub message: FieldConfig,
    pub inquiry: InquiryConfig,
    /// When set, at least one of email/phone must be provided.
    pub contact_preference: bool,
    /// Subject-line prefix for notification emails.
    pub notification_subject: String,
}

impl FormConfig {
    /// The generic site contact form.
    pub fn contact() -> Self {
        Self {
            name: FieldConfig::required("Full Name"),
            email: FieldConfig::required("Email Address"),
            phone: None,
            company: Some(FieldConfig::optional("Company (Optional)")),
            skills: None,
            subject: FieldConfig::required("Subject"),
            message: FieldConfig::required("Message")
                .placeholder("Tell us how we can help you..."),
            inquiry: InquiryConfig::new(
                "Inquiry Type",
                &[
                    ("business", "Business Inquiry"),
                    ("technical", "Technical Support"),
                    ("partnership", "Partnership"),
                    ("other", "Other"),
                ],
            ),
            contact_preference: false,
            notification_subject: "New Contact Inquiry".to_string(),
        }
    }

    /// The team-application form: skills are mandatory, phone is welcome,
    /// and applicants pick the position they are interested in.
    pub fn careers() -> Self {
        Self {
            name: FieldConfig::required("Your Name")
                .helper_text("What should we call you?"),
            email: FieldConfig::required("Email Address")
                .helper_text("For follow-up discussions"),
            phone: Some(
                FieldConfig::optional("Phone Number (Recommended)")
                    .placeholder("+1 (555) 123-4567")
                    .helper_text("Faster communication via text/call"),
            ),
            company: Some(FieldConfig::optional("Current Company (Optional)")),
            skills: Some(
                FieldConfig::required("Your Skills")
                    .placeholder("List your relevant skills and experience...")
                    .helper_text("e.g., React 3 years, Python CLI tools, Marketing campaigns"),
            ),
            subject: FieldConfig::required("Why Join Our Team?")
                .placeholder("Tell us what motivates you..."),
            message: FieldConfig::optional("Additional Notes (Optional)")
                .placeholder("Portfolio links, availability, questions, etc."),
            inquiry: InquiryConfig::new(
                "Interested Position",
                &[
                    ("python-cli", "Python CLI Developer"),
                    ("typescript", "TypeScript Developer"),
                    ("marketing", "Marketing & Business Developer"),
                    ("general", "General Interest / Multiple Roles"),
                ],
            ),
            contact_preference: true,
            notification_subject: "New Team Application".to_string(),
        }
    }
}
