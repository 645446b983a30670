use chrono::Utc;

use crate::form::config::FormConfig;
use crate::models::SubmissionRequest;

/// Render the notification email for one accepted submission. Optional
/// fields are only included when a value was actually entered.
pub fn render_submission(config: &FormConfig, data: &SubmissionRequest) -> String {
    let mut fields = String::new();

    push_field(&mut fields, &config.name.label, &data.name);
    push_field(&mut fields, &config.email.label, &data.email);

    if let (Some(cfg), Some(phone)) = (&config.phone, &data.phone) {
        if !phone.trim().is_empty() {
            push_field(&mut fields, &cfg.label, phone);
        }
    }
    if let (Some(cfg), Some(company)) = (&config.company, &data.company) {
        if !company.trim().is_empty() {
            push_field(&mut fields, &cfg.label, company);
        }
    }

    push_field(
        &mut fields,
        &config.inquiry.label,
        config.inquiry.label_for(&data.inquiry_type),
    );

    if let (Some(cfg), Some(skills)) = (&config.skills, &data.skills) {
        if !skills.trim().is_empty() {
            push_field(&mut fields, &cfg.label, skills);
        }
    }

    push_field(&mut fields, &config.subject.label, &data.subject);

    if let Some(message) = &data.message {
        if !message.trim().is_empty() {
            push_field(&mut fields, &config.message.label, message);
        }
    }

    push_field(
        &mut fields,
        "Preferred Contact",
        data.preferred_contact.as_str(),
    );

    let title = &config.notification_subject;
    let received = Utc::now().format("%Y-%m-%d %H:%M UTC");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: #f4f4f4; padding: 20px; border-radius: 8px;">
        <h2>{title}</h2>
        <p>Received: {received}</p>
    </div>
    <div style="margin: 20px 0;">
{fields}    </div>
    <hr style="margin: 30px 0; border: none; border-top: 1px solid #eee;">
    <p style="color: #666; font-size: 14px;">This email was automatically generated from the contact form.</p>
</body>
</html>"#
    )
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "        <div style=\"margin: 15px 0;\">\
         <div style=\"font-weight: bold; color: #333;\">{}:</div>\
         <div style=\"margin-top: 5px; padding: 10px; background: #f9f9f9; border-radius: 4px;\">{}</div>\
         </div>\n",
        escape(label),
        escape(value).replace('\n', "<br>")
    ));
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
