//! Side effects for one accepted submission: persist, notify, record the
//! notification flag. Persistence and notification are independent
//! single-attempt operations; neither failure aborts the other, and both
//! outcomes are returned as plain values.

use crate::email::templates;
use crate::form::config::FormConfig;
use crate::models::SubmissionRequest;
use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub struct SubmissionOutcome {
    pub application_id: Option<i64>,
    pub saved_to_db: bool,
    pub email_sent: bool,
}

pub async fn run(
    state: &AppState,
    form: &str,
    config: &FormConfig,
    request: &SubmissionRequest,
) -> SubmissionOutcome {
    // Persistence first, so an id exists before the email-status write.
    let mut saved_to_db = false;
    let mut application_id = None;
    match &state.store {
        Some(store) => match store.insert(form, request).await {
            Ok(record) => {
                saved_to_db = true;
                application_id = Some(record.id);
                tracing::info!(id = record.id, form, "submission stored");
            }
            Err(e) => {
                tracing::error!(form, "failed to store submission: {e}");
            }
        },
        None => {
            tracing::debug!(form, "storage not configured, skipping persistence");
        }
    }

    let mut email_sent = false;
    let mut email_attempted = false;
    if let Some(mailer) = &state.mailer {
        email_attempted = true;
        let subject = format!(
            "{}: {} - {}",
            config.notification_subject,
            request.name,
            config.inquiry.label_for(&request.inquiry_type)
        );
        let html = templates::render_submission(config, request);
        let reply_to = (!request.email.trim().is_empty()).then_some(request.email.as_str());

        match mailer.notify(&subject, &html, reply_to).await {
            Ok(()) => {
                email_sent = true;
                tracing::info!(form, "notification sent");
            }
            Err(e) => {
                tracing::warn!(form, "notification failed: {e}");
            }
        }
    } else {
        tracing::debug!(form, "mailer not configured, skipping notification");
    }

    // Record the notification outcome on the persisted row. Log-only on
    // failure; the response flags are already decided.
    if email_attempted {
        if let (Some(store), Some(id)) = (&state.store, application_id) {
            if let Err(e) = store.update_email_status(id, email_sent).await {
                tracing::error!(id, "failed to record email status: {e}");
            }
        }
    }

    SubmissionOutcome {
        application_id,
        saved_to_db,
        email_sent,
    }
}
