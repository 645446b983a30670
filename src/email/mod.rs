pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// Notification seam. The sender identity and recipient are configuration
/// owned by the implementation; callers only supply the rendered content
/// and an optional reply-to address.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        subject: &str,
        html: &str,
        reply_to: Option<&str>,
    ) -> Result<(), String>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl SmtpMailer {
    /// Build a STARTTLS relay mailer. The recipient defaults to the
    /// configured from address when none is given.
    pub fn new(config: &SmtpConfig, recipient: Option<&str>) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            to: recipient.unwrap_or(&config.from).to_string(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn notify(
        &self,
        subject: &str,
        html: &str,
        reply_to: Option<&str>,
    ) -> Result<(), String> {
        let mut builder = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .to
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        if let Some(addr) = reply_to {
            match addr.parse() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => tracing::warn!("Skipping unparseable reply-to {addr}: {e}"),
            }
        }

        let message = builder
            .body(html.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
