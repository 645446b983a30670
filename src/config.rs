use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Storage binding. Without it the service still runs; submissions are
    /// simply not persisted.
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    /// Comma-separated CORS allow-list. Empty means wildcard.
    pub allowed_origins: Vec<String>,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
    /// Recipient for notification emails; falls back to the SMTP from
    /// address when unset.
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL").ok();

        let host: IpAddr = env_or("LEADGATE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LEADGATE_HOST: {e}"))?;

        let port: u16 = env_or("LEADGATE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid LEADGATE_PORT: {e}"))?;

        let max_body_size: usize = env_or("LEADGATE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid LEADGATE_MAX_BODY_SIZE: {e}"))?;

        let allowed_origins: Vec<String> = env_or("LEADGATE_ALLOWED_ORIGINS", "")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let log_level = env_or("LEADGATE_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("LEADGATE_SMTP_HOST").ok(),
            std::env::var("LEADGATE_SMTP_PORT").ok(),
            std::env::var("LEADGATE_SMTP_USER").ok(),
            std::env::var("LEADGATE_SMTP_PASS").ok(),
            std::env::var("LEADGATE_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid LEADGATE_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        let contact_email = std::env::var("LEADGATE_CONTACT_EMAIL").ok();

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            allowed_origins,
            log_level,
            smtp,
            contact_email,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
