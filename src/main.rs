use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use leadgate::config::Config;
use leadgate::db::{PgStore, SubmissionStore};
use leadgate::email::{Notifier, SmtpMailer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting Leadgate");

    let store: Option<Arc<dyn SubmissionStore>> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");
            tracing::info!("Migrations applied");

            Some(Arc::new(PgStore::new(pool)) as Arc<dyn SubmissionStore>)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, submissions will not be persisted");
            None
        }
    };

    let mailer: Option<Arc<dyn Notifier>> = match &config.smtp {
        Some(smtp) => match SmtpMailer::new(smtp, config.contact_email.as_deref()) {
            Ok(mailer) => {
                tracing::info!("SMTP notifications configured");
                Some(Arc::new(mailer) as Arc<dyn Notifier>)
            }
            Err(e) => {
                tracing::warn!("SMTP not available: {e}");
                None
            }
        },
        None => {
            tracing::info!("SMTP not configured, notifications disabled");
            None
        }
    };

    let addr = SocketAddr::new(config.host, config.port);
    let app = leadgate::build_app(store, mailer, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
