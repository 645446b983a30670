mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;

use crate::models::{SubmissionRecord, SubmissionRequest};

/// Persistence seam for accepted submissions.
///
/// Consumers only ever insert a new record and later write the
/// notification flag back onto it; records are never deleted by the
/// submission pipeline.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(
        &self,
        form: &str,
        request: &SubmissionRequest,
    ) -> Result<SubmissionRecord, sqlx::Error>;

    async fn update_email_status(&self, id: i64, email_sent: bool) -> Result<(), sqlx::Error>;
}
