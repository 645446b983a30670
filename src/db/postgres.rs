use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{SubmissionRecord, SubmissionRequest};

use super::SubmissionStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn insert(
        &self,
        form: &str,
        request: &SubmissionRequest,
    ) -> Result<SubmissionRecord, sqlx::Error> {
        sqlx::query_as::<_, SubmissionRecord>(
            "INSERT INTO submissions
                (form, name, email, phone, company, skills, subject, message,
                 inquiry_type, preferred_contact)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(form)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.company)
        .bind(&request.skills)
        .bind(&request.subject)
        .bind(&request.message)
        .bind(&request.inquiry_type)
        .bind(request.preferred_contact.as_str())
        .fetch_one(&self.pool)
        .await
    }

    async fn update_email_status(&self, id: i64, email_sent: bool) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE submissions SET email_sent = $1 WHERE id = $2")
            .bind(email_sent)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
