use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use leadgate::config::Config;
use leadgate::db::SubmissionStore;
use leadgate::email::Notifier;
use leadgate::models::{SubmissionRecord, SubmissionRequest};

/// In-memory store standing in for Postgres. Records every call so tests
/// can assert on persistence and the follow-up email-status write.
pub struct RecordingStore {
    fail: AtomicBool,
    next_id: AtomicI64,
    pub records: Mutex<Vec<SubmissionRecord>>,
    pub email_updates: Mutex<Vec<(i64, bool)>>,
}

impl RecordingStore {
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            fail: AtomicBool::new(false),
            next_id: AtomicI64::new(first_id),
            records: Mutex::new(Vec::new()),
            email_updates: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_inserts(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionStore for RecordingStore {
    async fn insert(
        &self,
        form: &str,
        request: &SubmissionRequest,
    ) -> Result<SubmissionRecord, sqlx::Error> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("simulated storage failure".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = SubmissionRecord {
            id,
            form: form.to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            company: request.company.clone(),
            skills: request.skills.clone(),
            subject: request.subject.clone(),
            message: request.message.clone(),
            inquiry_type: request.inquiry_type.clone(),
            preferred_contact: request.preferred_contact.as_str().to_string(),
            email_sent: None,
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_email_status(&self, id: i64, email_sent: bool) -> Result<(), sqlx::Error> {
        self.email_updates.lock().unwrap().push((id, email_sent));
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.iter_mut().find(|r| r.id == id) {
            record.email_sent = Some(email_sent);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

/// In-memory notifier standing in for the SMTP relay.
pub struct RecordingMailer {
    fail: AtomicBool,
    pub sent: Mutex<Vec<SentEmail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            fail: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingMailer {
    async fn notify(
        &self,
        subject: &str,
        html: &str,
        reply_to: Option<&str>,
    ) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated send failure".to_string());
        }
        self.sent.lock().unwrap().push(SentEmail {
            subject: subject.to_string(),
            html: html.to_string(),
            reply_to: reply_to.map(String::from),
        });
        Ok(())
    }
}

/// A running test server with its fake collaborators.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<RecordingStore>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON payload to a form endpoint, return (body, status).
    pub async fn submit(&self, path: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub struct AppOptions {
    pub with_store: bool,
    pub with_mailer: bool,
    pub first_id: i64,
    pub allowed_origins: Vec<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            with_store: true,
            with_mailer: true,
            first_id: 1,
            allowed_origins: Vec::new(),
        }
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(AppOptions::default()).await
}

pub async fn spawn_app_with(options: AppOptions) -> TestApp {
    let store = Arc::new(RecordingStore::starting_at(options.first_id));
    let mailer = Arc::new(RecordingMailer::new());

    let config = Config {
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        max_body_size: 1_048_576,
        allowed_origins: options.allowed_origins,
        log_level: "warn".to_string(),
        smtp: None,
        contact_email: Some("ops@example.com".to_string()),
    };

    let app = leadgate::build_app(
        options
            .with_store
            .then(|| store.clone() as Arc<dyn SubmissionStore>),
        options
            .with_mailer
            .then(|| mailer.clone() as Arc<dyn Notifier>),
        config,
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store,
        mailer,
    }
}
