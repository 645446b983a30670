mod submission;

pub use submission::{PreferredContact, SubmissionRecord, SubmissionRequest, SubmissionResponse};
