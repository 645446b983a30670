use std::sync::Arc;

use crate::config::Config;
use crate::db::SubmissionStore;
use crate::email::Notifier;
use crate::form::config::FormConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Option<Arc<dyn SubmissionStore>>,
    pub mailer: Option<Arc<dyn Notifier>>,
    pub config: Config,
    pub forms: Forms,
}

/// The form configurations served by this instance.
pub struct Forms {
    pub contact: FormConfig,
    pub careers: FormConfig,
}

impl Forms {
    pub fn standard() -> Self {
        Self {
            contact: FormConfig::contact(),
            careers: FormConfig::careers(),
        }
    }
}
