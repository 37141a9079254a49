//! Shared application state.

use std::sync::Arc;

use docquiz_core::{DocQuizConfig, LinguisticResources};
use parking_lot::Mutex;

use crate::session::{Session, SessionSettings};

/// Shared application state accessible from all route handlers.
///
/// There is one session per server. Handlers take the lock for the whole
/// of an action so actions never interleave.
pub struct AppState {
    pub config: DocQuizConfig,
    pub resources: Arc<LinguisticResources>,
    pub session: Mutex<Session>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: DocQuizConfig, resources: LinguisticResources) -> Self {
        let resources = Arc::new(resources);
        let session = Session::new(resources.clone(), SessionSettings::from(&config));
        Self {
            config,
            resources,
            session: Mutex::new(session),
            started_at: chrono::Utc::now(),
        }
    }
}
