//! DocQuiz Core — configuration, errors, linguistic resource discovery.

pub mod config;
pub mod error;
pub mod resources;

pub use config::{DataPaths, DocQuizConfig, QaConfig};
pub use error::{Error, Result};
pub use resources::{LinguisticResources, ResourceKind, ResourceStatus};
