//! DocQuiz server: one PDF session behind an HTTP API.

pub mod routes;
pub mod session;
pub mod state;

pub use routes::build_router;
pub use session::{Session, SessionSettings};
pub use state::AppState;
