//! CLI command implementations.

mod ask;
mod config;
mod doctor;
mod notes;
mod serve;
mod session;

pub use ask::run_ask;
pub use config::run_config;
pub use doctor::run_doctor;
pub use notes::run_notes;
pub use serve::run_serve;
pub use session::run_session;
