//! Application services
//!
//! Startup wiring and user-facing dialogs.

mod alert;
mod bootstrap;

pub use alert::show_alert;
pub use bootstrap::bootstrap_from_env;
