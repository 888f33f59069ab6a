pub mod config;
pub mod session;

pub use config::{use_api_url, use_app_config};
pub use session::{use_session_context, SessionContext};
