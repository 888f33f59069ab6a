pub mod api_client;
pub mod error;

pub use api_client::{ApiClient, AUTH_HEADER};
pub use error::ApiError;
