pub mod use_api_client;
pub mod use_auth;
pub mod use_remote;

pub use use_api_client::use_api_client;
pub use use_auth::{use_auth, AuthState, UseAuthHandle};
pub use use_remote::{use_remote, Remote, UseRemoteHandle};
