// ============================================================================
// MS POWER FITNESS - web client (Rust + Yew)
// ============================================================================
// - config:     API base URL + build-time settings
// - bootstrap:  build the root component and mount it on #app (once)
// - context:    configuration and session reachable from every component
// - services:   HTTP client for the gym API
// - components: screens and panels per role
// ============================================================================

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use bootstrap::{bootstrap, start, BootstrapError, Mount, MOUNT_SELECTOR};
pub use config::{resolve_api_url, AppConfig, DEFAULT_API_URL};
