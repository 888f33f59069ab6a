// ============================================================================
// BOOTSTRAP - resolve config, build the root component, mount it on #app
// ============================================================================
// Runs once per page load. Failures are reported, never retried.
// ============================================================================

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::components::{App, AppProps};
use crate::config::{AppConfig, API_URL_ENV, DEFAULT_API_URL};
use crate::logging;

/// Selector of the page element that hosts the application
pub const MOUNT_SELECTOR: &str = "#app";

static STARTED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error, PartialEq)]
pub enum BootstrapError {
    #[error("no browser document available")]
    NoDocument,
    #[error("mount target `{0}` not found in the page")]
    MountTargetMissing(String),
    #[error("application already started")]
    AlreadyStarted,
}

/// Attaches the root component to an output target.
pub trait Mount {
    fn mount(&mut self, selector: &str, config: Rc<AppConfig>) -> Result<(), BootstrapError>;
}

/// Renders [`App`] into the element matched by the selector
pub struct YewMount;

impl Mount for YewMount {
    fn mount(&mut self, selector: &str, config: Rc<AppConfig>) -> Result<(), BootstrapError> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or(BootstrapError::NoDocument)?;

        let root = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| BootstrapError::MountTargetMissing(selector.to_string()))?;

        yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
        Ok(())
    }
}

/// Construct, configure, mount. `mount` is invoked exactly once.
pub fn bootstrap<M: Mount>(env_value: Option<&str>, mounter: &mut M) -> Result<Rc<AppConfig>, BootstrapError> {
    let base = AppConfig::from_env();
    let config = Rc::new(AppConfig::from_values(
        env_value,
        Some(base.log_level.as_str()),
        Some(base.environment.as_str()),
    ));

    if env_value.map_or(true, str::is_empty) {
        log::warn!("⚠️ {} not set, using {}", API_URL_ENV, DEFAULT_API_URL);
    }
    log::info!("🔧 API base URL: {}", config.api_url);
    mounter.mount(MOUNT_SELECTOR, Rc::clone(&config))?;
    log::info!("✅ Mounted on {}", MOUNT_SELECTOR);

    Ok(config)
}

fn claim_start(flag: &AtomicBool) -> Result<(), BootstrapError> {
    flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .map(|_| ())
        .map_err(|_| BootstrapError::AlreadyStarted)
}

/// Page entry point
pub fn start() -> Result<Rc<AppConfig>, BootstrapError> {
    claim_start(&STARTED)?;

    console_error_panic_hook::set_once();
    logging::init(&AppConfig::from_env());
    log::info!("🏋️ MS Power Fitness starting...");

    bootstrap(option_env!("VITE_API_URL"), &mut YewMount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingMount {
        calls: Vec<(String, String)>,
        fail_with: Option<BootstrapError>,
    }

    impl Mount for RecordingMount {
        fn mount(&mut self, selector: &str, config: Rc<AppConfig>) -> Result<(), BootstrapError> {
            self.calls.push((selector.to_string(), config.api_url.clone()));
            match self.fail_with.take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn mounts_once_on_app_selector() {
        let mut mounter = RecordingMount::default();
        bootstrap(Some("https://api.example.com"), &mut mounter).unwrap();

        assert_eq!(mounter.calls.len(), 1);
        assert_eq!(mounter.calls[0].0, "#app");
    }

    #[test]
    fn configured_url_reaches_the_root() {
        let mut mounter = RecordingMount::default();
        let config = bootstrap(Some("https://api.example.com"), &mut mounter).unwrap();

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(mounter.calls[0].1, "https://api.example.com");
    }

    #[test]
    fn unset_or_empty_url_mounts_with_localhost() {
        for env_value in [None, Some("")] {
            let mut mounter = RecordingMount::default();
            let config = bootstrap(env_value, &mut mounter).unwrap();
            assert_eq!(config.api_url, "http://localhost:5000");
            assert_eq!(mounter.calls[0].1, "http://localhost:5000");
        }
    }

    #[test]
    fn mount_failure_is_propagated() {
        let mut mounter = RecordingMount {
            fail_with: Some(BootstrapError::MountTargetMissing("#app".into())),
            ..Default::default()
        };

        let err = bootstrap(None, &mut mounter).unwrap_err();
        assert_eq!(err, BootstrapError::MountTargetMissing("#app".into()));
        assert_eq!(mounter.calls.len(), 1);
    }

    #[test]
    fn second_start_is_rejected() {
        let flag = AtomicBool::new(false);
        assert!(claim_start(&flag).is_ok());
        assert_eq!(claim_start(&flag), Err(BootstrapError::AlreadyStarted));
    }
}
