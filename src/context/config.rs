use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;

/// Configuration provided by the root component. Falls back to the defaults
/// when a component is rendered outside the provider.
#[hook]
pub fn use_app_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_default()
}

/// API base URL visible to every component under the root
#[hook]
pub fn use_api_url() -> String {
    use_app_config().api_url.clone()
}
