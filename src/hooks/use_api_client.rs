use yew::prelude::*;

use crate::context::{use_api_url, use_session_context};
use crate::services::ApiClient;

/// Client bound to the configured base URL and the current session token
#[hook]
pub fn use_api_client() -> ApiClient {
    let api_url = use_api_url();
    let session = use_session_context();
    ApiClient::new(api_url).with_token(session.token())
}
