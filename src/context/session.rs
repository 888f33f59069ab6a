use yew::prelude::*;

use crate::models::Session;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Option<Session>,
    pub logout: Callback<()>,
}

impl SessionContext {
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

#[hook]
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext {
        session: None,
        logout: Callback::noop(),
    })
}
