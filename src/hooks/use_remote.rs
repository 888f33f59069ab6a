use std::future::Future;

use yew::prelude::*;

use crate::context::use_session_context;
use crate::services::ApiError;

#[derive(Clone, PartialEq, Debug)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Numbers each load so only the newest one may publish its result
#[derive(Default, Debug)]
pub struct LoadSequence {
    latest: u32,
}

impl LoadSequence {
    pub fn begin(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

pub struct UseRemoteHandle<T> {
    pub state: UseStateHandle<Remote<T>>,
    pub reload: Callback<()>,
}

/// Loads `fetch` on mount and on every `reload`. A response that arrives
/// after a newer load started is dropped. A rejected token ends the session.
#[hook]
pub fn use_remote<T, F, Fut>(fetch: F) -> UseRemoteHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Remote::<T>::Loading);
    let generation = use_state(|| 0u32);
    let sequence = use_mut_ref(LoadSequence::default);
    let session = use_session_context();

    {
        let state = state.clone();
        let logout = session.logout.clone();
        let sequence = sequence.clone();
        use_effect_with(*generation, move |_| {
            let ticket = sequence.borrow_mut().begin();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch().await;
                if !sequence.borrow().is_current(ticket) {
                    log::debug!("Dropping superseded load #{}", ticket);
                    return;
                }
                match result {
                    Ok(value) => state.set(Remote::Ready(value)),
                    Err(e) => {
                        log::error!("❌ Load failed: {}", e);
                        if e.is_unauthorized() {
                            logout.emit(());
                        }
                        state.set(Remote::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(*generation + 1))
    };

    UseRemoteHandle { state, reload }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_load_is_superseded_by_newer() {
        let mut sequence = LoadSequence::default();
        let first = sequence.begin();
        let second = sequence.begin();

        // second resolves first, then the slow first one arrives
        assert!(sequence.is_current(second));
        assert!(!sequence.is_current(first));
    }

    #[test]
    fn single_load_is_current() {
        let mut sequence = LoadSequence::default();
        let ticket = sequence.begin();
        assert!(sequence.is_current(ticket));
    }

    #[test]
    fn ready_only_exposes_loaded_value() {
        assert_eq!(Remote::Ready(3).ready(), Some(&3));
        assert_eq!(Remote::<i32>::Loading.ready(), None);
        assert_eq!(Remote::<i32>::Failed("x".into()).ready(), None);
    }
}
