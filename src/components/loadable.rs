use yew::prelude::*;

use crate::hooks::Remote;

#[derive(Properties, PartialEq)]
pub struct LoadableProps<T: Clone + PartialEq + 'static> {
    pub state: Remote<T>,
    pub render: Callback<T, Html>,
}

/// Spinner, error or the rendered value of a remote load
#[function_component(Loadable)]
pub fn loadable<T: Clone + PartialEq + 'static>(props: &LoadableProps<T>) -> Html {
    match &props.state {
        Remote::Loading => html! { <div class="loading">{"Loading..."}</div> },
        Remote::Failed(message) => html! { <div class="form-error">{message}</div> },
        Remote::Ready(value) => props.render.emit(value.clone()),
    }
}
