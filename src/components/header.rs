use yew::prelude::*;

use crate::models::SessionUser;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: SessionUser,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let role = props.user.role;

    html! {
        <header class="app-header">
            <div class="brand">
                <span class="logo-icon">{"🏋️"}</span>
                <h1>{"MS Power Fitness"}</h1>
            </div>
            <div class="user-box">
                <span class="user-name">{&props.user.name}</span>
                <span class={classes!("role-badge", format!("role-{}", role.label().to_lowercase()))}>
                    {role.label()}
                </span>
                <button type="button" class="btn-logout" onclick={props.on_logout.reform(|_| ())}>
                    {"Logout"}
                </button>
            </div>
        </header>
    }
}
