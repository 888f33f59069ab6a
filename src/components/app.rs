use std::rc::Rc;

use yew::prelude::*;

use super::{AdminDashboard, Header, LoginScreen, ManagerDashboard, MemberDashboard, Notice, NoticeKind, RegisterScreen};
use crate::config::AppConfig;
use crate::context::SessionContext;
use crate::hooks::use_auth;
use crate::models::Role;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

/// Root component. Everything below reads the configuration from context.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let auth = use_auth(props.config.api_url.clone());
    let state = (*auth.state).clone();

    let session_ctx = SessionContext {
        session: state.session.clone(),
        logout: auth.logout.clone(),
    };

    let body = match &state.session {
        Some(session) => {
            let dashboard = match session.role() {
                Role::Admin => html! { <AdminDashboard /> },
                Role::Manager => html! { <ManagerDashboard /> },
                Role::Member => html! { <MemberDashboard /> },
            };
            html! {
                <>
                    <Header user={session.user.clone()} on_logout={auth.logout.clone()} />
                    <main class="dashboard">{dashboard}</main>
                </>
            }
        }
        None if state.show_register || state.setup_admin => html! {
            <RegisterScreen
                busy={state.busy}
                error={state.error.clone()}
                admin_setup={state.setup_admin}
                on_register={if state.setup_admin { auth.setup_admin.clone() } else { auth.register.clone() }}
                on_back={auth.back_to_login.clone()}
            />
        },
        None => html! {
            <LoginScreen
                busy={state.busy}
                error={state.error.clone()}
                on_login={auth.login.clone()}
                on_show_register={auth.show_register.clone()}
                on_show_setup={auth.show_admin_setup.clone()}
            />
        },
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <ContextProvider<SessionContext> context={session_ctx}>
                if let Some(message) = state.notice.clone() {
                    <Notice kind={NoticeKind::Info} {message} />
                }
                {body}
            </ContextProvider<SessionContext>>
        </ContextProvider<Rc<AppConfig>>>
    }
}
