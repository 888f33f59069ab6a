use yew::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub busy: bool,
    pub error: Option<String>,
    pub on_login: Callback<(String, String)>,
    pub on_show_register: Callback<()>,
    pub on_show_setup: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let local_error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();
        let local_error = local_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value().trim().to_string();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    local_error.set(Some("Please fill in email and password".to_string()));
                    return;
                }

                local_error.set(None);
                on_login.emit((email, password));
            }
        })
    };

    let error = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🏋️"}</div>
                    </div>
                    <h1>{"MS Power Fitness"}</h1>
                    <p>{"Members & gym management"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    if let Some(message) = error {
                        <div class="form-error">{message}</div>
                    }

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={props.busy}>
                        <span class="btn-text">
                            { if props.busy { "Signing in..." } else { "Sign in" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"New member?"}</p>
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_register.reform(|_| ())}
                        >
                            {"Create an account"}
                        </button>
                        <button
                            type="button"
                            class="btn-setup-link"
                            onclick={props.on_show_setup.reform(|_| ())}
                        >
                            {"First run? Set up the admin account"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
