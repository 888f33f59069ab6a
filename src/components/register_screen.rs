use yew::prelude::*;

use super::form::{node_value, GENDERS};
use crate::utils::RegistrationForm;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub busy: bool,
    pub error: Option<String>,
    /// Creates the first admin account; date of birth and gender are hidden
    #[prop_or_default]
    pub admin_setup: bool,
    pub on_register: Callback<RegistrationForm>,
    pub on_back: Callback<()>,
}

/// Member self-registration, or first-run admin setup
#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let dob_ref = use_node_ref();
    let gender_ref = use_node_ref();

    let on_submit = {
        let refs = (
            name_ref.clone(),
            phone_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
            dob_ref.clone(),
            gender_ref.clone(),
        );
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, phone, email, password, dob, gender) = &refs;
            on_register.emit(RegistrationForm {
                name: node_value(name),
                phone: node_value(phone),
                email: node_value(email),
                password: node_value(password),
                date_of_birth: node_value(dob),
                gender: node_value(gender),
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{ if props.admin_setup { "Set up the gym admin" } else { "Join MS Power Fitness" } }</h1>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    if let Some(message) = props.error.clone() {
                        <div class="form-error">{message}</div>
                    }

                    <div class="form-group">
                        <label for="reg-name">{"Full name"}</label>
                        <input type="text" id="reg-name" ref={name_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-phone">{"Phone (10 digits)"}</label>
                        <input type="tel" id="reg-phone" maxlength="10" inputmode="numeric" ref={phone_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-email">{"Email"}</label>
                        <input type="email" id="reg-email" ref={email_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reg-password">{"Password"}</label>
                        <input type="password" id="reg-password" ref={password_ref} required=true />
                    </div>
                    if !props.admin_setup {
                        <div class="form-group">
                            <label for="reg-dob">{"Date of birth"}</label>
                            <input type="date" id="reg-dob" ref={dob_ref} />
                        </div>
                        <div class="form-group">
                            <label for="reg-gender">{"Gender"}</label>
                            <select id="reg-gender" ref={gender_ref}>
                                <option value="">{"Prefer not to say"}</option>
                                { for GENDERS.iter().map(|g| html! { <option value={*g}>{*g}</option> }) }
                            </select>
                        </div>
                    }

                    <button type="submit" class="btn-login" disabled={props.busy}>
                        { match (props.busy, props.admin_setup) {
                            (true, _) => "Creating account...",
                            (false, true) => "Create admin",
                            (false, false) => "Register",
                        } }
                    </button>

                    <div class="login-footer">
                        <button type="button" class="btn-register-link" onclick={props.on_back.reform(|_| ())}>
                            {"Back to sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
