use yew::prelude::*;

use super::form::node_value;
use crate::hooks::use_api_client;
use crate::models::Profile;
use crate::utils::validation::profile_changes;

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
    pub profile: Profile,
    pub on_saved: Callback<String>,
}

#[function_component(ProfileForm)]
pub fn profile_form(props: &ProfileFormProps) -> Html {
    let api = use_api_client();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let profile = props.profile.clone();
        let on_saved = props.on_saved.clone();
        let error = error.clone();
        let busy = busy.clone();
        let refs = (name_ref.clone(), email_ref.clone(), phone_ref.clone(), password_ref.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, email, phone, password) = &refs;

            let update = match profile_changes(
                &profile,
                &node_value(name),
                &node_value(email),
                &node_value(phone),
                &node_value(password),
            ) {
                Ok(update) => update,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            if update.is_empty() {
                error.set(Some("Nothing to update".to_string()));
                return;
            }

            error.set(None);
            busy.set(true);
            let api = api.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api.update_profile(&update).await {
                    Ok(response) => on_saved.emit(response.message),
                    Err(e) => {
                        log::error!("❌ Profile update failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let profile = &props.profile;

    html! {
        <form class="profile-form" onsubmit={on_submit}>
            if let Some(message) = (*error).clone() {
                <div class="form-error">{message}</div>
            }
            <div class="form-group">
                <label for="profile-name">{"Name"}</label>
                <input type="text" id="profile-name" value={profile.name.clone()} ref={name_ref} />
            </div>
            <div class="form-group">
                <label for="profile-email">{"Email"}</label>
                <input type="email" id="profile-email" value={profile.email.clone()} ref={email_ref} />
            </div>
            <div class="form-group">
                <label for="profile-phone">{"Phone"}</label>
                <input type="tel" id="profile-phone" maxlength="10" value={profile.phone.clone()} ref={phone_ref} />
            </div>
            <div class="form-group">
                <label for="profile-password">{"New password"}</label>
                <input type="password" id="profile-password" placeholder="Leave blank to keep" ref={password_ref} />
            </div>
            <button type="submit" class="btn-primary" disabled={*busy}>{"Save"}</button>
        </form>
    }
}
