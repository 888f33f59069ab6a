use yew::prelude::*;

use super::form::{node_value, GENDERS};
use super::{Loadable, Notice, NoticeKind};
use crate::hooks::{use_api_client, use_remote};
use crate::models::ManagerSummary;
use crate::utils::{format_date, RegistrationForm};

#[function_component(ManagersPanel)]
pub fn managers_panel() -> Html {
    let api = use_api_client();
    let flash = use_state(|| None::<(NoticeKind, String)>);
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let dob_ref = use_node_ref();
    let gender_ref = use_node_ref();

    let managers = {
        let api = api.clone();
        use_remote(move || async move { api.managers().await })
    };

    let on_create = {
        let api = api.clone();
        let flash = flash.clone();
        let reload = managers.reload.clone();
        let refs = (
            name_ref.clone(),
            phone_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
            dob_ref.clone(),
            gender_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, phone, email, password, dob, gender) = &refs;
            let form = RegistrationForm {
                name: node_value(name),
                phone: node_value(phone),
                email: node_value(email),
                password: node_value(password),
                date_of_birth: node_value(dob),
                gender: node_value(gender),
            };
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    flash.set(Some((NoticeKind::Error, e.to_string())));
                    return;
                }
            };

            let api = api.clone();
            let flash = flash.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_manager(&request).await {
                    Ok(created) => {
                        log::info!("✅ Manager {} created", created.user.id);
                        flash.set(Some((NoticeKind::Success, created.message)));
                        reload.emit(());
                    }
                    Err(e) => flash.set(Some((NoticeKind::Error, e.to_string()))),
                }
            });
        })
    };

    let render = Callback::from(|managers: Vec<ManagerSummary>| {
        if managers.is_empty() {
            return html! { <p class="empty">{"No managers yet."}</p> };
        }
        html! {
            <table class="data-table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Email"}</th><th>{"Phone"}</th><th>{"Since"}</th><th>{"Active"}</th></tr>
                </thead>
                <tbody>
                    { for managers.iter().map(|m| html! {
                        <tr key={m.id}>
                            <td>{&m.name}</td>
                            <td>{&m.email}</td>
                            <td>{&m.phone}</td>
                            <td>{format_date(m.created_at.date())}</td>
                            <td>{ if m.active { "Yes" } else { "No" } }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        }
    });

    html! {
        <>
            if let Some((kind, message)) = (*flash).clone() {
                <Notice {kind} {message} />
            }
            <section class="card">
                <h2>{"Managers"}</h2>
                <Loadable<Vec<ManagerSummary>> state={(*managers.state).clone()} {render} />
            </section>
            <section class="card">
                <h2>{"Add a manager"}</h2>
                <form class="inline-form" onsubmit={on_create}>
                    <input type="text" placeholder="Full name" ref={name_ref} />
                    <input type="tel" placeholder="Phone (10 digits)" maxlength="10" ref={phone_ref} />
                    <input type="email" placeholder="Email" ref={email_ref} />
                    <input type="password" placeholder="Password" ref={password_ref} />
                    <input type="date" ref={dob_ref} />
                    <select ref={gender_ref}>
                        <option value="">{"Gender"}</option>
                        { for GENDERS.iter().map(|g| html! { <option value={*g}>{*g}</option> }) }
                    </select>
                    <button type="submit" class="btn-primary">{"Create manager"}</button>
                </form>
            </section>
        </>
    }
}
