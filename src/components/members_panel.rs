use yew::prelude::*;

use super::form::{node_value, GENDERS};
use super::{Loadable, Notice, NoticeKind, PaymentHistory};
use crate::hooks::{use_api_client, use_remote};
use crate::models::{AdminUserUpdate, MemberFilters, MemberList, UserDetails};
use crate::utils::validation::{parse_optional_date, password_reset};
use crate::utils::{format_date, input_value, utc_today};

#[derive(Properties, PartialEq)]
pub struct MembersPanelProps {
    /// Admins may deactivate accounts and reset passwords
    #[prop_or_default]
    pub can_edit: bool,
}

#[function_component(MembersPanel)]
pub fn members_panel(props: &MembersPanelProps) -> Html {
    let api = use_api_client();
    let filters = use_state(MemberFilters::default);
    let selected = use_state(|| None::<i64>);
    let error = use_state(|| None::<String>);
    let search_ref = use_node_ref();
    let gender_ref = use_node_ref();
    let plan_ref = use_node_ref();
    let dob_from_ref = use_node_ref();
    let dob_to_ref = use_node_ref();

    let members = {
        let api = api.clone();
        let filters = (*filters).clone();
        use_remote(move || async move { api.members(&filters).await })
    };
    let plans = {
        let api = api.clone();
        use_remote(move || async move { api.plans().await })
    };

    let on_search = {
        let filters = filters.clone();
        let error = error.clone();
        let reload = members.reload.clone();
        let refs = (
            search_ref.clone(),
            gender_ref.clone(),
            plan_ref.clone(),
            dob_from_ref.clone(),
            dob_to_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (search, gender, plan, dob_from, dob_to) = &refs;
            match (parse_optional_date(&node_value(dob_from)), parse_optional_date(&node_value(dob_to))) {
                (Ok(dob_from), Ok(dob_to)) => {
                    error.set(None);
                    filters.set(MemberFilters {
                        search: node_value(search),
                        gender: node_value(gender),
                        plan: node_value(plan),
                        dob_from,
                        dob_to,
                    });
                    reload.emit(());
                }
                (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
            }
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: i64| selected.set(Some(id)))
    };

    let render = {
        let selected_id = *selected;
        let today = utc_today();
        Callback::from(move |list: MemberList| {
            if list.members.is_empty() {
                return html! { <p class="empty">{"No members match."}</p> };
            }
            html! {
                <>
                    <p class="muted">{format!("{} members", list.count)}</p>
                    <table class="data-table clickable">
                        <thead>
                            <tr>
                                <th>{"Member"}</th><th>{"Email"}</th><th>{"Gender"}</th><th>{"Plan"}</th>
                                <th>{"Status"}</th><th>{"Ends"}</th><th>{"Joined"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for list.members.iter().map(|m| {
                                let id = m.id;
                                html! {
                                    <tr key={id}
                                        class={classes!(
                                            (selected_id == Some(id)).then_some("selected"),
                                            m.is_expiring_soon_on(today).then_some("row-expiring")
                                        )}
                                        onclick={on_select.reform(move |_| id)}>
                                        <td>{&m.display_name}</td>
                                        <td>{&m.email}</td>
                                        <td>{m.gender.clone().unwrap_or_default()}</td>
                                        <td>{&m.current_plan}</td>
                                        <td>{&m.membership_status}</td>
                                        <td>{m.end_date.map(format_date).unwrap_or_default()}</td>
                                        <td>{format_date(m.created_at.date())}</td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </>
            }
        })
    };

    let filter_values = (*filters).clone();
    let plan_names: Vec<String> = plans
        .state
        .ready()
        .map(|plans| plans.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default();

    html! {
        <>
            <section class="card">
                <h2>{"Members"}</h2>
                <form class="filters" onsubmit={on_search}>
                    <input type="search" placeholder="Name, email or phone" value={filter_values.search.clone()} ref={search_ref} />
                    <select ref={gender_ref}>
                        <option value="">{"Any gender"}</option>
                        { for GENDERS.iter().map(|g| html! {
                            <option value={*g} selected={filter_values.gender == *g}>{*g}</option>
                        }) }
                    </select>
                    <select ref={plan_ref}>
                        <option value="">{"Any plan"}</option>
                        { for plan_names.iter().map(|name| html! {
                            <option value={name.clone()} selected={filter_values.plan == *name}>{name}</option>
                        }) }
                    </select>
                    <label>{"Born from"}<input type="date" value={input_value(filter_values.dob_from)} ref={dob_from_ref} /></label>
                    <label>{"to"}<input type="date" value={input_value(filter_values.dob_to)} ref={dob_to_ref} /></label>
                    <button type="submit" class="btn-secondary">{"Search"}</button>
                </form>
                if let Some(message) = (*error).clone() {
                    <div class="form-error">{message}</div>
                }
                <Loadable<MemberList> state={(*members.state).clone()} {render} />
            </section>

            if let Some(user_id) = *selected {
                <UserDetailsCard key={user_id} {user_id} can_edit={props.can_edit} on_changed={members.reload.clone()} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct UserDetailsCardProps {
    user_id: i64,
    can_edit: bool,
    on_changed: Callback<()>,
}

#[function_component(UserDetailsCard)]
fn user_details_card(props: &UserDetailsCardProps) -> Html {
    let api = use_api_client();
    let flash = use_state(|| None::<(NoticeKind, String)>);
    let password_ref = use_node_ref();

    let details = {
        let api = api.clone();
        let user_id = props.user_id;
        use_remote(move || async move { api.user_details(user_id).await })
    };

    let apply = {
        let api = api.clone();
        let flash = flash.clone();
        let user_id = props.user_id;
        let reload = details.reload.clone();
        let on_changed = props.on_changed.clone();
        Callback::from(move |update: AdminUserUpdate| {
            let api = api.clone();
            let flash = flash.clone();
            let reload = reload.clone();
            let on_changed = on_changed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.update_user(user_id, &update).await {
                    Ok(response) => {
                        flash.set(Some((NoticeKind::Success, response.message)));
                        reload.emit(());
                        on_changed.emit(());
                    }
                    Err(e) => flash.set(Some((NoticeKind::Error, e.to_string()))),
                }
            });
        })
    };

    let can_edit = props.can_edit;
    let render = {
        let flash = flash.clone();
        Callback::from(move |user: UserDetails| {
            let toggle_active = {
                let active = user.active;
                apply.reform(move |_| AdminUserUpdate {
                    active: Some(!active),
                    ..Default::default()
                })
            };
            let reset_password = {
                let password_ref = password_ref.clone();
                let apply = apply.clone();
                let flash = flash.clone();
                Callback::from(move |_: MouseEvent| match password_reset(&node_value(&password_ref)) {
                    Ok(update) => apply.emit(update),
                    Err(e) => flash.set(Some((NoticeKind::Error, e.to_string()))),
                })
            };

            html! {
                <>
                    <dl class="details">
                        <dt>{"Name"}</dt><dd>{&user.name}</dd>
                        <dt>{"Email"}</dt><dd>{&user.email}</dd>
                        <dt>{"Phone"}</dt><dd>{&user.phone}</dd>
                        <dt>{"Born"}</dt><dd>{user.date_of_birth.map(format_date).unwrap_or_default()}</dd>
                        <dt>{"Roles"}</dt><dd>{user.roles.join(", ")}</dd>
                        <dt>{"Account"}</dt><dd>{ if user.active { "Active" } else { "Deactivated" } }</dd>
                        if let Some(m) = user.current_membership.clone() {
                            <dt>{"Membership"}</dt>
                            <dd>{format!("{} - {} until {}", m.plan.unwrap_or_default(), m.status,
                                m.end_date.map(format_date).unwrap_or_default())}</dd>
                        }
                    </dl>

                    if can_edit {
                        <div class="actions">
                            <button class="btn-secondary" onclick={toggle_active}>
                                { if user.active { "Deactivate account" } else { "Reactivate account" } }
                            </button>
                            <input type="password" placeholder="New password" ref={password_ref.clone()} />
                            <button class="btn-secondary" onclick={reset_password}>{"Reset password"}</button>
                        </div>
                    }

                    <h3>{"Memberships"}</h3>
                    <table class="data-table">
                        <thead><tr><th>{"Plan"}</th><th>{"From"}</th><th>{"To"}</th><th>{"Status"}</th></tr></thead>
                        <tbody>
                            { for user.memberships_history.iter().map(|m| html! {
                                <tr key={m.id}>
                                    <td>{&m.plan}</td>
                                    <td>{format_date(m.start_date)}</td>
                                    <td>{format_date(m.end_date)}</td>
                                    <td><span class={m.status.css_class()}>{format!("{:?}", m.status)}</span></td>
                                </tr>
                            }) }
                        </tbody>
                    </table>

                    <h3>{"Payments"}</h3>
                    <PaymentHistory records={user.payments_history.clone()} />
                </>
            }
        })
    };

    html! {
        <section class="card user-details">
            <h2>{"Member details"}</h2>
            if let Some((kind, message)) = (*flash).clone() {
                <Notice {kind} {message} />
            }
            <Loadable<UserDetails> state={(*details.state).clone()} {render} />
        </section>
    }
}
