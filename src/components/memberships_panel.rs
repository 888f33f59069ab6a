use yew::prelude::*;

use super::{Loadable, Notice, NoticeKind};
use crate::hooks::{use_api_client, use_remote, Remote};
use crate::models::{ExpiredMember, PriorityEntry};
use crate::utils::format_date;

/// Expiring-this-week and expired members, with manual (cash) renewal
#[function_component(MembershipsPanel)]
pub fn memberships_panel() -> Html {
    let api = use_api_client();
    let flash = use_state(|| None::<(NoticeKind, String)>);
    let renewal_plan = use_state(|| None::<i64>);

    let plans = {
        let api = api.clone();
        use_remote(move || async move {
            api.admin_plans()
                .await
                .map(|plans| plans.into_iter().filter(|p| p.is_active).collect::<Vec<_>>())
        })
    };
    let priority = {
        let api = api.clone();
        use_remote(move || async move { api.priority_list().await })
    };
    let expired = {
        let api = api.clone();
        use_remote(move || async move { api.expired_members().await })
    };

    let chosen_plan = (*renewal_plan).or_else(|| {
        plans.state.ready().and_then(|p| p.first()).map(|p| p.id)
    });

    let renew = {
        let api = api.clone();
        let flash = flash.clone();
        let reload_priority = priority.reload.clone();
        let reload_expired = expired.reload.clone();
        Callback::from(move |user_id: i64| {
            let Some(plan_id) = chosen_plan else {
                flash.set(Some((NoticeKind::Error, "Create a plan before renewing".to_string())));
                return;
            };
            let api = api.clone();
            let flash = flash.clone();
            let reload_priority = reload_priority.clone();
            let reload_expired = reload_expired.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.renew_membership(user_id, plan_id).await {
                    Ok(granted) => {
                        flash.set(Some((
                            NoticeKind::Success,
                            format!("{} until {}", granted.message, format_date(granted.membership.end_date)),
                        )));
                        reload_priority.emit(());
                        reload_expired.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Renewal for user {} failed: {}", user_id, e);
                        flash.set(Some((NoticeKind::Error, e.to_string())));
                    }
                }
            });
        })
    };

    let on_plan_change = {
        let renewal_plan = renewal_plan.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            renewal_plan.set(select.value().parse().ok());
        })
    };

    let plan_picker = match &*plans.state {
        Remote::Ready(plans) => html! {
            <select id="renew-plan" onchange={on_plan_change}>
                { for plans.iter().map(|p| html! {
                    <option value={p.id.to_string()} selected={Some(p.id) == chosen_plan}>
                        {format!("{} ({} days)", p.name, p.duration_days)}
                    </option>
                }) }
            </select>
        },
        Remote::Loading => html! { <span>{"Loading plans..."}</span> },
        Remote::Failed(message) => html! { <span class="form-error">{message}</span> },
    };

    let render_priority = {
        let renew = renew.clone();
        Callback::from(move |entries: Vec<PriorityEntry>| {
            if entries.is_empty() {
                return html! { <p class="empty">{"No memberships ending this week."}</p> };
            }
            html! {
                <table class="data-table">
                    <thead>
                        <tr><th>{"Member"}</th><th>{"Phone"}</th><th>{"Plan"}</th><th>{"Ends"}</th><th>{"Days left"}</th><th></th></tr>
                    </thead>
                    <tbody>
                        { for entries.iter().map(|m| {
                            let user_id = m.user_id;
                            html! {
                                <tr key={m.id}>
                                    <td>{&m.user_name}</td>
                                    <td><a href={format!("tel:{}", m.phone)}>{&m.phone}</a></td>
                                    <td>{&m.plan}</td>
                                    <td>{format_date(m.end_date)}</td>
                                    <td>{m.days_remaining.to_string()}</td>
                                    <td><button class="btn-primary" onclick={renew.reform(move |_| user_id)}>{"Renew"}</button></td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        })
    };

    let render_expired = Callback::from(move |members: Vec<ExpiredMember>| {
        if members.is_empty() {
            return html! { <p class="empty">{"No expired members."}</p> };
        }
        html! {
            <table class="data-table">
                <thead>
                    <tr><th>{"Member"}</th><th>{"Phone"}</th><th>{"Last plan"}</th><th>{"Expired on"}</th><th>{"Days ago"}</th><th></th></tr>
                </thead>
                <tbody>
                    { for members.iter().map(|m| {
                        let user_id = m.user_id;
                        html! {
                            <tr key={user_id}>
                                <td>{&m.user_name}</td>
                                <td><a href={format!("tel:{}", m.phone)}>{&m.phone}</a></td>
                                <td>{&m.last_plan}</td>
                                <td>{format_date(m.expired_on)}</td>
                                <td>{m.days_expired.to_string()}</td>
                                <td><button class="btn-primary" onclick={renew.reform(move |_| user_id)}>{"Renew"}</button></td>
                            </tr>
                        }
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
                <div class="form-group inline">
                    <label for="renew-plan">{"Renew with plan"}</label>
                    {plan_picker}
                </div>
            </section>
            <section class="card">
                <h2>{"Expiring within 7 days"}</h2>
                <Loadable<Vec<PriorityEntry>> state={(*priority.state).clone()} render={render_priority} />
            </section>
            <section class="card">
                <h2>{"Expired members"}</h2>
                <Loadable<Vec<ExpiredMember>> state={(*expired.state).clone()} render={render_expired} />
            </section>
        </>
    }
}
