use yew::prelude::*;

use super::form::{clear_inputs, node_value};
use super::{Loadable, Notice, NoticeKind};
use crate::hooks::{use_api_client, use_remote};
use crate::models::{Plan, PlanUpdate};
use crate::utils::validation::build_plan_draft;

/// Plan catalogue. Retiring a plan hides it from members but keeps history.
#[function_component(PlansPanel)]
pub fn plans_panel() -> Html {
    let api = use_api_client();
    let flash = use_state(|| None::<(NoticeKind, String)>);
    let name_ref = use_node_ref();
    let price_ref = use_node_ref();
    let duration_ref = use_node_ref();

    let plans = {
        let api = api.clone();
        use_remote(move || async move { api.admin_plans().await })
    };

    let on_create = {
        let api = api.clone();
        let flash = flash.clone();
        let reload = plans.reload.clone();
        let refs = (name_ref.clone(), price_ref.clone(), duration_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (name, price, duration) = &refs;
            let draft = match build_plan_draft(&node_value(name), &node_value(price), &node_value(duration)) {
                Ok(draft) => draft,
                Err(e) => {
                    flash.set(Some((NoticeKind::Error, e.to_string())));
                    return;
                }
            };

            let api = api.clone();
            let flash = flash.clone();
            let reload = reload.clone();
            let (name, price, duration) = refs.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_plan(&draft).await {
                    Ok(created) => {
                        log::info!("✅ Plan {} created", created.plan.id);
                        clear_inputs(&[&name, &price, &duration]);
                        flash.set(Some((NoticeKind::Success, created.message)));
                        reload.emit(());
                    }
                    Err(e) => flash.set(Some((NoticeKind::Error, e.to_string()))),
                }
            });
        })
    };

    let set_active = {
        let api = api.clone();
        let flash = flash.clone();
        let reload = plans.reload.clone();
        Callback::from(move |(plan_id, active): (i64, bool)| {
            let api = api.clone();
            let flash = flash.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if active {
                    let update = PlanUpdate {
                        is_active: Some(true),
                        ..Default::default()
                    };
                    api.update_plan(plan_id, &update).await
                } else {
                    api.delete_plan(plan_id).await
                };
                match result {
                    Ok(response) => flash.set(Some((NoticeKind::Success, response.message))),
                    Err(e) => flash.set(Some((NoticeKind::Error, e.to_string()))),
                }
                reload.emit(());
            });
        })
    };

    let render = Callback::from(move |plans: Vec<Plan>| html! {
        <table class="data-table">
            <thead>
                <tr><th>{"Plan"}</th><th>{"Price"}</th><th>{"Days"}</th><th>{"Status"}</th><th></th></tr>
            </thead>
            <tbody>
                { for plans.iter().map(|p| {
                    let id = p.id;
                    let active = p.is_active;
                    html! {
                        <tr key={id} class={classes!((!active).then_some("inactive"))}>
                            <td>{&p.name}</td>
                            <td>{p.price_label()}</td>
                            <td>{p.duration_days.to_string()}</td>
                            <td>{ if active { "On sale" } else { "Retired" } }</td>
                            <td>
                                <button class="btn-secondary" onclick={set_active.reform(move |_| (id, !active))}>
                                    { if active { "Retire" } else { "Reactivate" } }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    });

    html! {
        <>
            if let Some((kind, message)) = (*flash).clone() {
                <Notice {kind} {message} />
            }
            <section class="card">
                <h2>{"Plans"}</h2>
                <Loadable<Vec<Plan>> state={(*plans.state).clone()} {render} />
            </section>
            <section class="card">
                <h2>{"New plan"}</h2>
                <form class="inline-form" onsubmit={on_create}>
                    <input type="text" placeholder="Name" ref={name_ref} />
                    <input type="number" placeholder="Price (₹)" min="1" step="0.01" ref={price_ref} />
                    <input type="number" placeholder="Duration (days)" min="1" ref={duration_ref} />
                    <button type="submit" class="btn-primary">{"Create"}</button>
                </form>
            </section>
        </>
    }
}
