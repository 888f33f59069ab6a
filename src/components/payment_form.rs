use yew::prelude::*;

use super::form::{clear_inputs, node_value};
use crate::hooks::use_api_client;
use crate::models::{PaymentMethod, Plan};
use crate::utils::validation::build_payment;

#[derive(Properties, PartialEq)]
pub struct PaymentFormProps {
    pub plans: Vec<Plan>,
    /// Receives the server's confirmation message
    pub on_submitted: Callback<String>,
}

/// Plan purchase by UPI (with UTR) or cash, pending admin approval
#[function_component(PaymentForm)]
pub fn payment_form(props: &PaymentFormProps) -> Html {
    let api = use_api_client();
    let selected = use_state(|| props.plans.first().map(|p| p.id));
    let method = use_state(PaymentMethod::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let utr_ref = use_node_ref();
    let notes_ref = use_node_ref();

    if props.plans.is_empty() {
        return html! { <p class="empty">{"No plans available right now."}</p> };
    }

    let on_plan_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value().parse().ok());
        })
    };

    let on_method_change = {
        let method = method.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<PaymentMethod>() {
                Ok(m) => method.set(m),
                Err(e) => log::warn!("⚠️ {}", e),
            }
        })
    };

    let on_submit = {
        let plans = props.plans.clone();
        let selected = selected.clone();
        let method = method.clone();
        let error = error.clone();
        let busy = busy.clone();
        let utr_ref = utr_ref.clone();
        let notes_ref = notes_ref.clone();
        let on_submitted = props.on_submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(plan) = plans.iter().find(|p| Some(p.id) == *selected) else {
                error.set(Some("Please choose a plan".to_string()));
                return;
            };

            let payment = match build_payment(plan, *method, &node_value(&utr_ref), &node_value(&notes_ref)) {
                Ok(payment) => payment,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            error.set(None);
            busy.set(true);
            let api = api.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_submitted = on_submitted.clone();
            let utr_ref = utr_ref.clone();
            let notes_ref = notes_ref.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api.submit_payment(&payment).await {
                    Ok(submitted) => {
                        log::info!("✅ Payment {} submitted", submitted.payment_id);
                        clear_inputs(&[&utr_ref, &notes_ref]);
                        on_submitted.emit(submitted.message);
                    }
                    Err(e) => {
                        log::error!("❌ Payment submission failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <form class="payment-form" onsubmit={on_submit}>
            if let Some(message) = (*error).clone() {
                <div class="form-error">{message}</div>
            }

            <div class="form-group">
                <label for="pay-plan">{"Plan"}</label>
                <select id="pay-plan" onchange={on_plan_change}>
                    { for props.plans.iter().map(|p| html! {
                        <option value={p.id.to_string()} selected={Some(p.id) == *selected}>
                            {format!("{} - {} / {} days", p.name, p.price_label(), p.duration_days)}
                        </option>
                    }) }
                </select>
            </div>

            <div class="form-group">
                <label for="pay-method">{"Payment method"}</label>
                <select id="pay-method" onchange={on_method_change}>
                    <option value="UPI" selected={*method == PaymentMethod::Upi}>{"UPI"}</option>
                    <option value="Cash" selected={*method == PaymentMethod::Cash}>{"Cash at the desk"}</option>
                </select>
            </div>

            if *method == PaymentMethod::Upi {
                <div class="form-group">
                    <label for="pay-utr">{"UTR (12 digits)"}</label>
                    <input type="text" id="pay-utr" maxlength="12" inputmode="numeric" ref={utr_ref} />
                </div>
            }

            <div class="form-group">
                <label for="pay-notes">{"Notes"}</label>
                <input type="text" id="pay-notes" ref={notes_ref} />
            </div>

            <button type="submit" class="btn-primary" disabled={*busy}>
                { if *busy { "Submitting..." } else { "Submit for approval" } }
            </button>
        </form>
    }
}
