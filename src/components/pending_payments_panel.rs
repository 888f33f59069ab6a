use yew::prelude::*;

use super::{Loadable, Notice, NoticeKind};
use crate::hooks::{use_api_client, use_remote};
use crate::models::PendingPayment;
use crate::utils::{format_amount, format_date, format_datetime};

#[derive(Clone, Copy, PartialEq)]
enum Decision {
    Approve,
    Reject,
}

/// Payments waiting for an admin decision
#[function_component(PendingPaymentsPanel)]
pub fn pending_payments_panel() -> Html {
    let api = use_api_client();
    let flash = use_state(|| None::<(NoticeKind, String)>);
    let pending = {
        let api = api.clone();
        use_remote(move || async move { api.pending_payments().await })
    };

    let decide = {
        let api = api.clone();
        let flash = flash.clone();
        let reload = pending.reload.clone();
        Callback::from(move |(payment_id, decision): (i64, Decision)| {
            let api = api.clone();
            let flash = flash.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match decision {
                    Decision::Approve => api.approve_payment(payment_id).await.map(|granted| {
                        format!(
                            "{} ({} to {})",
                            granted.message,
                            format_date(granted.membership.start_date),
                            format_date(granted.membership.end_date)
                        )
                    }),
                    Decision::Reject => api.reject_payment(payment_id).await.map(|r| r.message),
                };
                match outcome {
                    Ok(message) => {
                        log::info!("✅ Payment {}: {}", payment_id, message);
                        flash.set(Some((NoticeKind::Success, message)));
                    }
                    Err(e) => {
                        log::error!("❌ Payment {} decision failed: {}", payment_id, e);
                        flash.set(Some((NoticeKind::Error, e.to_string())));
                    }
                }
                reload.emit(());
            });
        })
    };

    let render = Callback::from(move |payments: Vec<PendingPayment>| {
        if payments.is_empty() {
            return html! { <p class="empty">{"Nothing waiting for approval."}</p> };
        }
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th><th>{"Member"}</th><th>{"Plan"}</th><th>{"Amount"}</th>
                        <th>{"Method"}</th><th>{"UTR"}</th><th>{"Notes"}</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    { for payments.iter().map(|p| {
                        let id = p.id;
                        html! {
                            <tr key={id}>
                                <td>{format_datetime(p.date)}</td>
                                <td>{&p.user_name}</td>
                                <td>{&p.plan}</td>
                                <td>{format_amount(p.amount)}</td>
                                <td>{p.payment_method.as_str()}</td>
                                <td>{p.txn_ref.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>{p.notes.clone().unwrap_or_default()}</td>
                                <td class="actions">
                                    <button class="btn-approve" onclick={decide.reform(move |_| (id, Decision::Approve))}>{"Approve"}</button>
                                    <button class="btn-reject" onclick={decide.reform(move |_| (id, Decision::Reject))}>{"Reject"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    });

    html! {
        <section class="card">
            <h2>{"Pending payments"}</h2>
            if let Some((kind, message)) = (*flash).clone() {
                <Notice {kind} {message} />
            }
            <Loadable<Vec<PendingPayment>> state={(*pending.state).clone()} {render} />
        </section>
    }
}
