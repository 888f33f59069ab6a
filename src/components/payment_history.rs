use yew::prelude::*;

use crate::models::PaymentRecord;
use crate::utils::{format_amount, format_datetime};

#[derive(Properties, PartialEq)]
pub struct PaymentHistoryProps {
    pub records: Vec<PaymentRecord>,
}

#[function_component(PaymentHistory)]
pub fn payment_history(props: &PaymentHistoryProps) -> Html {
    if props.records.is_empty() {
        return html! { <p class="empty">{"No payments yet."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Plan"}</th>
                    <th>{"Amount"}</th>
                    <th>{"Method"}</th>
                    <th>{"UTR"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.records.iter().map(|p| html! {
                    <tr key={p.id}>
                        <td>{format_datetime(p.date)}</td>
                        <td>{&p.plan}</td>
                        <td>{format_amount(p.amount)}</td>
                        <td>{p.payment_method.as_str()}</td>
                        <td>{p.txn_ref.clone().unwrap_or_else(|| "-".to_string())}</td>
                        <td><span class={p.status.css_class()}>{format!("{:?}", p.status)}</span></td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
