use yew::prelude::*;

use super::form::node_value;
use super::Loadable;
use crate::hooks::{use_api_client, use_remote};
use crate::models::{DateWindow, TransactionRange, TransactionReport};
use crate::utils::validation::parse_optional_date;
use crate::utils::{format_amount, format_date, format_datetime, today};

fn report_table(report: &TransactionReport) -> Html {
    if report.transactions.is_empty() {
        return html! { <p class="empty">{"No transactions in this period."}</p> };
    }

    html! {
        <>
            <p class="report-total">
                {format!("{} transactions, {} total", report.count, format_amount(report.revenue()))}
            </p>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th><th>{"Member"}</th><th>{"Plan"}</th><th>{"Amount"}</th>
                        <th>{"Method"}</th><th>{"UTR"}</th><th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for report.transactions.iter().map(|t| html! {
                        <tr key={t.id}>
                            <td>{format_datetime(t.date)}</td>
                            <td>
                                {&t.user_name}
                                if let Some(email) = t.user_email.clone() {
                                    <div class="muted">{email}</div>
                                }
                            </td>
                            <td>{&t.plan}</td>
                            <td>{format_amount(t.amount)}</td>
                            <td>{t.payment_method.as_str()}</td>
                            <td>{t.txn_ref.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td>{t.status.map(|s| format!("{:?}", s)).unwrap_or_default()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}

/// Admin revenue report over a preset or custom period
#[function_component(TransactionsPanel)]
pub fn transactions_panel() -> Html {
    let api = use_api_client();
    let range = use_state(TransactionRange::default);
    let error = use_state(|| None::<String>);
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    let custom = use_state(|| false);

    let report = {
        let api = api.clone();
        let range = *range;
        use_remote(move || async move { api.transactions(&range).await })
    };

    let on_preset = {
        let range = range.clone();
        let custom = custom.clone();
        let reload = report.reload.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let preset = match select.value().as_str() {
                "this_month" => Some(TransactionRange::ThisMonth),
                "last_month" => Some(TransactionRange::LastMonth),
                "custom" => None,
                _ => Some(TransactionRange::Last30Days),
            };
            custom.set(preset.is_none());
            if let Some(preset) = preset {
                range.set(preset);
                reload.emit(());
            }
        })
    };

    let on_apply = {
        let range = range.clone();
        let error = error.clone();
        let reload = report.reload.clone();
        let refs = (start_ref.clone(), end_ref.clone());
        Callback::from(move |_| {
            let (start, end) = &refs;
            match (parse_optional_date(&node_value(start)), parse_optional_date(&node_value(end))) {
                (Ok(Some(start)), Ok(Some(end))) if start <= end => {
                    error.set(None);
                    range.set(TransactionRange::Custom { start, end });
                    reload.emit(());
                }
                (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
                _ => error.set(Some("Pick a start date on or before the end date".to_string())),
            }
        })
    };

    let (from, to) = range.bounds(today());

    html! {
        <section class="card">
            <h2>{"Transactions"}</h2>
            <div class="filters">
                <select onchange={on_preset}>
                    <option value="last_30_days" selected={*range == TransactionRange::Last30Days}>{"Last 30 days"}</option>
                    <option value="this_month" selected={*range == TransactionRange::ThisMonth}>{"This month"}</option>
                    <option value="last_month" selected={*range == TransactionRange::LastMonth}>{"Last month"}</option>
                    <option value="custom" selected={*custom}>{"Custom"}</option>
                </select>
                if *custom {
                    <input type="date" ref={start_ref} />
                    <input type="date" ref={end_ref} />
                    <button type="button" class="btn-secondary" onclick={on_apply}>{"Apply"}</button>
                }
                <span class="muted">{format!("{}: {} - {}", range.label(), format_date(from), format_date(to))}</span>
            </div>
            if let Some(message) = (*error).clone() {
                <div class="form-error">{message}</div>
            }
            <Loadable<TransactionReport>
                state={(*report.state).clone()}
                render={Callback::from(|r: TransactionReport| report_table(&r))}
            />
        </section>
    }
}

/// Approved payments, optionally bounded by dates (admins and managers)
#[function_component(ApprovedTransactionsPanel)]
pub fn approved_transactions_panel() -> Html {
    let api = use_api_client();
    let window = use_state(DateWindow::default);
    let error = use_state(|| None::<String>);
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();

    let report = {
        let api = api.clone();
        let window = *window;
        use_remote(move || async move { api.all_transactions(&window).await })
    };

    let on_filter = {
        let window = window.clone();
        let error = error.clone();
        let reload = report.reload.clone();
        let refs = (start_ref.clone(), end_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (start, end) = &refs;
            match (parse_optional_date(&node_value(start)), parse_optional_date(&node_value(end))) {
                (Ok(start), Ok(end)) => {
                    error.set(None);
                    window.set(DateWindow { start, end });
                    reload.emit(());
                }
                (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <section class="card">
            <h2>{"Approved payments"}</h2>
            <form class="filters" onsubmit={on_filter}>
                <label>{"From"}<input type="date" ref={start_ref} /></label>
                <label>{"To"}<input type="date" ref={end_ref} /></label>
                <button type="submit" class="btn-secondary">{"Filter"}</button>
            </form>
            if let Some(message) = (*error).clone() {
                <div class="form-error">{message}</div>
            }
            <Loadable<TransactionReport>
                state={(*report.state).clone()}
                render={Callback::from(|r: TransactionReport| report_table(&r))}
            />
        </section>
    }
}
