use yew::prelude::*;

use super::Loadable;
use crate::hooks::{use_api_client, use_remote};
use crate::models::{HealthStatus, Projections, SystemStats};
use crate::utils::{format_amount, format_datetime};

#[function_component(OverviewPanel)]
pub fn overview_panel() -> Html {
    let api = use_api_client();
    let stats = {
        let api = api.clone();
        use_remote(move || async move { api.stats().await })
    };
    let health = {
        let api = api.clone();
        use_remote(move || async move { api.health().await })
    };
    let projections = {
        let api = api.clone();
        use_remote(move || async move { api.projections().await })
    };

    let render_stats = Callback::from(|s: SystemStats| html! {
        <div class="stat-grid">
            <div class="stat"><span class="stat-value">{s.total_members.to_string()}</span><span>{"Members"}</span></div>
            <div class="stat"><span class="stat-value">{s.active_memberships.to_string()}</span><span>{"Active memberships"}</span></div>
            <div class="stat"><span class="stat-value">{s.total_plans.to_string()}</span><span>{"Plans on sale"}</span></div>
        </div>
    });

    let render_health = Callback::from(|h: HealthStatus| html! {
        <p class={classes!("api-health", h.is_healthy().then_some("healthy"))}>
            {format!("API {} (checked {})", h.status, format_datetime(h.timestamp))}
        </p>
    });

    let render_projections = Callback::from(|p: Projections| {
        let rows = [
            ("Pessimistic", &p.scenarios.pessimistic),
            ("Status quo", &p.scenarios.status_quo),
            ("Optimistic", &p.scenarios.optimistic),
        ];
        html! {
            <>
                <p>{format!("Expected from {} renewals in the next 30 days: {}", p.expiring_count, format_amount(p.next_month_expected))}</p>
                <p>{format!("Revenue over the last 30 days: {}", format_amount(p.last_month_actual))}</p>
                <table class="data-table">
                    <thead>
                        <tr><th>{"Scenario"}</th><th>{"Growth"}</th><th>{"Quarter"}</th><th>{"Year"}</th></tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|(label, s)| html! {
                            <tr>
                                <td>{*label}</td>
                                <td>{format!("{:+.0}%", s.growth_rate * 100.0)}</td>
                                <td>{format_amount(s.quarterly)}</td>
                                <td>{format_amount(s.annual)}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </>
        }
    });

    html! {
        <>
            <section class="card">
                <h2>{"Gym at a glance"}</h2>
                <Loadable<HealthStatus> state={(*health.state).clone()} render={render_health} />
                <Loadable<SystemStats> state={(*stats.state).clone()} render={render_stats} />
            </section>
            <section class="card">
                <h2>{"Projections"}</h2>
                <Loadable<Projections> state={(*projections.state).clone()} render={render_projections} />
            </section>
        </>
    }
}
