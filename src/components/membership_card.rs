use yew::prelude::*;

use crate::models::membership::MembershipStatus;
use crate::models::Profile;
use crate::utils::{format_date, utc_today};

#[derive(Properties, PartialEq)]
pub struct MembershipCardProps {
    pub profile: Profile,
}

#[function_component(MembershipCard)]
pub fn membership_card(props: &MembershipCardProps) -> Html {
    let Some(membership) = props.profile.membership.as_ref() else {
        return html! {
            <section class="card membership-card status-none">
                <h2>{format!("Hi, {}", props.profile.name)}</h2>
                <p>{"No active membership. Pick a plan below to get started."}</p>
            </section>
        };
    };

    let status = membership.status_on(utc_today());
    let (badge, class) = match status {
        Some(MembershipStatus::Active) => ("Active", MembershipStatus::Active.css_class()),
        Some(MembershipStatus::Expiring) => ("Expiring soon", MembershipStatus::Expiring.css_class()),
        Some(MembershipStatus::Expired) => ("Expired", MembershipStatus::Expired.css_class()),
        None => ("No membership", "status-none"),
    };

    let days = match membership.days_remaining {
        Some(d) if d > 0 => format!("{} days remaining", d),
        Some(0) => "Ends today".to_string(),
        Some(d) => format!("Expired {} days ago", -d),
        None => String::new(),
    };

    html! {
        <section class={classes!("card", "membership-card", class)}>
            <h2>{format!("Hi, {}", props.profile.name)}</h2>
            <div class="membership-row">
                <span class="plan-name">{membership.plan.clone().unwrap_or_default()}</span>
                <span class="status-badge">{badge}</span>
            </div>
            if let Some(end) = membership.end_date {
                <p class="end-date">{format!("Valid until {}", format_date(end))}</p>
            }
            <p class="days-remaining">{days}</p>
        </section>
    }
}
