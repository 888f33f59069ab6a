use yew::prelude::*;

use super::{Loadable, MembershipCard, Notice, NoticeKind, PaymentForm, PaymentHistory, ProfileForm};
use crate::hooks::{use_api_client, use_remote};
use crate::models::{PaymentRecord, Plan, Profile};

/// Home of a member: membership, renewal payment, history, profile
#[function_component(MemberDashboard)]
pub fn member_dashboard() -> Html {
    let api = use_api_client();
    let flash = use_state(|| None::<(NoticeKind, String)>);

    let profile = {
        let api = api.clone();
        use_remote(move || async move { api.profile().await })
    };
    let plans = {
        let api = api.clone();
        use_remote(move || async move { api.plans().await })
    };
    let history = {
        let api = api.clone();
        use_remote(move || async move { api.payment_history().await })
    };

    let on_payment_submitted = {
        let flash = flash.clone();
        let reload_history = history.reload.clone();
        Callback::from(move |message: String| {
            flash.set(Some((NoticeKind::Success, message)));
            reload_history.emit(());
        })
    };

    let on_profile_saved = {
        let flash = flash.clone();
        let reload_profile = profile.reload.clone();
        Callback::from(move |message: String| {
            flash.set(Some((NoticeKind::Success, message)));
            reload_profile.emit(());
        })
    };

    html! {
        <div class="member-dashboard">
            if let Some((kind, message)) = (*flash).clone() {
                <Notice {kind} {message} />
            }

            <Loadable<Profile>
                state={(*profile.state).clone()}
                render={Callback::from(|p: Profile| html! { <MembershipCard profile={p} /> })}
            />

            <section class="card">
                <h2>{"Renew or buy a plan"}</h2>
                <Loadable<Vec<Plan>>
                    state={(*plans.state).clone()}
                    render={Callback::from(move |plans: Vec<Plan>| html! {
                        <PaymentForm {plans} on_submitted={on_payment_submitted.clone()} />
                    })}
                />
            </section>

            <section class="card">
                <h2>{"Payment history"}</h2>
                <Loadable<Vec<PaymentRecord>>
                    state={(*history.state).clone()}
                    render={Callback::from(|records: Vec<PaymentRecord>| html! { <PaymentHistory {records} /> })}
                />
            </section>

            <section class="card">
                <h2>{"My profile"}</h2>
                <Loadable<Profile>
                    state={(*profile.state).clone()}
                    render={Callback::from(move |p: Profile| html! {
                        <ProfileForm profile={p} on_saved={on_profile_saved.clone()} />
                    })}
                />
            </section>
        </div>
    }
}
