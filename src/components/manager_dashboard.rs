use yew::prelude::*;

use super::admin_dashboard::TabBar;
use super::{ApprovedTransactionsPanel, MembersPanel};

#[derive(Clone, Copy, PartialEq, Debug)]
enum ManagerTab {
    Members,
    Transactions,
}

/// Read-only member lookup and approved payments
#[function_component(ManagerDashboard)]
pub fn manager_dashboard() -> Html {
    let tab = use_state(|| ManagerTab::Members);

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |t: ManagerTab| tab.set(t))
    };

    html! {
        <div class="manager-dashboard">
            <TabBar<ManagerTab>
                tabs={vec![(ManagerTab::Members, "Members"), (ManagerTab::Transactions, "Transactions")]}
                active={*tab}
                {on_select}
            />
            {
                match *tab {
                    ManagerTab::Members => html! { <MembersPanel /> },
                    ManagerTab::Transactions => html! { <ApprovedTransactionsPanel /> },
                }
            }
        </div>
    }
}
