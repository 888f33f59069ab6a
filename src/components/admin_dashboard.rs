use yew::prelude::*;

use super::{
    ApprovedTransactionsPanel, ManagersPanel, MembersPanel, MembershipsPanel, OverviewPanel, PendingPaymentsPanel,
    PlansPanel, TransactionsPanel,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AdminTab {
    Overview,
    Payments,
    Memberships,
    Members,
    Plans,
    Transactions,
    Managers,
}

impl AdminTab {
    pub const ALL: [AdminTab; 7] = [
        AdminTab::Overview,
        AdminTab::Payments,
        AdminTab::Memberships,
        AdminTab::Members,
        AdminTab::Plans,
        AdminTab::Transactions,
        AdminTab::Managers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Payments => "Payments",
            AdminTab::Memberships => "Memberships",
            AdminTab::Members => "Members",
            AdminTab::Plans => "Plans",
            AdminTab::Transactions => "Transactions",
            AdminTab::Managers => "Managers",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps<T: Copy + PartialEq + 'static> {
    pub tabs: Vec<(T, &'static str)>,
    pub active: T,
    pub on_select: Callback<T>,
}

#[function_component(TabBar)]
pub fn tab_bar<T: Copy + PartialEq + 'static>(props: &TabBarProps<T>) -> Html {
    html! {
        <nav class="tab-bar">
            { for props.tabs.iter().map(|(tab, label)| {
                let tab = *tab;
                html! {
                    <button
                        type="button"
                        class={classes!("tab", (tab == props.active).then_some("active"))}
                        onclick={props.on_select.reform(move |_| tab)}
                    >
                        {*label}
                    </button>
                }
            }) }
        </nav>
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let tab = use_state(|| AdminTab::Overview);

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |t: AdminTab| tab.set(t))
    };

    let content = match *tab {
        AdminTab::Overview => html! { <OverviewPanel /> },
        AdminTab::Payments => html! { <PendingPaymentsPanel /> },
        AdminTab::Memberships => html! { <MembershipsPanel /> },
        AdminTab::Members => html! { <MembersPanel can_edit=true /> },
        AdminTab::Plans => html! { <PlansPanel /> },
        AdminTab::Transactions => html! {
            <>
                <TransactionsPanel />
                <ApprovedTransactionsPanel />
            </>
        },
        AdminTab::Managers => html! { <ManagersPanel /> },
    };

    html! {
        <div class="admin-dashboard">
            <TabBar<AdminTab>
                tabs={AdminTab::ALL.iter().map(|t| (*t, t.label())).collect::<Vec<_>>()}
                active={*tab}
                {on_select}
            />
            {content}
        </div>
    }
}
