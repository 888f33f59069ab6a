pub mod app;
pub mod form;
pub mod notice;
pub mod loadable;
pub mod header;
pub mod login_screen;
pub mod register_screen;
pub mod membership_card;
pub mod payment_form;
pub mod payment_history;
pub mod profile_form;
pub mod member_dashboard;
pub mod overview_panel;
pub mod pending_payments_panel;
pub mod memberships_panel;
pub mod members_panel;
pub mod plans_panel;
pub mod transactions_panel;
pub mod managers_panel;
pub mod admin_dashboard;
pub mod manager_dashboard;

pub use app::{App, AppProps};
pub use notice::{Notice, NoticeKind};
pub use loadable::Loadable;
pub use header::Header;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use membership_card::MembershipCard;
pub use payment_form::PaymentForm;
pub use payment_history::PaymentHistory;
pub use profile_form::ProfileForm;
pub use member_dashboard::MemberDashboard;
pub use overview_panel::OverviewPanel;
pub use pending_payments_panel::PendingPaymentsPanel;
pub use memberships_panel::MembershipsPanel;
pub use members_panel::MembersPanel;
pub use plans_panel::PlansPanel;
pub use transactions_panel::{ApprovedTransactionsPanel, TransactionsPanel};
pub use managers_panel::ManagersPanel;
pub use admin_dashboard::AdminDashboard;
pub use manager_dashboard::ManagerDashboard;
