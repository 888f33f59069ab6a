pub mod auth;
pub mod profile;
pub mod membership;
pub mod plan;
pub mod payment;
pub mod transaction;
pub mod admin;

pub use auth::{CreatedUserResponse, InitAdminRequest, LoginRequest, LoginResponse, RegisterRequest, Role, Session, SessionUser};
pub use profile::{MessageResponse, Profile, ProfileUpdate};
pub use membership::{MembershipRecord, MembershipStatus, MembershipSummary};
pub use plan::{CreatedPlanResponse, Plan, PlanDraft, PlanUpdate};
pub use payment::{
    MembershipGranted, PaymentMethod, PaymentRecord, PaymentStatus, PaymentSubmission, PendingPayment, SubmittedPayment,
    UnknownPaymentMethod,
};
pub use transaction::{DateWindow, Transaction, TransactionRange, TransactionReport};
pub use admin::{
    AdminUserUpdate, ExpiredMember, HealthStatus, ManagerSummary, MemberFilters, MemberList, MemberSummary,
    PriorityEntry, Projections, RenewalRequest, SystemStats, UserDetails,
};
