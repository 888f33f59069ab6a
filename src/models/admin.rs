use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::membership::{is_expiring_soon, MembershipRecord, MembershipStatus, MembershipSummary};
use super::payment::PaymentRecord;

// ----------------------------------------------------------------------------
// Members
// ----------------------------------------------------------------------------

/// Filters of the member search. Blank fields are not sent.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MemberFilters {
    pub search: String,
    pub gender: String,
    pub plan: String,
    pub dob_from: Option<NaiveDate>,
    pub dob_to: Option<NaiveDate>,
}

impl MemberFilters {
    pub fn as_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for (key, value) in [("search", &self.search), ("gender", &self.gender), ("plan", &self.plan)] {
            let value = value.trim();
            if !value.is_empty() {
                params.push((key, value.to_string()));
            }
        }
        if let Some(from) = self.dob_from {
            params.push(("dob_from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.dob_to {
            params.push(("dob_to", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MemberSummary {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    /// Plan name or "No Plan"
    pub current_plan: String,
    pub membership_status: String,
    pub end_date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl MemberSummary {
    /// Ends within the renewal window and has not lapsed yet
    pub fn is_expiring_soon_on(&self, today: NaiveDate) -> bool {
        match (MembershipStatus::parse(&self.membership_status), self.end_date) {
            (Some(status), Some(end)) => is_expiring_soon(status, end, today),
            _ => false,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MemberList {
    pub members: Vec<MemberSummary>,
    pub count: usize,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserDetails {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub roles: Vec<String>,
    pub current_membership: Option<MembershipSummary>,
    pub memberships_history: Vec<MembershipRecord>,
    pub payments_history: Vec<PaymentRecord>,
}

/// Admin edit of any account. Absent fields are left untouched.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ManagerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

// ----------------------------------------------------------------------------
// Memberships
// ----------------------------------------------------------------------------

/// Member whose membership ends within the next week
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PriorityEntry {
    pub id: i64,
    pub user_name: String,
    pub user_id: i64,
    pub phone: String,
    pub plan: String,
    pub end_date: NaiveDate,
    pub days_remaining: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ExpiredMember {
    pub user_id: i64,
    pub user_name: String,
    pub phone: String,
    pub last_plan: String,
    pub expired_on: NaiveDate,
    pub days_expired: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RenewalRequest {
    pub plan_id: i64,
}

// ----------------------------------------------------------------------------
// Reporting
// ----------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Scenario {
    pub growth_rate: f64,
    pub quarterly: f64,
    pub annual: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Scenarios {
    pub pessimistic: Scenario,
    pub status_quo: Scenario,
    pub optimistic: Scenario,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Projections {
    pub next_month_expected: f64,
    pub expiring_count: usize,
    pub last_month_actual: f64,
    pub monthly_average: f64,
    pub scenarios: Scenarios,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SystemStats {
    pub total_members: usize,
    pub active_memberships: usize,
    pub total_plans: usize,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: NaiveDateTime,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_skipped() {
        let filters = MemberFilters {
            search: "  ravi ".into(),
            gender: "".into(),
            plan: "   ".into(),
            dob_from: NaiveDate::from_ymd_opt(1990, 1, 1),
            dob_to: None,
        };
        assert_eq!(
            filters.as_query(),
            vec![
                ("search", "ravi".to_string()),
                ("dob_from", "1990-01-01".to_string()),
            ]
        );
        assert!(MemberFilters::default().as_query().is_empty());
    }

    #[test]
    fn decodes_projections() {
        let body = r#"{
            "next_month_expected": 4800.0, "expiring_count": 4,
            "last_month_actual": 10000.0, "monthly_average": 10000.0,
            "scenarios": {
                "pessimistic": {"growth_rate": -0.05, "quarterly": 28500.0, "annual": 114000.0},
                "status_quo": {"growth_rate": 0.0, "quarterly": 30000.0, "annual": 120000.0},
                "optimistic": {"growth_rate": 0.1, "quarterly": 33000.0, "annual": 132000.0}
            }
        }"#;
        let projections: Projections = serde_json::from_str(body).unwrap();
        assert_eq!(projections.expiring_count, 4);
        assert_eq!(projections.scenarios.optimistic.annual, 132000.0);
    }

    #[test]
    fn decodes_user_details_with_history() {
        let body = r#"{
            "id": 5, "name": "Ravi", "email": "ravi@example.com", "phone": "9876543210",
            "date_of_birth": null, "gender": "Male", "active": true,
            "created_at": "2024-01-01T09:00:00", "roles": ["member"],
            "current_membership": {"active": true, "plan": "Monthly", "start_date": "2024-03-01",
                "end_date": "2024-03-31", "days_remaining": 12, "status": "Active"},
            "memberships_history": [{"id": 1, "plan": "Monthly", "start_date": "2024-03-01",
                "end_date": "2024-03-31", "status": "Active"}],
            "payments_history": [{"id": 9, "amount": 1200.0, "plan": "Monthly", "payment_method": "Cash",
                "txn_ref": null, "status": "Approved", "date": "2024-03-01T10:00:00"}]
        }"#;
        let details: UserDetails = serde_json::from_str(body).unwrap();
        assert_eq!(details.roles, vec!["member".to_string()]);
        assert_eq!(details.memberships_history.len(), 1);
        assert_eq!(details.payments_history[0].notes, None);
    }

    #[test]
    fn member_row_flags_memberships_ending_this_week() {
        let member = |status: &str, end: Option<&str>| -> MemberSummary {
            serde_json::from_value(serde_json::json!({
                "id": 1, "name": "Ravi", "display_name": "Ravi - 9876543210",
                "email": "ravi@example.com", "phone": "9876543210",
                "date_of_birth": null, "gender": null, "current_plan": "Monthly",
                "membership_status": status, "end_date": end, "days_remaining": null,
                "created_at": "2024-01-01T09:00:00"
            }))
            .unwrap()
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        assert!(member("Active", Some("2024-03-15")).is_expiring_soon_on(today));
        assert!(!member("Active", Some("2024-04-15")).is_expiring_soon_on(today));
        assert!(!member("Expired", Some("2024-03-15")).is_expiring_soon_on(today));
        assert!(!member("No Membership", None).is_expiring_soon_on(today));
    }

    #[test]
    fn decodes_health_timestamp_with_fraction() {
        let body = r#"{"status": "healthy", "timestamp": "2024-03-10T08:15:30.123456"}"#;
        let health: HealthStatus = serde_json::from_str(body).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.timestamp.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }
}
