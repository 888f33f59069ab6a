use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Memberships ending within this many days count as expiring
pub const EXPIRING_WINDOW_DAYS: i64 = 7;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum MembershipStatus {
    Active,
    Expiring,
    Expired,
}

impl MembershipStatus {
    /// Status the server assigns for a membership ending on `end_date`
    pub fn for_end_date(end_date: NaiveDate, today: NaiveDate) -> Self {
        let days = days_remaining(end_date, today);
        if days < 0 {
            MembershipStatus::Expired
        } else if days <= EXPIRING_WINDOW_DAYS {
            MembershipStatus::Expiring
        } else {
            MembershipStatus::Active
        }
    }

    /// Server wording; "No Membership" and anything unknown are `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(MembershipStatus::Active),
            "Expiring" => Some(MembershipStatus::Expiring),
            "Expired" => Some(MembershipStatus::Expired),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "status-active",
            MembershipStatus::Expiring => "status-expiring",
            MembershipStatus::Expired => "status-expired",
        }
    }
}

/// Signed day count, negative once the end date has passed
pub fn days_remaining(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

pub fn is_expiring_soon(status: MembershipStatus, end_date: NaiveDate, today: NaiveDate) -> bool {
    if status == MembershipStatus::Expired {
        return false;
    }
    (0..=EXPIRING_WINDOW_DAYS).contains(&days_remaining(end_date, today))
}

/// Membership block of `/api/me` and `/api/profile`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MembershipSummary {
    pub active: bool,
    pub plan: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    /// "Active", "Expiring", "Expired" or "No Membership"
    pub status: String,
}

impl MembershipSummary {
    pub fn parsed_status(&self) -> Option<MembershipStatus> {
        MembershipStatus::parse(&self.status)
    }

    /// The server's status; recomputed from `end_date` only when the server
    /// sent none. `today` must be the server's (UTC) date.
    pub fn status_on(&self, today: NaiveDate) -> Option<MembershipStatus> {
        self.parsed_status()
            .or_else(|| self.end_date.map(|end| MembershipStatus::for_end_date(end, today)))
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MembershipRecord {
    pub id: i64,
    pub plan: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MembershipStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_boundaries() {
        let today = date(2024, 3, 10);
        assert_eq!(MembershipStatus::for_end_date(date(2024, 3, 9), today), MembershipStatus::Expired);
        assert_eq!(MembershipStatus::for_end_date(today, today), MembershipStatus::Expiring);
        assert_eq!(MembershipStatus::for_end_date(date(2024, 3, 17), today), MembershipStatus::Expiring);
        assert_eq!(MembershipStatus::for_end_date(date(2024, 3, 18), today), MembershipStatus::Active);
    }

    #[test]
    fn expired_is_never_expiring_soon() {
        let today = date(2024, 3, 10);
        assert!(!is_expiring_soon(MembershipStatus::Expired, date(2024, 3, 12), today));
        assert!(is_expiring_soon(MembershipStatus::Active, date(2024, 3, 12), today));
        assert!(!is_expiring_soon(MembershipStatus::Active, date(2024, 3, 9), today));
        assert!(!is_expiring_soon(MembershipStatus::Active, date(2024, 4, 1), today));
    }

    #[test]
    fn decodes_membership_without_plan() {
        let body = r#"{"active": false, "plan": null, "end_date": null, "days_remaining": null, "status": "No Membership"}"#;
        let summary: MembershipSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.parsed_status(), None);
        assert_eq!(summary.status_on(date(2024, 1, 1)), None);
    }

    #[test]
    fn server_status_wins_over_a_later_client_date() {
        // Client already on the next day while the server still counts the last day
        let body = r#"{"active": true, "plan": "Monthly", "end_date": "2024-03-10", "days_remaining": 0, "status": "Expiring"}"#;
        let summary: MembershipSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.status_on(date(2024, 3, 11)), Some(MembershipStatus::Expiring));
    }

    #[test]
    fn end_date_decides_when_server_sends_no_status() {
        let body = r#"{"active": true, "plan": "Monthly", "end_date": "2024-03-12", "days_remaining": 2, "status": ""}"#;
        let summary: MembershipSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.status_on(date(2024, 3, 10)), Some(MembershipStatus::Expiring));
        assert_eq!(summary.status_on(date(2024, 3, 13)), Some(MembershipStatus::Expired));
    }
}
