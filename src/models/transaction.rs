use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::payment::{PaymentMethod, PaymentStatus};

/// Row of the admin transaction report. The "all" report adds the contact
/// and approval columns.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Transaction {
    pub id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_phone: Option<String>,
    pub plan: String,
    pub amount: f64,
    pub txn_ref: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TransactionReport {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    pub count: usize,
}

impl TransactionReport {
    /// Server total when present, otherwise the sum of the listed rows
    pub fn revenue(&self) -> f64 {
        self.total_revenue
            .unwrap_or_else(|| self.transactions.iter().map(|t| t.amount).sum())
    }
}

/// Period selector of the admin transaction report
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransactionRange {
    #[default]
    Last30Days,
    ThisMonth,
    LastMonth,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TransactionRange {
    pub fn as_query(&self) -> Vec<(&'static str, String)> {
        match self {
            TransactionRange::Last30Days => vec![("filter", "last_30_days".to_string())],
            TransactionRange::ThisMonth => vec![("filter", "this_month".to_string())],
            TransactionRange::LastMonth => vec![("filter", "last_month".to_string())],
            TransactionRange::Custom { start, end } => vec![
                ("filter", "custom".to_string()),
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
            ],
        }
    }

    /// Inclusive date window the server applies for this range
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match *self {
            TransactionRange::Last30Days => (today - Duration::days(30), today),
            TransactionRange::ThisMonth => (first_of_month(today), today),
            TransactionRange::LastMonth => {
                let last_month_end = first_of_month(today) - Duration::days(1);
                (first_of_month(last_month_end), last_month_end)
            }
            TransactionRange::Custom { start, end } => (start, end),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionRange::Last30Days => "Last 30 days",
            TransactionRange::ThisMonth => "This month",
            TransactionRange::LastMonth => "Last month",
            TransactionRange::Custom { .. } => "Custom",
        }
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Optional date window of the approved-transactions listing
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn as_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_month_crosses_year_boundary() {
        let (start, end) = TransactionRange::LastMonth.bounds(date(2024, 1, 15));
        assert_eq!(start, date(2023, 12, 1));
        assert_eq!(end, date(2023, 12, 31));
    }

    #[test]
    fn last_month_handles_leap_february() {
        let (start, end) = TransactionRange::LastMonth.bounds(date(2024, 3, 5));
        assert_eq!((start, end), (date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn this_month_and_rolling_windows() {
        let today = date(2024, 6, 18);
        assert_eq!(TransactionRange::ThisMonth.bounds(today), (date(2024, 6, 1), today));
        assert_eq!(TransactionRange::Last30Days.bounds(today), (date(2024, 5, 19), today));
    }

    #[test]
    fn custom_range_query() {
        let range = TransactionRange::Custom { start: date(2024, 1, 1), end: date(2024, 1, 31) };
        assert_eq!(
            range.as_query(),
            vec![
                ("filter", "custom".to_string()),
                ("start_date", "2024-01-01".to_string()),
                ("end_date", "2024-01-31".to_string()),
            ]
        );
    }

    #[test]
    fn empty_window_sends_no_params() {
        assert!(DateWindow::default().as_query().is_empty());
        let window = DateWindow { start: None, end: Some(date(2024, 2, 1)) };
        assert_eq!(window.as_query(), vec![("end_date", "2024-02-01".to_string())]);
    }

    #[test]
    fn revenue_falls_back_to_row_sum() {
        let body = r#"{"transactions": [
            {"id": 1, "user_name": "A - 1", "plan": "Monthly", "amount": 1000.0, "txn_ref": null, "payment_method": "Cash", "date": "2024-01-02T10:00:00"},
            {"id": 2, "user_name": "B - 2", "plan": "Monthly", "amount": 500.5, "txn_ref": "123456789012", "payment_method": "UPI", "date": "2024-01-03T10:00:00"}
        ], "count": 2}"#;
        let report: TransactionReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.revenue(), 1500.5);
    }
}
