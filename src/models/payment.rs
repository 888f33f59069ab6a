use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "UPI")]
    Upi,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cash => "Cash",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown payment method `{0}`")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPI" => Ok(PaymentMethod::Upi),
            "Cash" => Ok(PaymentMethod::Cash),
            other => Err(UnknownPaymentMethod(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl PaymentStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "payment-pending",
            PaymentStatus::Approved => "payment-approved",
            PaymentStatus::Rejected => "payment-rejected",
        }
    }
}

/// Member payment awaiting admin approval. Cash payments carry no UTR.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentSubmission {
    pub plan_id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SubmittedPayment {
    pub message: String,
    pub payment_id: i64,
}

/// Entry of the member's own payment history
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentRecord {
    pub id: i64,
    pub amount: f64,
    pub plan: String,
    pub payment_method: PaymentMethod,
    pub txn_ref: Option<String>,
    pub status: PaymentStatus,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PendingPayment {
    pub id: i64,
    pub user_name: String,
    pub user_id: i64,
    pub plan: String,
    pub amount: f64,
    pub txn_ref: Option<String>,
    pub payment_method: PaymentMethod,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
}

/// Window of the membership created by an approval or renewal
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MembershipWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MembershipGranted {
    pub message: String,
    pub membership: MembershipWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_parses_wire_labels() {
        assert_eq!("UPI".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert_eq!("Cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert_eq!(
            "Card".parse::<PaymentMethod>(),
            Err(UnknownPaymentMethod("Card".to_string()))
        );
        for method in [PaymentMethod::Upi, PaymentMethod::Cash] {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn cash_submission_has_no_reference() {
        let submission = PaymentSubmission {
            plan_id: 2,
            amount: 3000.0,
            payment_method: PaymentMethod::Cash,
            txn_ref: None,
            notes: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["payment_method"], "Cash");
        assert!(json.get("txn_ref").is_none());
    }

    #[test]
    fn decodes_history_with_python_timestamps() {
        let body = r#"[{
            "id": 11, "amount": 1200.0, "plan": "Monthly", "payment_method": "UPI",
            "txn_ref": "123456789012", "status": "Pending",
            "date": "2024-03-10T08:15:30.123456", "notes": null
        }]"#;
        let history: Vec<PaymentRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(history[0].payment_method, PaymentMethod::Upi);
        assert_eq!(history[0].status, PaymentStatus::Pending);
        assert_eq!(history[0].date.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }
}
