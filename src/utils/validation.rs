// ============================================================================
// FORM VALIDATION - same rules the API enforces, checked before sending
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{
    AdminUserUpdate, InitAdminRequest, PaymentMethod, PaymentSubmission, Plan, PlanDraft, Profile, ProfileUpdate,
    RegisterRequest,
};

pub const PHONE_DIGITS: usize = 10;
pub const UTR_DIGITS: usize = 12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("UTR must be exactly 12 digits")]
    InvalidUtr,
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Price must be a positive amount")]
    InvalidPrice,
    #[error("Duration must be a positive number of days")]
    InvalidDuration,
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Trimmed phone number, exactly ten digits
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let phone = raw.trim();
    if is_digits(phone, PHONE_DIGITS) {
        Ok(phone.to_string())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Trimmed UPI transaction reference, exactly twelve digits
pub fn validate_utr(raw: &str) -> Result<String, ValidationError> {
    let utr = raw.trim();
    if is_digits(utr, UTR_DIGITS) {
        Ok(utr.to_string())
    } else {
        Err(ValidationError::InvalidUtr)
    }
}

/// `YYYY-MM-DD`; a blank input means "not provided"
pub fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate)
}

pub fn require(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Raw registration form fields
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub gender: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = require("Name", &self.name)?;
        let phone = validate_phone(&self.phone)?;
        let email = require("Email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        Ok(RegisterRequest {
            name,
            phone,
            email,
            password: self.password.clone(),
            date_of_birth: parse_optional_date(&self.date_of_birth)?,
            gender: non_blank(&self.gender),
        })
    }

    /// First admin account; date of birth and gender are not asked for
    pub fn validate_admin(&self) -> Result<InitAdminRequest, ValidationError> {
        let name = require("Name", &self.name)?;
        let phone = validate_phone(&self.phone)?;
        let email = require("Email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        Ok(InitAdminRequest {
            name,
            phone,
            email,
            password: self.password.clone(),
        })
    }
}

/// Payment for `plan`. UPI needs a UTR, cash never sends one.
pub fn build_payment(
    plan: &Plan,
    method: PaymentMethod,
    utr: &str,
    notes: &str,
) -> Result<PaymentSubmission, ValidationError> {
    let txn_ref = match method {
        PaymentMethod::Upi => Some(validate_utr(utr)?),
        PaymentMethod::Cash => None,
    };

    Ok(PaymentSubmission {
        plan_id: plan.id,
        amount: plan.price,
        payment_method: method,
        txn_ref,
        notes: non_blank(notes),
    })
}

pub fn build_plan_draft(name: &str, price: &str, duration_days: &str) -> Result<PlanDraft, ValidationError> {
    let name = require("Plan name", name)?;
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(ValidationError::InvalidPrice)?;
    let duration_days = duration_days
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|d| *d > 0)
        .ok_or(ValidationError::InvalidDuration)?;

    Ok(PlanDraft { name, price, duration_days })
}

/// Only the fields that differ from `current`. A blank password keeps the old one.
pub fn profile_changes(
    current: &Profile,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<ProfileUpdate, ValidationError> {
    let name = require("Name", name)?;
    let email = require("Email", email)?;
    let phone = validate_phone(phone)?;

    Ok(ProfileUpdate {
        name: (name != current.name).then_some(name),
        email: (email != current.email).then_some(email),
        phone: (phone != current.phone).then_some(phone),
        password: (!password.is_empty()).then(|| password.to_string()),
    })
}

/// Admin password reset; an empty field is rejected instead of sending a no-op
pub fn password_reset(raw: &str) -> Result<AdminUserUpdate, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Required("New password"));
    }
    Ok(AdminUserUpdate {
        password: Some(raw.to_string()),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly() -> Plan {
        Plan {
            id: 4,
            name: "Monthly".into(),
            price: 1200.0,
            duration_days: 30,
            is_active: true,
        }
    }

    #[test]
    fn phone_must_be_ten_digits() {
        assert_eq!(validate_phone(" 9876543210 "), Ok("9876543210".to_string()));
        assert_eq!(validate_phone("987654321"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("98765432100"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("98765-4321"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("९८७६५४३२१०"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn upi_requires_twelve_digit_utr() {
        let err = build_payment(&monthly(), PaymentMethod::Upi, "12345", "").unwrap_err();
        assert_eq!(err.to_string(), "UTR must be exactly 12 digits");

        let payment = build_payment(&monthly(), PaymentMethod::Upi, "123456789012", " paid via gpay ").unwrap();
        assert_eq!(payment.txn_ref.as_deref(), Some("123456789012"));
        assert_eq!(payment.amount, 1200.0);
        assert_eq!(payment.notes.as_deref(), Some("paid via gpay"));
    }

    #[test]
    fn cash_ignores_utr() {
        let payment = build_payment(&monthly(), PaymentMethod::Cash, "garbage", "").unwrap();
        assert_eq!(payment.txn_ref, None);
        assert_eq!(payment.notes, None);
    }

    #[test]
    fn registration_form_validation() {
        let mut form = RegistrationForm {
            name: "Asha".into(),
            phone: "9123456789".into(),
            email: "asha@example.com".into(),
            password: "pw".into(),
            date_of_birth: "1995-08-21".into(),
            gender: "".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.date_of_birth, NaiveDate::from_ymd_opt(1995, 8, 21));
        assert_eq!(request.gender, None);

        form.date_of_birth = "21/08/1995".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidDate));

        form.name = "  ".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("Name")));
    }

    #[test]
    fn admin_setup_validation() {
        let form = RegistrationForm {
            name: " Owner ".into(),
            phone: "9000000000".into(),
            email: "owner@example.com".into(),
            password: "pw".into(),
            date_of_birth: "not a date".into(),
            ..Default::default()
        };
        let request = form.validate_admin().unwrap();
        assert_eq!(request.name, "Owner");
        assert_eq!(request.phone, "9000000000");

        let no_password = RegistrationForm { password: String::new(), ..form.clone() };
        assert_eq!(no_password.validate_admin(), Err(ValidationError::Required("Password")));

        let bad_phone = RegistrationForm { phone: "12345".into(), ..form };
        assert_eq!(bad_phone.validate_admin(), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn plan_draft_rejects_non_positive_values() {
        assert_eq!(
            build_plan_draft("Quarterly", "3000", "90"),
            Ok(PlanDraft { name: "Quarterly".into(), price: 3000.0, duration_days: 90 })
        );
        assert_eq!(build_plan_draft("Quarterly", "0", "90"), Err(ValidationError::InvalidPrice));
        assert_eq!(build_plan_draft("Quarterly", "3000", "-1"), Err(ValidationError::InvalidDuration));
        assert_eq!(build_plan_draft("", "3000", "90"), Err(ValidationError::Required("Plan name")));
    }

    #[test]
    fn profile_changes_only_sends_edits() {
        let current: Profile = serde_json::from_str(
            r#"{"id": 1, "name": "Asha", "email": "asha@example.com", "phone": "9123456789",
                "date_of_birth": null, "gender": null, "membership": null}"#,
        )
        .unwrap();

        let unchanged = profile_changes(&current, "Asha", "asha@example.com", "9123456789", "").unwrap();
        assert!(unchanged.is_empty());

        let update = profile_changes(&current, "Asha R", "asha@example.com", " 9000000001 ", "new-pass").unwrap();
        assert_eq!(update.name.as_deref(), Some("Asha R"));
        assert_eq!(update.email, None);
        assert_eq!(update.phone.as_deref(), Some("9000000001"));
        assert_eq!(update.password.as_deref(), Some("new-pass"));

        assert_eq!(
            profile_changes(&current, "Asha", "asha@example.com", "12", ""),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn password_reset_needs_a_value() {
        assert_eq!(password_reset(""), Err(ValidationError::Required("New password")));

        let update = password_reset("s3cret").unwrap();
        assert_eq!(update.password.as_deref(), Some("s3cret"));
        assert_eq!(update.active, None);
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"password":"s3cret"}"#);
    }
}
