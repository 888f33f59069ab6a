use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::auth::Role;
use super::membership::MembershipSummary;

/// `/api/me` and `/api/profile`. Only `/api/me` carries the role flags.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub role: Option<Role>,
    pub membership: Option<MembershipSummary>,
}

impl Profile {
    pub fn effective_role(&self) -> Role {
        self.role
            .unwrap_or_else(|| Role::from_flags(self.is_admin, self.is_manager))
    }
}

/// Self-service edits. Absent fields are left untouched server-side.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.password.is_none()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_without_flags_is_member() {
        let body = r#"{
            "id": 3, "name": "Asha", "email": "asha@example.com", "phone": "9123456789",
            "date_of_birth": "1995-08-21", "gender": "Female", "membership": null
        }"#;
        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.effective_role(), Role::Member);
        assert_eq!(profile.date_of_birth, NaiveDate::from_ymd_opt(1995, 8, 21));
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = ProfileUpdate {
            phone: Some("9000000001".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"phone":"9000000001"}"#);
        assert!(ProfileUpdate::default().is_empty());
    }
}
