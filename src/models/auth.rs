use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    /// Admin wins over manager, anything else is a member
    pub fn from_flags(is_admin: bool, is_manager: bool) -> Self {
        if is_admin {
            Role::Admin
        } else if is_manager {
            Role::Manager
        } else {
            Role::Member
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Member => "Member",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User as returned by `/api/login` and stored with the session
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionUser {
    pub id: i64,
    /// "Name - phone"
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_manager: bool,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Body of `/api/init-admin`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct InitAdminRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatedUserResponse {
    pub message: String,
    pub user: CreatedUser,
}

/// Persisted in localStorage between page loads
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_takes_precedence() {
        assert_eq!(Role::from_flags(true, true), Role::Admin);
        assert_eq!(Role::from_flags(false, true), Role::Manager);
        assert_eq!(Role::from_flags(false, false), Role::Member);
    }

    #[test]
    fn decodes_login_response() {
        let body = r#"{
            "token": "abc.def",
            "user": {
                "id": 7,
                "name": "Ravi Kumar - 9876543210",
                "email": "ravi@example.com",
                "phone": "9876543210",
                "is_admin": false,
                "is_manager": true,
                "role": "manager"
            }
        }"#;

        let session: Session = serde_json::from_str::<LoginResponse>(body).unwrap().into();
        assert_eq!(session.token, "abc.def");
        assert_eq!(session.role(), Role::Manager);
    }

    #[test]
    fn register_request_omits_missing_optionals() {
        let request = RegisterRequest {
            name: "Asha".into(),
            phone: "9123456789".into(),
            email: "asha@example.com".into(),
            password: "secret".into(),
            date_of_birth: None,
            gender: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("date_of_birth").is_none());
        assert!(json.get("gender").is_none());
    }
}
