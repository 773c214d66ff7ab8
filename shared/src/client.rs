//! Auth request/response types and the signed-in user's role

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

/// Login / register response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub user_type: UserType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Minimum password length accepted before calling the backend
pub const MIN_PASSWORD_LEN: usize = 6;

/// Role of the signed-in user
///
/// Unknown strings from the backend fall back to `Staff`, the least
/// privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl From<String> for UserType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<UserType> for String {
    fn from(value: UserType) -> Self {
        value.as_str().to_string()
    }
}

/// Dashboard pages gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Products,
    Customers,
    Sellers,
    Billing,
    Parcels,
    BookPo,
    Sales,
    Returns,
    Expenses,
    Income,
    AdminManagement,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Manager => "manager",
            UserType::Staff => "staff",
        }
    }

    /// Parse the persisted string; anything unrecognised is `Staff`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => UserType::Admin,
            "manager" => UserType::Manager,
            _ => UserType::Staff,
        }
    }

    pub fn can_access(&self, page: Page) -> bool {
        match page {
            Page::AdminManagement => matches!(self, UserType::Admin),
            Page::Dashboard | Page::Sellers | Page::Expenses | Page::Income => {
                matches!(self, UserType::Admin | UserType::Manager)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_type_is_staff() {
        let user: UserInfo = serde_json::from_str(
            r#"{"_id":"u1","name":"Ayesha","email":"a@mart.pk","userType":"superuser"}"#,
        )
        .unwrap();
        assert_eq!(user.user_type, UserType::Staff);
        assert_eq!(UserType::parse(" Admin "), UserType::Admin);
        assert_eq!(UserType::parse(""), UserType::Staff);
    }

    #[test]
    fn test_page_gating() {
        assert!(UserType::Admin.can_access(Page::AdminManagement));
        assert!(!UserType::Manager.can_access(Page::AdminManagement));
        assert!(UserType::Manager.can_access(Page::Expenses));
        assert!(!UserType::Staff.can_access(Page::Dashboard));
        assert!(UserType::Staff.can_access(Page::Parcels));
    }
}
