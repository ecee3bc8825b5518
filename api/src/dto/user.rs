use gym_core::domain::entities::user::{User, UserSummary};
use gym_core::domain::value_objects::AuthResponse;
use gym_core::services::{Credentials, NewUser};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Ten digits, no country code
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<SignupRequest> for NewUser {
    fn from(request: SignupRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<SigninRequest> for Credentials {
    fn from(request: SigninRequest) -> Self {
        Credentials {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePhoneRequest {
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    /// Older clients send the new password as `password`
    #[serde(alias = "password")]
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Body returned by signup, signin and token refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub message: String,
    pub user: UserSummary,
    pub token: String,
    pub refresh_token: String,
}

impl SessionResponse {
    pub fn new(message: impl Into<String>, auth: AuthResponse) -> Self {
        Self {
            message: message.into(),
            user: auth.user,
            token: auth.tokens.access_token,
            refresh_token: auth.tokens.refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.name,
            email: user.email,
            phone: user.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneUpdatedResponse {
    pub message: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_uses_camel_case() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "name": "Asha Rai",
            "email": "asha@example.com",
            "phoneNumber": "9876543210",
            "password": "secret1"
        }))
        .unwrap();
        assert_eq!(request.phone_number, "9876543210");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_change_password_accepts_alias() {
        let request: ChangePasswordRequest = serde_json::from_value(serde_json::json!({
            "currentPassword": "old-secret",
            "password": "new-secret"
        }))
        .unwrap();
        assert_eq!(request.new_password, "new-secret");
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let request = SigninRequest {
            email: String::new(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
