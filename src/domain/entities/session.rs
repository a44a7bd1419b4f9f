use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::utils::form_fields::non_blank;

/// Bearer token issued by the content store's auth service.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// User record returned by the auth service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful password sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: AccessToken,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
    pub user: AuthUser,
}

fn default_expires_in() -> i64 {
    3600
}

/// The signed-in admin for the current request.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub token: AccessToken,
}

impl SessionUser {
    pub fn new(user: AuthUser, token: AccessToken) -> Self {
        SessionUser {
            id: user.id,
            email: user.email,
            token,
        }
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "non_blank", message = "Password cannot be empty"))]
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of the password grant request.
#[derive(Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
