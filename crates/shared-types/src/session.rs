use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::string_or_number;
use crate::error::AppError;

/// The only role this portal serves.
pub const DOCTOR_ROLE: &str = "doctor";

/// An authenticated doctor's credential plus identity.
///
/// Either all three fields are present or there is no session at all; the
/// session store never hands out a partially filled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub role: String,
}

impl Session {
    /// Build a session, rejecting blank fields.
    pub fn new(
        access_token: impl Into<String>,
        user_id: impl Into<String>,
        role: impl Into<String>,
    ) -> Option<Self> {
        let session = Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
            role: role.into(),
        };
        session.is_complete().then_some(session)
    }

    pub fn is_complete(&self) -> bool {
        !self.access_token.trim().is_empty()
            && !self.user_id.trim().is_empty()
            && !self.role.trim().is_empty()
    }

    pub fn is_doctor(&self) -> bool {
        self.role == DOCTOR_ROLE
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "Please fill in all fields"),
        email(message = "Please enter a valid email address"),
        custom(function = "crate::validation::has_dotted_domain")
    )]
    pub login_id: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub password_or_otp: String,
}

/// Successful response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub role: String,
}

impl LoginResponse {
    /// Convert into a session; a response with blank fields is malformed.
    pub fn into_session(self) -> Result<Session, AppError> {
        Session::new(self.access_token, self.user_id, self.role)
            .ok_or_else(|| AppError::internal("Login response was missing credentials"))
    }
}
