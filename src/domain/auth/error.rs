use serde::Serialize;
use thiserror::Error;

use crate::domain::DomainError;

/// Machine-readable reason for a rejected login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorCode {
    UserInvalidUsername,
    UserAccountDisabled,
    UserInvalidPassword,
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserInvalidUsername => "USER_INVALID_USERNAME",
            Self::UserAccountDisabled => "USER_ACCOUNT_DISABLED",
            Self::UserInvalidPassword => "USER_INVALID_PASSWORD",
        }
    }
}

impl std::fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication failures
///
/// The first three variants are policy rejections and carry a code.
/// `Infrastructure` passes directory or signing faults through as they were
/// raised.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username")]
    InvalidUsername,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Invalid password")]
    InvalidPassword,

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl AuthError {
    pub fn code(&self) -> Option<AuthErrorCode> {
        match self {
            Self::InvalidUsername => Some(AuthErrorCode::UserInvalidUsername),
            Self::AccountDisabled => Some(AuthErrorCode::UserAccountDisabled),
            Self::InvalidPassword => Some(AuthErrorCode::UserInvalidPassword),
            Self::Infrastructure(_) => None,
        }
    }
}
