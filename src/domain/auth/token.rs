//! Issued token value and its builder

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Token material with its validity window and owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl TokenDetails {
    pub fn builder() -> TokenDetailsBuilder {
        TokenDetailsBuilder::new()
    }

    /// Start a builder pre-filled with this value, for deriving a modified copy
    pub fn to_builder(&self) -> TokenDetailsBuilder {
        TokenDetailsBuilder {
            user_id: self.user_id,
            token: Some(self.token.clone()),
            issued_at: Some(self.issued_at),
            expires_at: Some(self.expires_at),
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Builder for TokenDetails
#[derive(Debug, Default)]
pub struct TokenDetailsBuilder {
    user_id: Option<UserId>,
    token: Option<String>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl TokenDetailsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Fails when the token or either instant is missing
    pub fn build(self) -> Result<TokenDetails, DomainError> {
        let token = self
            .token
            .ok_or_else(|| DomainError::validation("Token details require a token"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| DomainError::validation("Token details require issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| DomainError::validation("Token details require expires_at"))?;

        Ok(TokenDetails {
            user_id: self.user_id,
            token,
            issued_at,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> TokenDetails {
        let now = Utc::now();
        TokenDetails::builder()
            .token("header.payload.signature")
            .issued_at(now)
            .expires_at(now + Duration::seconds(60))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_without_user_id() {
        let details = sample();

        assert_eq!(details.token(), "header.payload.signature");
        assert!(details.user_id().is_none());
        assert_eq!(
            details.expires_at() - details.issued_at(),
            Duration::seconds(60)
        );
    }

    #[test]
    fn test_to_builder_attaches_user_id_without_touching_original() {
        let original = sample();
        let user_id = UserId::generate();

        let derived = original.to_builder().user_id(user_id).build().unwrap();

        assert_eq!(derived.user_id(), Some(&user_id));
        assert_eq!(derived.token(), original.token());
        assert_eq!(derived.issued_at(), original.issued_at());
        assert_eq!(derived.expires_at(), original.expires_at());
        assert!(original.user_id().is_none());
    }

    #[test]
    fn test_missing_fields_fail() {
        let now = Utc::now();

        assert!(TokenDetails::builder().build().is_err());
        assert!(TokenDetails::builder()
            .token("t")
            .issued_at(now)
            .build()
            .is_err());
        assert!(TokenDetails::builder()
            .issued_at(now)
            .expires_at(now)
            .build()
            .is_err());
    }

    #[test]
    fn test_serialization_skips_absent_user_id() {
        let json = serde_json::to_value(sample()).unwrap();

        assert!(json.get("user_id").is_none());
        assert!(json.get("issued_at").is_some());
        assert!(json.get("expires_at").is_some());
    }
}
