//! HS256 access token issuance

use std::collections::HashMap;
use std::fmt::Debug;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::auth::{Claims, TokenDetails};
use crate::domain::DomainError;

/// Registered claim names set by the issuer itself
const REGISTERED_CLAIMS: [&str; 5] = ["iss", "sub", "iat", "jti", "exp"];

/// JWT payload: custom claims plus the registered ones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    #[serde(flatten)]
    pub custom: HashMap<String, Value>,
    /// Issuer
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Unique token ID
    pub jti: String,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

impl JwtClaims {
    fn new(
        claims: Claims,
        issuer: &str,
        subject: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let mut custom = claims.into_inner();
        for name in REGISTERED_CLAIMS {
            custom.remove(name);
        }

        Self {
            custom,
            iss: issuer.to_string(),
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Configuration for token issuance
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub expiration_seconds: u64,
    /// Value of the `iss` claim
    pub issuer: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_seconds: u64, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_seconds,
            issuer: issuer.into(),
        }
    }
}

/// Issues signed tokens for an authenticated subject
pub trait TokenIssuer: Send + Sync + Debug {
    /// Sign `claims` for `subject`, valid from now for the configured lifetime
    fn generate(&self, claims: Claims, subject: &str) -> Result<TokenDetails, DomainError>;
}

/// HMAC-SHA256 token issuer
#[derive(Clone)]
pub struct JwtTokenIssuer {
    issuer: String,
    expiration: Duration,
    encoding_key: EncodingKey,
}

impl Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("issuer", &self.issuer)
            .field("expiration", &self.expiration)
            .field("encoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtTokenIssuer {
    /// Build an issuer, rejecting an empty secret or issuer and a zero
    /// lifetime or one that cannot be added to the current time
    pub fn new(config: JwtConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::configuration("jwt.secret must not be empty"));
        }

        if config.issuer.trim().is_empty() {
            return Err(DomainError::configuration("jwt.issuer must not be empty"));
        }

        let expiration = i64::try_from(config.expiration_seconds)
            .ok()
            .filter(|secs| *secs > 0)
            .and_then(Duration::try_seconds)
            .filter(|lifetime| Utc::now().checked_add_signed(*lifetime).is_some())
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "jwt.expiration must be a positive number of seconds, got {}",
                    config.expiration_seconds
                ))
            })?;

        // The key is handed over base64-encoded and decoded back, so the HMAC
        // key is the raw secret bytes.
        let encoded_secret = STANDARD.encode(config.secret.as_bytes());
        let encoding_key = EncodingKey::from_base64_secret(&encoded_secret)
            .map_err(|e| DomainError::configuration(format!("Invalid jwt.secret: {}", e)))?;

        Ok(Self {
            issuer: config.issuer,
            expiration,
            encoding_key,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    fn sign(
        &self,
        claims: Claims,
        subject: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<TokenDetails, DomainError> {
        let payload = JwtClaims::new(claims, &self.issuer, subject, issued_at, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| DomainError::token(format!("Failed to sign token: {}", e)))?;

        TokenDetails::builder()
            .token(token)
            .issued_at(issued_at)
            .expires_at(expires_at)
            .build()
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn generate(&self, claims: Claims, subject: &str) -> Result<TokenDetails, DomainError> {
        let issued_at = Utc::now().trunc_subsecs(3);
        let expires_at = issued_at
            .checked_add_signed(self.expiration)
            .ok_or_else(|| DomainError::token("Token expiration overflows the calendar"))?;

        self.sign(claims, subject, issued_at, expires_at)
    }
}
