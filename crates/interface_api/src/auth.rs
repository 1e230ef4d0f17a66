//! Authentication and authorization

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (agent ID)
    pub sub: String,
    /// Agent display name, shown in the dashboard greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Agent's roles and permissions
    pub roles: Vec<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing permission: {0}")]
    MissingPermission(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingPermission(_) => ApiError::Forbidden(err.to_string()),
            AuthError::InvalidToken | AuthError::TokenExpired => ApiError::Unauthorized,
        }
    }
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `agent_id` - Agent identifier
/// * `name` - Optional display name carried in the token
/// * `roles` - Agent's roles
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    agent_id: &str,
    name: Option<&str>,
    roles: Vec<String>,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(i64::try_from(expiration_secs).unwrap_or(i64::MAX / 1000));

    let claims = TokenClaims {
        sub: agent_id.to_string(),
        name: name.map(str::to_string),
        roles,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Checks if the agent has the required role
pub fn has_role(claims: &TokenClaims, required_role: &str) -> bool {
    claims.roles.iter().any(|r| r == required_role || r == permissions::ADMIN)
}

/// Fails with `MissingPermission` unless the agent has the role
pub fn require(claims: &TokenClaims, required_role: &str) -> Result<(), AuthError> {
    if has_role(claims, required_role) {
        Ok(())
    } else {
        Err(AuthError::MissingPermission(required_role.to_string()))
    }
}

/// Permission definitions
pub mod permissions {
    pub const ADMIN: &str = "admin";
    pub const CLAIM_READ: &str = "claim:read";
    pub const CLAIM_WRITE: &str = "claim:write";
    pub const CLAIM_SUBMIT: &str = "claim:submit";
}
