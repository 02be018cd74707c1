//! Stateless bearer tokens.
//!
//! HS256 JWTs carrying the caller's id, display name, and role. There is no
//! server-side session table; expiry is the only revocation mechanism.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catmap_core::{Identity, Role, User};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

pub fn issue(user: &User, secret: &str, ttl_seconds: i64) -> Result<String, TokenError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id,
        name: user.user_name.clone(),
        role: user.role.as_str().to_string(),
        iat: now,
        exp: now + ttl_seconds,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::Invalid)
}

pub fn verify(token: &str, secret: &str) -> Result<Identity, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|err| match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;
    let role = data
        .claims
        .role
        .parse::<Role>()
        .map_err(|_| TokenError::Invalid)?;
    Ok(Identity {
        user_id: data.claims.sub,
        user_name: data.claims.name,
        role,
    })
}
