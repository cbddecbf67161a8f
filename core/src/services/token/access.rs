//! Access token codec
//!
//! Free functions over an explicit signing secret. Access tokens are
//! self-contained: validity is decided by signature, expiry, issuer and
//! subject alone, with no store round-trip.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TOKEN_ISSUER};
use crate::errors::{DomainError, TokenError};

/// Issues a signed HS256 access token for `user_id`
///
/// # Arguments
///
/// * `user_id` - The subject of the token
/// * `ttl_seconds` - Lifetime from now, in seconds
/// * `secret` - HMAC signing secret
///
/// # Returns
///
/// * `Ok(String)` - Compact JWT with `iss`, `sub`, `iat` and `exp` claims
/// * `Err(DomainError)` - Encoding failed
pub fn issue_access_token(
    user_id: Uuid,
    ttl_seconds: i64,
    secret: &str,
) -> Result<String, DomainError> {
    let claims = Claims::new_access_token(user_id, ttl_seconds);
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| DomainError::Internal {
        message: format!("Failed to sign access token: {}", e),
    })
}

/// Verifies an access token and returns the authenticated user ID
///
/// Expiry is checked with no leeway.
///
/// # Errors
///
/// * `TokenError::InvalidToken` - Bad signature, malformed or expired
/// * `TokenError::InvalidIssuer` - Issuer is not exactly `chirpy`
/// * `TokenError::NoSubject` - Subject absent or empty
pub fn verify_access_token(token: &str, secret: &str) -> Result<Uuid, DomainError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "access token rejected");
        TokenError::InvalidToken
    })?;

    let claims = token_data.claims;

    if claims.iss != TOKEN_ISSUER {
        return Err(TokenError::InvalidIssuer.into());
    }

    if claims.sub.is_empty() {
        return Err(TokenError::NoSubject.into());
    }

    // Only this service signs with the secret, and it always signs UUIDs.
    Uuid::parse_str(&claims.sub).map_err(|_| DomainError::from(TokenError::InvalidToken))
}
