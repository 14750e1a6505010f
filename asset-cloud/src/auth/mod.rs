//! Bearer-token authentication
//!
//! The identity provider is external: it issues HS256 JWTs whose `sub` is
//! the verified principal email. This middleware checks the signature and
//! expiry and exposes the email to handlers as an [`Identity`] extension.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use shared::error::AppError;

use crate::state::AppState;

/// JWT claims for an authenticated principal
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Principal email
    pub sub: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Verified identity extracted from the bearer token
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a token for a principal (used by tooling and tests; production
/// tokens come from the identity provider with the same shared secret)
#[allow(dead_code)]
pub fn create_token(email: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Middleware that extracts and verifies the bearer JWT from the
/// Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::not_authenticated)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(AppError::not_authenticated)?;

    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::not_authenticated()
    })?;

    let identity = Identity {
        email: token_data.claims.sub,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|d| d.claims)
    }

    #[test]
    fn token_roundtrip() {
        let token = create_token("hr@example.com", "test-secret").unwrap();
        let claims = decode(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "hr@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("hr@example.com", "test-secret").unwrap();
        assert!(decode(&token, "other-secret").is_err());
    }
}
