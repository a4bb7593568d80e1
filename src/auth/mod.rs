use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Bearer-token claims. `permissions` carries the granted scopes
/// (e.g. `view:movies`, `add:actors`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub permissions: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: impl Into<String>, permissions: Vec<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: sub.into(),
            permissions,
            exp,
            iat: now.timestamp(),
        }
    }

    pub fn has_permission(&self, scope: &str) -> bool {
        self.permissions.iter().any(|p| p == scope)
    }
}

#[derive(Debug)]
pub enum AuthError {
    InvalidSecret,
    TokenGeneration(String),
    InvalidToken(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidSecret => write!(f, "JWT secret not configured"),
            AuthError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            AuthError::InvalidToken(msg) => write!(f, "Invalid JWT token: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn round_trips_claims_through_a_token() {
        let claims = Claims::new("producer", vec!["view:movies".to_string()], 1);
        let token = generate_token(&claims, SECRET).unwrap();
        let decoded = verify_token(&token, SECRET).unwrap();

        assert_eq!(decoded.sub, "producer");
        assert!(decoded.has_permission("view:movies"));
        assert!(!decoded.has_permission("delete:movies"));
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let claims = Claims::new("producer", vec![], 1);
        let token = generate_token(&claims, "other-secret").unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn refuses_an_empty_secret() {
        let claims = Claims::new("producer", vec![], 1);
        assert!(generate_token(&claims, "").is_err());
    }
}
