use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_token, Claims};
use crate::error::ApiError;
use crate::AppState;

/// Verified claims extracted from the bearer token, injected into the request
/// before the handler body runs.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
    pub permissions: Vec<String>,
}

impl AuthUser {
    /// Fail with 403 unless the token granted the given scope.
    pub fn require(&self, scope: &str) -> Result<(), ApiError> {
        if self.permissions.iter().any(|p| p == scope) {
            Ok(())
        } else {
            Err(ApiError::forbidden(format!("missing required scope: {}", scope)))
        }
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            permissions: claims.permissions,
        }
    }
}

/// Bearer-token middleware guarding every resource route. Validates the JWT
/// and injects an [`AuthUser`] extension; scope checks stay with the handlers
/// since each (resource, operation) pair requires a different scope.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;

    let claims = verify_token(&token, &state.config.security.jwt_secret)
        .map_err(|e| ApiError::unauthorized(e.to_string()))?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the JWT from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use Bearer token format"))?;

    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("Empty bearer token"));
    }

    Ok(token.to_string())
}
