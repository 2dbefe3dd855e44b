use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use contracts::system::auth::TokenClaims;
use std::sync::Arc;

use super::service::{self, AppState};

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub fn authorize(state: &AppState, headers: &HeaderMap) -> Result<TokenClaims, StatusCode> {
    let token = bearer_token(headers).ok_or(StatusCode::UNAUTHORIZED)?;
    service::authenticate(state, token).map_err(StatusCode::from)
}

/// Middleware that requires valid JWT authentication
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let claims = authorize(&state, req.headers())?;

    // Claims are read by the CurrentUser extractor
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::service::tests::test_state;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_authorize() {
        let state = test_state();
        let user = state.users.get_by_username("admin").unwrap();
        let token = state.jwt.generate_access_token(user).unwrap();

        let claims = authorize(&state, &headers(&format!("Bearer {token}"))).unwrap();
        assert_eq!(claims.sub, "u-1");

        assert_eq!(
            authorize(&state, &HeaderMap::new()).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            authorize(&state, &headers("Bearer forged.token.value")).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }
}
