use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Claims of the authenticated caller, put into request extensions by
/// `require_auth`.
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser) -> Response`
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use contracts::enums::role::Role;

    #[tokio::test]
    async fn test_claims_come_from_extensions() {
        let (mut parts, _) = Request::new(()).into_parts();
        assert_eq!(
            CurrentUser::from_request_parts(&mut parts, &()).await.err(),
            Some(StatusCode::UNAUTHORIZED)
        );

        parts.extensions.insert(TokenClaims {
            sub: "u-1".into(),
            name: "Admin".into(),
            role: Role::Admin,
            exp: 0,
            iat: 0,
        });
        let CurrentUser(claims) = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(claims.sub, "u-1");
    }
}
