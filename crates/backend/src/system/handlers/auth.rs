use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use std::sync::Arc;

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::service::{self, AppState};

/// Login handler
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let response = service::login(&state, &request)?;
    Ok(Json(response))
}

/// Get current user handler (protected by middleware)
pub async fn current_user(
    State(state): State<Arc<AppState>>,
    CurrentUser(claims): CurrentUser,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = service::current_user(&state, &claims)?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::service::tests::test_state;
    use contracts::enums::role::Role;

    #[tokio::test]
    async fn test_login_then_me() {
        let state = Arc::new(test_state());

        let Json(response) = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "admin".into(),
                password: "secret".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.user.role, Role::Admin);

        let claims = state.jwt.validate_token(&response.access_token).unwrap();
        let Json(me) = current_user(State(state), CurrentUser(claims)).await.unwrap();
        assert_eq!(me, response.user);
    }

    #[tokio::test]
    async fn test_login_status_codes() {
        let state = Arc::new(test_state());
        let attempt = |username: &str, password: &str| {
            login(
                State(state.clone()),
                Json(LoginRequest {
                    username: username.into(),
                    password: password.into(),
                }),
            )
        };

        assert_eq!(
            attempt("", "").await.err(),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            attempt("admin", "nope").await.err(),
            Some(StatusCode::UNAUTHORIZED)
        );
    }
}
