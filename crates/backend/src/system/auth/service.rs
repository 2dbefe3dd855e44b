use contracts::system::auth::{LoginRequest, LoginResponse, TokenClaims, UserInfo};

use super::error::AuthError;
use super::jwt::JwtKeys;
use crate::system::users::directory::UserDirectory;

/// Immutable state shared by all handlers
pub struct AppState {
    pub users: UserDirectory,
    pub jwt: JwtKeys,
}

/// Verify credentials and issue an access token
pub fn login(state: &AppState, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let Some(user) = state
        .users
        .verify_credentials(&request.username, &request.password)
    else {
        tracing::warn!("Failed login attempt for '{}'", request.username.trim());
        return Err(AuthError::InvalidCredentials);
    };

    let access_token = state.jwt.generate_access_token(user)?;
    tracing::info!("User '{}' logged in as {}", user.username, user.role);

    Ok(LoginResponse {
        access_token,
        user: user.info(),
    })
}

/// Resolve the directory user behind validated claims.
///
/// The role is taken from the directory, not from the token, so a role
/// change in config applies to tokens issued before it.
pub fn current_user(state: &AppState, claims: &TokenClaims) -> Result<UserInfo, AuthError> {
    state
        .users
        .get_by_id(&claims.sub)
        .map(|user| user.info())
        .ok_or(AuthError::UnknownUser)
}

/// Validate a bearer token into claims
pub fn authenticate(state: &AppState, token: &str) -> Result<TokenClaims, AuthError> {
    state
        .jwt
        .validate_token(token)
        .map_err(|_| AuthError::InvalidToken)
}
