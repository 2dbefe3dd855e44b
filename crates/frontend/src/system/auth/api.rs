use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::{ApiClient, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    ApiClient::anonymous()
        .post("/api/system/auth/login", &request)
        .await?
        .ok_or_else(|| ApiError::Decode("empty login response".to_string()))
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    ApiClient::with_token(access_token)
        .get("/api/system/auth/me")
        .await
}
