use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::system::auth::service::AppState;
use crate::system::{auth, handlers};

/// System routes: health check and the identity endpoints
pub fn configure_system_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // public
        .route("/api/system/auth/login", post(handlers::auth::login))
        // protected
        .route(
            "/api/system/auth/me",
            get(handlers::auth::current_user).layer(middleware::from_fn_with_state(
                state.clone(),
                auth::middleware::require_auth,
            )),
        )
        .with_state(state)
}
