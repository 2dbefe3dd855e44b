//! API utilities for frontend-backend communication
//!
//! [`ApiClient`] wraps `gloo-net` with JSON bodies, the bearer token of the
//! current session and a typed error for non-2xx answers.

use contracts::domain::Resource;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{body} ({status})")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }

    /// Text for a notification
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Server is not reachable".to_string(),
            ApiError::Status { body, .. } => body.clone(),
            ApiError::Decode(_) => "Server sent an unexpected response".to_string(),
        }
    }
}

/// Decode a response body. `204 No Content` and an empty body yield `None`.
fn decode_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<Option<T>, ApiError> {
    if status == 204 || text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn error_body(status_text: String, text: String) -> String {
    if text.trim().is_empty() {
        status_text
    } else {
        text
    }
}

fn collection_path<R: Resource>() -> String {
    format!("/api/{}", R::collection_name())
}

/// REST client; carries the bearer token when created for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.authorize(Request::get(&api_url(path)));
        let request = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::send(request)
            .await?
            .ok_or_else(|| ApiError::Decode("empty response".to_string()))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let request = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::send(request).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let request = self
            .authorize(Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::send(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::send::<serde_json::Value>(request).await.map(|_| ())
    }

    /// `GET /api/<collection>`
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        self.get(&collection_path::<R>()).await
    }

    /// `GET /api/<collection>/<id>`
    pub async fn fetch<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        self.get(&format!("{}/{}", collection_path::<R>(), id)).await
    }

    /// `PUT /api/<collection>/<id>` with any patch body
    pub async fn update<R: Resource, B: Serialize>(
        &self,
        id: &str,
        patch: &B,
    ) -> Result<Option<R>, ApiError> {
        self.put(&format!("{}/{}", collection_path::<R>(), id), patch)
            .await
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(request: Request) -> Result<Option<T>, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            return Err(ApiError::Status {
                status,
                body: error_body(response.status_text(), text),
            });
        }

        decode_body(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a105_invoice::aggregate::Invoice;

    #[test]
    fn test_no_content_has_no_body() {
        assert_eq!(decode_body::<serde_json::Value>(204, "").unwrap(), None);
        assert_eq!(decode_body::<serde_json::Value>(200, "  ").unwrap(), None);
        assert_eq!(
            decode_body::<Vec<u32>>(200, "[1,2]").unwrap(),
            Some(vec![1, 2])
        );
        assert!(matches!(
            decode_body::<Vec<u32>>(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_error_body_falls_back_to_status_text() {
        assert_eq!(error_body("Not Found".into(), String::new()), "Not Found");
        assert_eq!(
            error_body("Bad Request".into(), "labour is required".into()),
            "labour is required"
        );
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::Status {
            status: 401,
            body: "Unauthorized".into(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn test_collection_path() {
        assert_eq!(collection_path::<Invoice>(), "/api/invoices");
    }
}
