//! WebServer-specific error types

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jewel_shared::{SharedError, logging::Component};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("Failed to fetch {resource}")]
    FetchFailed {
        resource: &'static str,
        #[source]
        source: Box<WebServerError>,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("Catalog storage error: {0}")]
    Storage(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebServerError {
    pub fn not_found(resource: &'static str) -> Self {
        WebServerError::NotFound { resource }
    }

    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    /// Wrap a lower-level failure with the resource the request was after.
    /// Not-found errors pass through unchanged so they keep their 404.
    pub fn fetching(resource: &'static str) -> impl FnOnce(WebServerError) -> WebServerError {
        move |source| match source {
            WebServerError::NotFound { .. } => source,
            other => WebServerError::FetchFailed {
                resource,
                source: Box::new(other),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body
    fn public_message(&self) -> String {
        match self {
            WebServerError::NotFound { .. }
            | WebServerError::BadRequest(_)
            | WebServerError::FetchFailed { .. } => self.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            let cause = match &self {
                WebServerError::FetchFailed { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            jewel_shared::component_error!(Component::Api, error = %cause, "❌ {}", self);
        } else if let WebServerError::BadRequest(reason) = &self {
            jewel_shared::component_warn!(Component::Api, "⚠️ Rejected request: {}", reason);
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl From<QueryRejection> for WebServerError {
    fn from(rejection: QueryRejection) -> Self {
        WebServerError::BadRequest(rejection.body_text())
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = WebServerError::not_found("Seller");
        assert_eq!(error.to_string(), "Seller not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_fetching_wraps_unexpected_errors() {
        let wrapped = WebServerError::fetching("states")(WebServerError::Storage("disk on fire".into()));
        assert_eq!(wrapped.to_string(), "Failed to fetch states");
        assert_eq!(wrapped.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_fetching_keeps_not_found() {
        let passed = WebServerError::fetching("state")(WebServerError::not_found("State"));
        assert!(matches!(passed, WebServerError::NotFound { resource: "State" }));
    }

    #[test]
    fn test_bad_request_keeps_its_reason() {
        let error = WebServerError::BadRequest("minPrice: invalid digit found in string".into());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "minPrice: invalid digit found in string");
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let error = WebServerError::Storage("secret path /var/data".into());
        assert_eq!(error.public_message(), "Internal server error");
    }
}
