use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Vision error: {0}")]
    Vision(String),

    #[error("Vision unavailable: {0}")]
    VisionUnavailable(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM unavailable: {0}")]
    LlmUnavailable(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Photo source error: {0}")]
    PhotoSource(String),

    #[error("Photo source unavailable: {0}")]
    PhotoSourceUnavailable(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl IntoResponse for AuraError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuraError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuraError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AuraError::Vision(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AuraError::VisionUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AuraError::Llm(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AuraError::LlmUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AuraError::Catalog(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AuraError::CatalogUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AuraError::PhotoSource(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AuraError::PhotoSourceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
            AuraError::Cache(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AuraError::Analysis(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AuraError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AuraError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AuraError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AuraError::UrlParse(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AuraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AuraError::Validation("imageUrl is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn analysis_maps_to_bad_gateway() {
        let response = AuraError::Analysis("image could not be analyzed".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unavailable_maps_to_service_unavailable() {
        let response = AuraError::VisionUnavailable("no API key".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
