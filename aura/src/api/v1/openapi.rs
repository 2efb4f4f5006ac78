use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use crate::photosource::Photo;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aura API",
        version = "1.0.0",
        description = "Image mood analysis: content labels, facial emotion, music recommendations, and a generated short story.",
    ),
    paths(
        handlers::health::health_check,
        handlers::analyze::analyze_image,
        handlers::analyze::analyze_upload,
        handlers::tracks::search_track,
        handlers::photos::list_photos,
    ),
    components(schemas(
        // Analyze
        dto::AnalyzeImageRequest,
        dto::MoodAnalysisResponse,
        dto::TrackDto,
        // Tracks
        dto::TrackSearchQuery,
        dto::TrackSearchResponse,
        // Photos
        dto::PhotoListQuery,
        dto::PhotoListResponse,
        Photo,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::ComponentStatus,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "analyze", description = "Image mood analysis"),
        (name = "tracks", description = "Music catalog passthrough"),
        (name = "photos", description = "Photo source listing"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
