use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::v1::dto::{AnalyzeImageRequest, MoodAnalysisResponse};
use crate::api::AppState;
use crate::error::{AuraError, Result};
use crate::models::AnalysisRequest;

/// `POST /api/v1/analyze`
///
/// Analyze an image by URL. Identical URLs are served from the cache
/// without touching any upstream service.
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    tag = "analyze",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, description = "Mood analysis for the image", body = MoodAnalysisResponse),
        (status = 400, description = "Missing or empty imageUrl"),
        (status = 502, description = "Image could not be analyzed"),
    )
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeImageRequest>,
) -> Result<Json<MoodAnalysisResponse>> {
    if request.image_url.trim().is_empty() {
        return Err(AuraError::Validation("imageUrl is required".to_string()));
    }

    let analysis = state
        .analysis
        .analyze(&AnalysisRequest::Url(request.image_url))
        .await?;

    Ok(Json(MoodAnalysisResponse::from(analysis)))
}

/// `POST /api/v1/analyze:upload`
///
/// Analyze an uploaded image. The raw bytes travel inline to the vision
/// service; uploads have no stable identity and are never cached.
#[utoipa::path(
    post,
    path = "/api/v1/analyze:upload",
    tag = "analyze",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Mood analysis for the uploaded image", body = MoodAnalysisResponse),
        (status = 400, description = "Missing image field"),
        (status = 502, description = "Image could not be analyzed"),
    )
)]
pub async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MoodAnalysisResponse>> {
    let mut image_bytes: Option<Vec<u8>> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AuraError::Validation(format!("Failed to read image field: {e}")))?;
            image_bytes = Some(bytes.to_vec());
        }
    }

    let bytes = image_bytes
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AuraError::Validation("image field is required".to_string()))?;

    let analysis = state
        .analysis
        .analyze(&AnalysisRequest::Bytes(bytes))
        .await?;

    Ok(Json(MoodAnalysisResponse::from(analysis)))
}
