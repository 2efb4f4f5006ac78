use axum::extract::{Query, State};
use axum::Json;

use crate::api::v1::dto::{TrackSearchQuery, TrackSearchResponse};
use crate::api::AppState;
use crate::error::{AuraError, Result};

/// `GET /api/v1/tracks/search`
///
/// Direct catalog passthrough: the top track for a free-text query.
#[utoipa::path(
    get,
    path = "/api/v1/tracks/search",
    tag = "tracks",
    params(
        ("query" = String, Query, description = "Free-text track search query"),
    ),
    responses(
        (status = 200, description = "Top catalog match", body = TrackSearchResponse),
        (status = 400, description = "Missing query parameter"),
        (status = 404, description = "No track matched the query"),
    )
)]
pub async fn search_track(
    State(state): State<AppState>,
    Query(params): Query<TrackSearchQuery>,
) -> Result<Json<TrackSearchResponse>> {
    if params.query.trim().is_empty() {
        return Err(AuraError::Validation(
            "Missing query parameter".to_string(),
        ));
    }

    let track = state
        .catalog
        .search_track(&params.query)
        .await?
        .ok_or_else(|| AuraError::NotFound(format!("No track matched '{}'", params.query)))?;

    let artist = track
        .artists
        .into_iter()
        .next()
        .map(|artist| artist.name)
        .unwrap_or_default();

    Ok(Json(TrackSearchResponse {
        song: track.name,
        artist,
        spotify_url: track.external_urls.spotify.unwrap_or_default(),
    }))
}
