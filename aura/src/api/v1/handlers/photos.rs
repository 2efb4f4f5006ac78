use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;

use crate::api::v1::dto::{OAuthCallbackQuery, PhotoListQuery, PhotoListResponse};
use crate::api::AppState;
use crate::error::{AuraError, Result};

/// `GET /api/v1/auth/login`
///
/// Redirect the browser to the photo source's authorize page with a
/// fresh CSRF state token.
pub async fn login(State(state): State<AppState>) -> Result<Redirect> {
    let authorize_url = state.photos.login_url().await?;
    Ok(Redirect::temporary(&authorize_url))
}

/// `GET /api/v1/auth/callback`
///
/// OAuth callback: validate the state token, exchange the code, and hand
/// the access token to the frontend dashboard.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<OAuthCallbackQuery>,
) -> Result<Redirect> {
    let code = params
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AuraError::Validation("Authorization code not found".to_string()))?;
    let login_state = params.state.as_deref().unwrap_or("");

    let access_token = state.photos.exchange_code(code, login_state).await?;

    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("accessToken", &access_token)
        .finish();

    Ok(Redirect::temporary(&format!("/dashboard?{query}")))
}

/// `GET /api/v1/photos`
///
/// Flattened photo listing for the logged-in user.
#[utoipa::path(
    get,
    path = "/api/v1/photos",
    tag = "photos",
    params(
        ("accessToken" = String, Query, description = "Photo source access token"),
    ),
    responses(
        (status = 200, description = "The user's photos", body = PhotoListResponse),
        (status = 400, description = "Missing access token"),
    )
)]
pub async fn list_photos(
    State(state): State<AppState>,
    Query(params): Query<PhotoListQuery>,
) -> Result<Json<PhotoListResponse>> {
    if params.access_token.is_empty() {
        return Err(AuraError::Validation("Access token missing".to_string()));
    }

    let items = state.photos.list_photos(&params.access_token).await?;
    Ok(Json(PhotoListResponse { items }))
}
