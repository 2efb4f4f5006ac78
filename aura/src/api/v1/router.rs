use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let auth = Router::new()
        .route("/login", get(handlers::photos::login))
        .route("/callback", get(handlers::photos::callback));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .route("/analyze", post(handlers::analyze::analyze_image))
        .route("/analyze:upload", post(handlers::analyze::analyze_upload))
        .route("/tracks/search", get(handlers::tracks::search_track))
        .route("/photos", get(handlers::photos::list_photos))
        .nest("/auth", auth)
}
