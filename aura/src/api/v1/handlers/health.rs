use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

/// Service health summary.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub cache: ComponentStatus,
    pub vision: ComponentStatus,
    pub llm: LlmStatus,
    pub catalog: ComponentStatus,
    pub photos: ComponentStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ComponentStatus {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LlmStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

fn availability(available: bool) -> ComponentStatus {
    ComponentStatus {
        status: if available {
            "available".to_string()
        } else {
            "unavailable".to_string()
        },
    }
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthData> {
    let cache = ComponentStatus {
        status: if state.cache.ping().await {
            "ok".to_string()
        } else {
            "error".to_string()
        },
    };

    let llm = if state.llm.is_available() {
        LlmStatus {
            status: "available".to_string(),
            model: Some(state.llm.model().to_string()),
        }
    } else {
        LlmStatus {
            status: "unavailable".to_string(),
            model: None,
        }
    };

    Json(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache,
        vision: availability(state.vision.is_available()),
        llm,
        catalog: availability(state.catalog.is_available()),
        photos: availability(state.photos.is_available()),
    })
}
