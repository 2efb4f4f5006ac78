#![allow(dead_code)]

use serde_json::{json, Value};

use aura::config::{CatalogConfig, LlmConfig, VisionConfig};

/// Vision config pointed at a mock server.
pub fn vision_config(base_url: &str) -> VisionConfig {
    VisionConfig {
        api_key: Some("test-vision-key".to_string()),
        base_url: Some(base_url.to_string()),
        timeout_secs: 5,
    }
}

/// Generation config pointed at a mock server.
pub fn llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        model: "gemini-1.5-pro".to_string(),
        api_key: Some("test-llm-key".to_string()),
        base_url: Some(base_url.to_string()),
        timeout_secs: 5,
    }
}

/// Catalog config pointed at a mock server for both the token endpoint
/// and the search endpoint.
pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        client_id: Some("test-client-id".to_string()),
        client_secret: Some("test-client-secret".to_string()),
        base_url: Some(base_url.to_string()),
        token_url: Some(format!("{base_url}/api/token")),
        timeout_secs: 5,
    }
}

/// Annotate response with labels and no face.
pub fn vision_body(labels: &[&str]) -> Value {
    json!({
        "responses": [{
            "labelAnnotations": labels
                .iter()
                .map(|label| json!({"description": label, "score": 0.9}))
                .collect::<Vec<_>>(),
        }]
    })
}

/// Annotate response with labels and one face.
pub fn vision_body_with_face(
    labels: &[&str],
    joy: &str,
    sorrow: &str,
    anger: &str,
    surprise: &str,
) -> Value {
    json!({
        "responses": [{
            "labelAnnotations": labels
                .iter()
                .map(|label| json!({"description": label, "score": 0.9}))
                .collect::<Vec<_>>(),
            "faceAnnotations": [{
                "joyLikelihood": joy,
                "sorrowLikelihood": sorrow,
                "angerLikelihood": anger,
                "surpriseLikelihood": surprise,
            }],
        }]
    })
}

/// generateContent response carrying one text part.
pub fn generation_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model",
            },
            "finishReason": "STOP",
        }]
    })
}

/// Client-credentials token response.
pub fn token_body(access_token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": expires_in,
    })
}

/// Catalog search response with one matching track.
pub fn track_search_body(name: &str, artist: &str, spotify_url: &str) -> Value {
    json!({
        "tracks": {
            "items": [{
                "name": name,
                "artists": [{"name": artist}],
                "external_urls": {"spotify": spotify_url},
            }]
        }
    })
}

/// Catalog search response with zero matches.
pub fn empty_search_body() -> Value {
    json!({"tracks": {"items": []}})
}
