use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::VisionConfig;
use crate::error::{AuraError, Result};
use crate::models::{AnalysisRequest, Likelihood};

const DEFAULT_BASE_URL: &str = "https://vision.googleapis.com";

const LABEL_DETECTION_MAX_RESULTS: u32 = 5;
const FACE_DETECTION_MAX_RESULTS: u32 = 1;

/// Client for the image annotation service. One call requests both label
/// detection and face detection.
#[derive(Clone, Debug)]
pub struct VisionApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<ImageSource>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSource {
    image_uri: String,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
    #[serde(rename = "maxResults")]
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub label_annotations: Vec<LabelAnnotation>,
    #[serde(default)]
    pub face_annotations: Vec<FaceAnnotation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelAnnotation {
    #[serde(default)]
    pub description: String,
}

/// Per-emotion likelihood levels for one detected face.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAnnotation {
    #[serde(default)]
    pub joy_likelihood: Likelihood,
    #[serde(default)]
    pub sorrow_likelihood: Likelihood,
    #[serde(default)]
    pub anger_likelihood: Likelihood,
    #[serde(default)]
    pub surprise_likelihood: Likelihood,
}

impl VisionApiClient {
    pub fn new(config: &VisionConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AuraError::Vision("API key required for vision service".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuraError::Vision(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Annotate one image: top 5 labels plus at most one face. Fails when
    /// the service is unreachable, returns a non-2xx status, or the
    /// payload carries no `responses[0]` entry.
    pub async fn annotate(&self, image: &AnalysisRequest) -> Result<AnnotateImageResponse> {
        let image = match image {
            AnalysisRequest::Url(url) => Image {
                content: None,
                source: Some(ImageSource {
                    image_uri: url.clone(),
                }),
            },
            AnalysisRequest::Bytes(bytes) => Image {
                content: Some(STANDARD.encode(bytes)),
                source: None,
            },
        };

        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image,
                features: vec![
                    Feature {
                        feature_type: "LABEL_DETECTION",
                        max_results: LABEL_DETECTION_MAX_RESULTS,
                    },
                    Feature {
                        feature_type: "FACE_DETECTION",
                        max_results: FACE_DETECTION_MAX_RESULTS,
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/v1/images:annotate?key={}",
                self.base_url, self.api_key
            ))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuraError::Vision(format!("Annotate request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AuraError::Vision(format!(
                "Vision service returned {}",
                response.status()
            )));
        }

        let annotate: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| AuraError::Vision(format!("Failed to parse annotate response: {e}")))?;

        annotate
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| AuraError::Vision("Annotate response contained no results".to_string()))
    }
}
