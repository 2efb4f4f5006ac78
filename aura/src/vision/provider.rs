use tracing::{info, warn};

use crate::config::VisionConfig;
use crate::error::{AuraError, Result};
use crate::models::{AnalysisRequest, Emotion, Likelihood, MAX_LABELS};

use super::api::{AnnotateImageResponse, FaceAnnotation, VisionApiClient};

/// Labels and dominant emotion derived from one annotated image.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionAnalysis {
    pub labels: Vec<String>,
    pub dominant_emotion: Emotion,
}

#[derive(Clone)]
enum VisionBackend {
    Api { client: VisionApiClient },
    Unavailable { reason: String },
}

#[derive(Clone)]
pub struct VisionProvider {
    backend: VisionBackend,
}

impl VisionProvider {
    pub fn new(config: &VisionConfig) -> Self {
        let backend = match VisionApiClient::new(config) {
            Ok(client) => {
                info!("Vision API backend initialized");
                VisionBackend::Api { client }
            }
            Err(e) => {
                let reason = format!("Vision backend unavailable: {e}");
                warn!("{}", reason);
                VisionBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, VisionBackend::Unavailable { .. })
    }

    /// Analyze one image into labels plus a dominant emotion.
    pub async fn analyze(&self, image: &AnalysisRequest) -> Result<VisionAnalysis> {
        match &self.backend {
            VisionBackend::Api { client } => {
                let response = client.annotate(image).await?;
                Ok(Self::interpret(response))
            }
            VisionBackend::Unavailable { reason } => {
                Err(AuraError::VisionUnavailable(reason.clone()))
            }
        }
    }

    fn interpret(response: AnnotateImageResponse) -> VisionAnalysis {
        let labels: Vec<String> = response
            .label_annotations
            .into_iter()
            .map(|label| label.description)
            .take(MAX_LABELS)
            .collect();

        let dominant_emotion = response
            .face_annotations
            .first()
            .map(dominant_emotion)
            .unwrap_or(Emotion::Neutral);

        VisionAnalysis {
            labels,
            dominant_emotion,
        }
    }
}

/// Pick the face's dominant emotion: pairs in declaration order, stable
/// sort by likelihood rank descending, ties keep declaration order. A top
/// rank of very-unlikely means the face shows nothing worth reporting.
fn dominant_emotion(face: &FaceAnnotation) -> Emotion {
    let mut scored = [
        (Emotion::Joy, face.joy_likelihood),
        (Emotion::Sorrow, face.sorrow_likelihood),
        (Emotion::Anger, face.anger_likelihood),
        (Emotion::Surprise, face.surprise_likelihood),
    ];
    scored.sort_by(|a, b| b.1.rank().cmp(&a.1.rank()));

    let (emotion, likelihood) = scored[0];
    if likelihood == Likelihood::VeryUnlikely {
        Emotion::Neutral
    } else {
        emotion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::api::LabelAnnotation;

    fn face_with(
        joy: Likelihood,
        sorrow: Likelihood,
        anger: Likelihood,
        surprise: Likelihood,
    ) -> FaceAnnotation {
        FaceAnnotation {
            joy_likelihood: joy,
            sorrow_likelihood: sorrow,
            anger_likelihood: anger,
            surprise_likelihood: surprise,
        }
    }

    #[test]
    fn highest_rank_wins() {
        let face = face_with(
            Likelihood::Unlikely,
            Likelihood::VeryLikely,
            Likelihood::Possible,
            Likelihood::Unlikely,
        );
        assert_eq!(dominant_emotion(&face), Emotion::Sorrow);
    }

    #[test]
    fn ties_keep_declaration_order() {
        // joy=likely(3), sorrow=possible(2), anger=possible(2), surprise=unlikely(1)
        let face = face_with(
            Likelihood::Likely,
            Likelihood::Possible,
            Likelihood::Possible,
            Likelihood::Unlikely,
        );
        assert_eq!(dominant_emotion(&face), Emotion::Joy);

        // Full tie: joy is declared first.
        let face = face_with(
            Likelihood::Possible,
            Likelihood::Possible,
            Likelihood::Possible,
            Likelihood::Possible,
        );
        assert_eq!(dominant_emotion(&face), Emotion::Joy);
    }

    #[test]
    fn all_very_unlikely_is_neutral() {
        let face = face_with(
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
        );
        assert_eq!(dominant_emotion(&face), Emotion::Neutral);
    }

    #[test]
    fn no_face_is_neutral() {
        let response = AnnotateImageResponse {
            label_annotations: vec![LabelAnnotation {
                description: "beach".into(),
            }],
            face_annotations: vec![],
        };
        let analysis = VisionProvider::interpret(response);
        assert_eq!(analysis.dominant_emotion, Emotion::Neutral);
        assert_eq!(analysis.labels, vec!["beach".to_string()]);
    }

    #[test]
    fn labels_truncate_to_five_in_order() {
        let response = AnnotateImageResponse {
            label_annotations: (1..=7)
                .map(|i| LabelAnnotation {
                    description: format!("label{i}"),
                })
                .collect(),
            face_annotations: vec![],
        };
        let analysis = VisionProvider::interpret(response);
        assert_eq!(
            analysis.labels,
            vec!["label1", "label2", "label3", "label4", "label5"]
        );
    }

    #[test]
    fn unavailable_provider_errors() {
        let config = VisionConfig {
            api_key: None,
            base_url: None,
            timeout_secs: 30,
        };
        let provider = VisionProvider::new(&config);
        assert!(!provider.is_available());

        let result = tokio_test::block_on(
            provider.analyze(&AnalysisRequest::Url("https://x/img.jpg".into())),
        );
        assert!(matches!(result, Err(AuraError::VisionUnavailable(_))));
    }
}
