use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aura::error::AuraError;
use aura::intelligence::{Narrator, Recommender};
use aura::llm::LlmProvider;
use aura::models::Emotion;

mod common;

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-pro:generateContent";

fn labels() -> Vec<String> {
    vec!["beach".to_string(), "sunset".to_string()]
}

#[tokio::test]
async fn recommendation_mines_candidates_from_the_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains("Detected emotion: neutral"))
        .and(body_string_contains("beach, sunset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::generation_body(
            "For this calm scene I suggest:\n\
             1. **Weightless - Marconi Union** for the stillness.\n\
             2. **Holocene - Bon Iver**, wide and quiet.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let recommender = Recommender::new(LlmProvider::new(&common::llm_config(&server.uri())));
    let candidates = recommender
        .recommend(&labels(), Emotion::Neutral)
        .await
        .expect("candidates");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].song, "Weightless");
    assert_eq!(candidates[0].artist, "Marconi Union");
    assert_eq!(candidates[1].song, "Holocene");
    assert_eq!(candidates[1].artist, "Bon Iver");
}

#[tokio::test]
async fn unminable_prose_yields_an_empty_candidate_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::generation_body(
            "I cannot think of any songs right now, sorry!",
        )))
        .mount(&server)
        .await;

    let recommender = Recommender::new(LlmProvider::new(&common::llm_config(&server.uri())));
    let candidates = recommender
        .recommend(&labels(), Emotion::Neutral)
        .await
        .expect("candidates");

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn absent_completion_is_tolerated_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let recommender = Recommender::new(LlmProvider::new(&common::llm_config(&server.uri())));
    let candidates = recommender
        .recommend(&labels(), Emotion::Neutral)
        .await
        .expect("candidates");

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn generation_failure_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("generation down"))
        .mount(&server)
        .await;

    let recommender = Recommender::new(LlmProvider::new(&common::llm_config(&server.uri())));
    let result = recommender.recommend(&labels(), Emotion::Neutral).await;

    assert!(matches!(result, Err(AuraError::Llm(_))));
}

#[tokio::test]
async fn narration_returns_the_raw_completion() {
    let server = MockServer::start().await;
    let story = "The tide kept its own time, and nobody on the beach minded.";
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains("short story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::generation_body(story)))
        .expect(1)
        .mount(&server)
        .await;

    let narrator = Narrator::new(LlmProvider::new(&common::llm_config(&server.uri())));
    let generated = narrator
        .narrate(&labels(), Emotion::Neutral)
        .await
        .expect("story");

    assert_eq!(generated, story);
}
