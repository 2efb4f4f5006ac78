use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aura::catalog::CatalogProvider;
use aura::error::AuraError;
use aura::models::SongCandidate;

mod common;

fn candidate(song: &str, artist: &str) -> SongCandidate {
    SongCandidate {
        song: song.to_string(),
        artist: artist.to_string(),
    }
}

#[tokio::test]
async fn resolves_candidates_in_order_and_reuses_the_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body("tok-1", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(header("Authorization", "Bearer tok-1"))
        .and(query_param("q", "Weightless Marconi Union"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_search_body(
            "Weightless",
            "Marconi Union",
            "https://open.spotify.com/track/weightless",
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Holocene Bon Iver"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_search_body(
            "Holocene",
            "Bon Iver",
            "https://open.spotify.com/track/holocene",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let resolved = provider
        .resolve(&[
            candidate("Weightless", "Marconi Union"),
            candidate("Holocene", "Bon Iver"),
        ])
        .await
        .expect("resolution");

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].song, "Weightless");
    assert_eq!(
        resolved[0].spotify_url,
        "https://open.spotify.com/track/weightless"
    );
    assert_eq!(resolved[1].song, "Holocene");
}

#[tokio::test]
async fn zero_match_candidates_are_skipped_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body("tok-1", 3600)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Obscure Song Nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::empty_search_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Weightless Marconi Union"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_search_body(
            "Weightless",
            "Marconi Union",
            "https://open.spotify.com/track/weightless",
        )))
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let resolved = provider
        .resolve(&[
            candidate("Obscure Song", "Nobody"),
            candidate("Weightless", "Marconi Union"),
        ])
        .await
        .expect("resolution");

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].song, "Weightless");
}

#[tokio::test]
async fn a_failing_search_does_not_abort_the_rest() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body("tok-1", 3600)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Broken Query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("search exploded"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Weightless Marconi Union"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_search_body(
            "Weightless",
            "Marconi Union",
            "https://open.spotify.com/track/weightless",
        )))
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let resolved = provider
        .resolve(&[
            candidate("Broken", "Query"),
            candidate("Weightless", "Marconi Union"),
        ])
        .await
        .expect("resolution");

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].song, "Weightless");
}

#[tokio::test]
async fn an_expired_token_triggers_a_fresh_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body("tok-short", 0)))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_search_body(
            "Weightless",
            "Marconi Union",
            "https://open.spotify.com/track/weightless",
        )))
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let resolved = provider
        .resolve(&[
            candidate("Weightless", "Marconi Union"),
            candidate("Weightless", "Marconi Union"),
        ])
        .await
        .expect("resolution");

    assert_eq!(resolved.len(), 2);
}

#[tokio::test]
async fn a_failed_token_exchange_fails_the_stage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("token endpoint down"))
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let result = provider
        .resolve(&[candidate("Weightless", "Marconi Union")])
        .await;

    assert!(matches!(result, Err(AuraError::Catalog(_))));
}

#[tokio::test]
async fn passthrough_search_returns_the_top_track() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body("tok-1", 3600)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "weightless"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::track_search_body(
            "Weightless",
            "Marconi Union",
            "https://open.spotify.com/track/weightless",
        )))
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let track = provider
        .search_track("weightless")
        .await
        .expect("search")
        .expect("match");

    assert_eq!(track.name, "Weightless");
    assert_eq!(track.artists[0].name, "Marconi Union");
}

#[tokio::test]
async fn passthrough_search_with_no_match_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_body("tok-1", 3600)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::empty_search_body()))
        .mount(&server)
        .await;

    let provider = CatalogProvider::new(&common::catalog_config(&server.uri()));
    let track = provider.search_track("nothing here").await.expect("search");

    assert!(track.is_none());
}
