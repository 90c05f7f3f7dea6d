use std::time::{Duration, Instant};

use buzz_engine::{ApiError, ApiSettings, EngineEvent, EngineHandle};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analyze_body(query: &str) -> serde_json::Value {
    json!({
        "query": query,
        "platforms": {},
        "combined": {
            "total_items": 0,
            "sentiment_counts": { "positive": 0, "neutral": 0, "negative": 0 },
            "top_keywords": [],
            "summary": format!("No data found for '{query}'.")
        }
    })
}

async fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no engine event before the deadline");
}

#[tokio::test]
async fn analysis_events_round_trip_through_the_engine() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analyze"))
        .and(query_param("query", "Poco F7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analyze_body("Poco F7")))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("engine");

    engine.analyze(7, "Poco F7");

    match wait_for_event(&engine).await {
        EngineEvent::AnalysisFinished { request_id, result } => {
            assert_eq!(request_id, 7);
            assert_eq!(result.expect("analysis ok").query, "Poco F7");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn failures_surface_as_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("engine");

    engine.analyze(3, "anything");

    match wait_for_event(&engine).await {
        EngineEvent::AnalysisFinished { request_id, result } => {
            assert_eq!(request_id, 3);
            let err = result.unwrap_err();
            assert!(err.to_string().contains("500"), "got {err}");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn health_checks_report_backend_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "mode": "live",
            "apis": { "twitter": true, "reddit": true, "youtube": true },
            "message": "All APIs configured"
        })))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("engine");

    engine.check_health();

    match wait_for_event(&engine).await {
        EngineEvent::HealthChecked { result } => {
            let health = result.expect("health ok");
            assert_eq!(health.mode, "live");
            assert_eq!(health.apis.len(), 3);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn polling_an_idle_engine_yields_nothing() {
    let server = MockServer::start().await;
    let engine = EngineHandle::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("engine");

    assert!(engine.try_recv().is_none());
}

#[test]
fn invalid_settings_fail_engine_construction() {
    let err = EngineHandle::new(ApiSettings {
        base_url: "definitely not a url".to_string(),
        ..ApiSettings::default()
    })
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUrl { .. }), "got {err:?}");
}
