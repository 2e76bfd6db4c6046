// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Integration tests for the HTTP backend against a mock server

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deskmate::api::{HttpBackend, SupportBackend};
use deskmate::error::{ApiError, DeskmateError};

#[tokio::test]
async fn test_full_conversation_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/new_session"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"session_id": "sess-1"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(serde_json::json!({
            "session_id": "sess-1",
            "query": "What are your hours?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "We are open 9-5, Monday to Friday.",
            "escalated": false
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "question": "Q1", "answer": "A1", "category": "Billing"}
        ])))
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());

    let session_id = backend.new_session().await.unwrap();
    assert_eq!(session_id, "sess-1");

    let faqs = backend.faqs().await.unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].category, "Billing");

    let reply = backend
        .ask(Some(&session_id), "What are your hours?")
        .await
        .unwrap();
    assert_eq!(reply.response, "We are open 9-5, Monday to Friday.");
    assert!(!reply.escalated);
}

#[tokio::test]
async fn test_escalation_flag_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "I'm connecting you with a human agent.",
            "escalated": true
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());
    let reply = backend
        .ask(Some("sess-1"), "This is urgent, I want a refund")
        .await
        .unwrap();

    assert!(reply.escalated);
}

#[tokio::test]
async fn test_server_error_is_http_level_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());
    let err = backend.ask(Some("sess-1"), "hello").await.unwrap_err();

    match err {
        DeskmateError::Api(ApiError::ServerError { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    // Port 1 is never listening
    let backend = HttpBackend::with_base_url("http://127.0.0.1:1");

    let err = backend.ask(None, "hello").await.unwrap_err();
    assert!(matches!(err, DeskmateError::Api(ApiError::Network(_))));

    let err = backend.new_session().await.unwrap_err();
    assert!(matches!(err, DeskmateError::Api(ApiError::Network(_))));

    let err = backend.faqs().await.unwrap_err();
    assert!(matches!(err, DeskmateError::Api(ApiError::Network(_))));
}

#[tokio::test]
async fn test_history_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get_history/sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "session_id": "sess-1",
            "messages": [
                {"id": 1, "role": "user", "content": "hi",
                 "timestamp": "2025-06-15T12:00:00Z"},
                {"id": 2, "role": "bot", "content": "hello there",
                 "timestamp": "2025-06-15T12:00:02Z"}
            ]
        })))
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());
    let history = backend.history("sess-1").await.unwrap();

    assert_eq!(history.session_id, "sess-1");
    assert_eq!(history.messages.len(), 2);
    assert_eq!(history.messages[0].role, "user");
    assert_eq!(history.messages[1].content, "hello there");
    assert!(history.messages[0].timestamp < history.messages[1].timestamp);
}

#[tokio::test]
async fn test_unknown_session_maps_to_session_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Session not found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get_history/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());

    let err = backend.ask(Some("ghost"), "hi").await.unwrap_err();
    assert!(matches!(
        err,
        DeskmateError::Api(ApiError::SessionNotFound(_))
    ));

    let err = backend.history("ghost").await.unwrap_err();
    assert!(matches!(
        err,
        DeskmateError::Api(ApiError::SessionNotFound(_))
    ));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "healthy"})),
        )
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());
    assert!(backend.health().await.unwrap());
}

#[tokio::test]
async fn test_faqs_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/faqs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let backend = HttpBackend::with_base_url(server.uri());
    let faqs = backend.faqs().await.unwrap();
    assert!(faqs.is_empty());
}
