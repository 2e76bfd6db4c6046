// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP implementation of the support backend
//!
//! Talks JSON to the backend's `/new_session`, `/ask`, `/faqs`,
//! `/get_history/{id}`, and `/health` endpoints. No retries and no request
//! timeout: every failure surfaces once and the caller decides what to show.

use async_trait::async_trait;
use reqwest::Client;

use crate::api::backend::SupportBackend;
use crate::api::types::{
    AskRequest, AskResponse, ConversationHistory, FaqEntry, HealthResponse, NewSessionResponse,
};
use crate::error::{ApiError, DeskmateError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Support backend over HTTP
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpBackend {
    /// Create a backend pointing at the default local server
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_transport_error(e: reqwest::Error) -> DeskmateError {
        if e.is_connect() || e.is_timeout() {
            DeskmateError::Api(ApiError::Network(e.to_string()))
        } else {
            DeskmateError::Http(e)
        }
    }

    /// Convert a non-OK response into the matching ApiError
    async fn error_for_status(response: reqwest::Response) -> DeskmateError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        DeskmateError::Api(ApiError::ServerError { status, message })
    }
}

#[async_trait]
impl SupportBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn new_session(&self) -> Result<String> {
        let response = self
            .client
            .post(self.url("/new_session"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let body: NewSessionResponse = response
            .json()
            .await
            .map_err(|e| DeskmateError::Api(ApiError::InvalidResponse(e.to_string())))?;
        Ok(body.session_id)
    }

    async fn ask(&self, session_id: Option<&str>, query: &str) -> Result<AskResponse> {
        let body = AskRequest {
            session_id: session_id.map(str::to_string),
            query: query.to_string(),
        };

        let response = self
            .client
            .post(self.url("/ask"))
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if response.status().as_u16() == 404 {
            let session = session_id.unwrap_or("(none)").to_string();
            return Err(DeskmateError::Api(ApiError::SessionNotFound(session)));
        }
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DeskmateError::Api(ApiError::InvalidResponse(e.to_string())))
    }

    async fn faqs(&self) -> Result<Vec<FaqEntry>> {
        let response = self
            .client
            .get(self.url("/faqs"))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DeskmateError::Api(ApiError::InvalidResponse(e.to_string())))
    }

    async fn history(&self, session_id: &str) -> Result<ConversationHistory> {
        let response = self
            .client
            .get(self.url(&format!("/get_history/{}", session_id)))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if response.status().as_u16() == 404 {
            return Err(DeskmateError::Api(ApiError::SessionNotFound(
                session_id.to_string(),
            )));
        }
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DeskmateError::Api(ApiError::InvalidResponse(e.to_string())))
    }

    async fn health(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|e| DeskmateError::Api(ApiError::InvalidResponse(e.to_string())))?;
        Ok(body.is_healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let backend = HttpBackend::with_base_url("http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.url("/ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn test_default_base_url() {
        let backend = HttpBackend::new();
        assert_eq!(backend.base_url(), DEFAULT_BASE_URL);
        assert_eq!(backend.name(), "http");
    }

    #[tokio::test]
    async fn test_new_session_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/new_session"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "session_id": "sess-1"
                })),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let session_id = backend.new_session().await.unwrap();
        assert_eq!(session_id, "sess-1");
    }

    #[tokio::test]
    async fn test_new_session_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/new_session"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let err = backend.new_session().await.unwrap_err();
        match err {
            DeskmateError::Api(ApiError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ask_sends_session_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .and(body_json(serde_json::json!({
                "session_id": "sess-1",
                "query": "What are your hours?"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "response": "9-5",
                    "escalated": false
                })),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let reply = backend
            .ask(Some("sess-1"), "What are your hours?")
            .await
            .unwrap();
        assert_eq!(reply.response, "9-5");
        assert!(!reply.escalated);
    }

    #[tokio::test]
    async fn test_ask_null_session_still_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .and(body_json(serde_json::json!({
                "session_id": null,
                "query": "hello"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "response": "hi",
                    "escalated": false
                })),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let reply = backend.ask(None, "hello").await.unwrap();
        assert_eq!(reply.response, "hi");
    }

    #[tokio::test]
    async fn test_ask_escalated_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "response": "Let me connect you to a human.",
                    "escalated": true
                })),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let reply = backend.ask(Some("s"), "I want a refund now").await.unwrap();
        assert!(reply.escalated);
    }

    #[tokio::test]
    async fn test_ask_unknown_session_maps_to_session_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Session not found"))
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let err = backend.ask(Some("ghost"), "hi").await.unwrap_err();
        assert!(matches!(
            err,
            DeskmateError::Api(ApiError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ask_network_error() {
        // Connect to a server that is not listening
        let backend = HttpBackend::with_base_url("http://127.0.0.1:1");
        let err = backend.ask(Some("s"), "hi").await.unwrap_err();
        assert!(matches!(err, DeskmateError::Api(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_ask_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let err = backend.ask(Some("s"), "hi").await.unwrap_err();
        assert!(matches!(
            err,
            DeskmateError::Api(ApiError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_faqs_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/faqs"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([
                    {"id": 1, "question": "Q1", "answer": "A1", "category": "C1"},
                    {"question": "Q2", "answer": "A2", "category": "C2"}
                ])),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let faqs = backend.faqs().await.unwrap();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].id, Some(1));
        assert_eq!(faqs[1].question, "Q2");
    }

    #[tokio::test]
    async fn test_history_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_history/sess-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "session_id": "sess-1",
                    "messages": [
                        {"id": 1, "role": "user", "content": "hi",
                         "timestamp": "2025-06-15T12:00:00Z"}
                    ]
                })),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let history = backend.history("sess-1").await.unwrap();
        assert_eq!(history.session_id, "sess-1");
        assert_eq!(history.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_history_unknown_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_history/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        let err = backend.history("ghost").await.unwrap_err();
        assert!(matches!(
            err,
            DeskmateError::Api(ApiError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_health_healthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "healthy"})),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        assert!(backend.health().await.unwrap());
    }

    #[tokio::test]
    async fn test_health_non_ok_is_unhealthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let backend = HttpBackend::with_base_url(server.uri());
        assert!(!backend.health().await.unwrap());
    }
}
