//! HttpApiClient against a mock analysis service

use legalai_common::api::ChatRequest;
use legalai_ui::{AnalysisApi, ClientError, HttpApiClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> HttpApiClient {
    HttpApiClient::new(format!("{}/", server.uri())).unwrap()
}

#[tokio::test]
async fn test_analyze_posts_document_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(json!({ "documentText": "The tenant pays rent." })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "A <<Lease>>.",
            "legalTerms": [{ "term": "Lease", "explanation": "A rental contract." }],
            "riskAnalysis": { "verdict": "Fair", "flags": [] },
            "recommendations": [],
            "comprehensionCheck": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = client_for(&server)
        .await
        .analyze("The tenant pays rent.")
        .await
        .unwrap();

    assert_eq!(analysis.summary, "A <<Lease>>.");
    assert_eq!(analysis.legal_terms[0].term, "Lease");
}

#[tokio::test]
async fn test_analyze_error_message_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "API Error (429): Resource has been exhausted",
            "code": "UPSTREAM_ERROR"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.analyze("x").await.unwrap_err();

    assert!(matches!(err, ClientError::Service { status: 500, .. }));
    assert_eq!(err.to_string(), "API Error (429): Resource has been exhausted");
}

#[tokio::test]
async fn test_analyze_error_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.analyze("x").await.unwrap_err();
    assert_eq!(err.to_string(), "Analysis failed");
}

#[tokio::test]
async fn test_analyze_rejects_blank_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "" })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.analyze("x").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_chat_returns_response_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "message": "What is a lien?",
            "context": "Lien: A claim on property."
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "A legal claim." })),
        )
        .mount(&server)
        .await;

    let request = ChatRequest {
        message: "What is a lien?".to_string(),
        context: Some("Lien: A claim on property.".to_string()),
    };
    let answer = client_for(&server).await.chat(&request).await.unwrap();

    assert_eq!(answer, "A legal claim.");
}

#[tokio::test]
async fn test_chat_failure_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = ChatRequest {
        message: "Hi".to_string(),
        context: None,
    };
    let err = client_for(&server).await.chat(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Chat failed");
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let client = HttpApiClient::new("http://127.0.0.1:1").unwrap();
    let err = client.analyze("x").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
