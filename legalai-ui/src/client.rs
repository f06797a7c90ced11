//! HTTP client for the analysis service routes
//!
//! The pages talk to the service through [`AnalysisApi`] so they can be
//! exercised without a server; [`HttpApiClient`] is the real implementation.

use async_trait::async_trait;
use legalai_common::api::{AnalyzeRequest, ChatRequest, ChatResponse, ErrorResponse};
use legalai_common::AnalysisResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status; `message` is the
    /// service's own error text and is shown to the user as-is
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from server: {0}")]
    Decode(String),
}

/// Operations the pages need from the analysis service
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// POST /api/analyze
    async fn analyze(&self, document_text: &str) -> Result<AnalysisResult, ClientError>;

    /// POST /api/chat, returning the assistant's answer text
    async fn chat(&self, request: &ChatRequest) -> Result<String, ClientError>;
}

/// reqwest-backed [`AnalysisApi`]
pub struct HttpApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// `base_url` is the service origin, e.g. "http://127.0.0.1:3000"
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, route: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, route);
        debug!(%url, "POST");

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            warn!(status = status.as_u16(), %message, "{} failed", route);
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AnalysisApi for HttpApiClient {
    async fn analyze(&self, document_text: &str) -> Result<AnalysisResult, ClientError> {
        let request = AnalyzeRequest {
            document_text: document_text.to_string(),
        };
        let analysis: AnalysisResult = self
            .post_json("/api/analyze", &request, "Analysis failed")
            .await?;
        analysis
            .validate()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(analysis)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, ClientError> {
        let response: ChatResponse = self.post_json("/api/chat", request, "Chat failed").await?;
        Ok(response.response)
    }
}
