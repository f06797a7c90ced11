//! Model gateway: outbound calls to the generative-language API
//!
//! Two operations share one endpoint:
//! - `analyze_document` - schema-constrained JSON analysis
//! - `ask_follow_up` - free-form chat answer
//!
//! Each is a single POST with the API key as the `key` query parameter. There
//! is no retry, caching, deduplication or rate limiting, and no timeout
//! beyond the transport defaults.

pub mod normalizer;
pub mod prompt;

use legalai_common::config::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use legalai_common::AnalysisResult;
use thiserror::Error;
use tracing::{debug, info, warn};

use normalizer::GenerateContentResponse;
use prompt::GenerateContentRequest;

const USER_AGENT: &str = concat!("legalai-server/", env!("CARGO_PKG_VERSION"));

/// Gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Caller-side input problem; nothing was sent
    #[error("{0}")]
    Validation(String),

    #[error("API key not configured. Please add GEMINI_API_KEY to your environment variables.")]
    Configuration,

    /// Non-success HTTP status from the model service
    #[error("API Error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("The AI returned an empty or invalid response.")]
    EmptyResponse,

    /// Candidate text was not a valid analysis
    #[error("The AI returned malformed analysis data: {0}")]
    Parse(String),

    /// Transport failure before any status was received
    #[error("Failed to reach the model service: {0}")]
    Network(String),
}

/// Connection settings for the model service
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
}

impl GatewaySettings {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Model service client
pub struct ModelGateway {
    http_client: reqwest::Client,
    settings: GatewaySettings,
}

impl ModelGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn has_api_key(&self) -> bool {
        self.settings.api_key.is_some()
    }

    /// Analyze a raw document into a typed `AnalysisResult`
    pub async fn analyze_document(&self, document_text: &str) -> Result<AnalysisResult, GatewayError> {
        let request = prompt::build_analysis_request(document_text)?;

        debug!(chars = document_text.len(), "Submitting document for analysis");

        let response = self.generate(&request).await?;
        let text = normalizer::extract_text(response)?;
        let analysis = normalizer::parse_analysis(&text)?;

        info!(
            terms = analysis.legal_terms.len(),
            flags = analysis.risk_analysis.flags.len(),
            questions = analysis.comprehension_check.len(),
            "Document analysis complete"
        );

        Ok(analysis)
    }

    /// Answer a follow-up question, optionally grounded in glossary context
    pub async fn ask_follow_up(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<String, GatewayError> {
        let request = prompt::build_chat_request(message, context)?;

        debug!(
            chars = message.len(),
            has_context = context.is_some(),
            "Submitting follow-up question"
        );

        let response = self.generate(&request).await?;
        normalizer::extract_text(response)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.api_base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(GatewayError::Configuration)?;

        // The key travels in the query string, so strip URLs from transport
        // errors before they reach logs or responses.
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.without_url().to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = normalizer::upstream_message(&body);
            warn!(status = status.as_u16(), %message, "Model service returned an error");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        // A 200 whose body is not a generateContent reply counts as empty
        response.json::<GenerateContentResponse>().await.map_err(|e| {
            warn!("Unreadable model service response: {}", e.without_url());
            GatewayError::EmptyResponse
        })
    }
}
