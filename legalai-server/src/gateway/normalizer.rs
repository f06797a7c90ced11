//! Response normalization for `generateContent` replies
//!
//! Extracts the first candidate's text and, on the analysis path, turns it
//! into a typed `AnalysisResult`. An empty reply and an unparseable reply are
//! reported as different errors so the caller can word them differently.

use legalai_common::AnalysisResult;
use serde::Deserialize;

use super::GatewayError;

/// Upstream success body (only the fields we read)
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Upstream error body: `{"error": {"code": 400, "message": "...", "status": "..."}}`
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

/// Text of the first part of the first candidate
pub fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(GatewayError::EmptyResponse)
}

/// Parse candidate text as an analysis; any mismatch discards the whole reply
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, GatewayError> {
    AnalysisResult::from_json(text).map_err(|e| GatewayError::Parse(e.to_string()))
}

/// Human-readable message from an upstream error body
pub fn upstream_message(body: &str) -> String {
    serde_json::from_str::<UpstreamErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_text_first_candidate() {
        let resp = response(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }));
        assert_eq!(extract_text(resp).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_empty_variants() {
        let cases = [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{}]}}]}),
            json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]}),
        ];
        for case in cases {
            assert!(matches!(
                extract_text(response(case)),
                Err(GatewayError::EmptyResponse)
            ));
        }
    }

    #[test]
    fn test_parse_analysis_invalid_json() {
        let err = parse_analysis("not json at all").unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn test_parse_analysis_wrong_shape() {
        let err = parse_analysis(r#"{"summary": 42}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn test_parse_analysis_ok() {
        let result = parse_analysis(r#"{"summary": "A <<Lease>>.", "legalTerms": []}"#).unwrap();
        assert_eq!(result.summary, "A <<Lease>>.");
    }

    #[test]
    fn test_upstream_message() {
        assert_eq!(
            upstream_message(r#"{"error": {"code": 403, "message": "API key not valid."}}"#),
            "API key not valid."
        );
        assert_eq!(upstream_message(r#"{"error": {}}"#), "Unknown error");
        assert_eq!(upstream_message("<html>502</html>"), "Unknown error");
        assert_eq!(upstream_message(""), "Unknown error");
    }
}
