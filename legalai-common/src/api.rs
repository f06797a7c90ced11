//! Request and response bodies for the analysis service routes

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// POST /api/analyze request body
///
/// `documentText` defaults to empty when missing or `null`, so the handler
/// reports it as a validation error rather than a framework rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub document_text: String,
}

/// POST /api/chat request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Glossary-derived context, one `term: explanation` line per entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// POST /api/chat success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body returned by every route on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, suitable for showing to the user
    pub error: String,
    /// Stable machine-readable error code
    #[serde(default)]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_uses_camel_case() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"documentText": "abc"}"#).unwrap();
        assert_eq!(req.document_text, "abc");
    }

    #[test]
    fn test_analyze_request_missing_field_is_empty() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.document_text.is_empty());
    }

    #[test]
    fn test_null_fields_are_empty() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"documentText": null}"#).unwrap();
        assert!(req.document_text.is_empty());

        let req: ChatRequest =
            serde_json::from_str(r#"{"message": null, "context": null}"#).unwrap();
        assert!(req.message.is_empty());
        assert_eq!(req.context, None);
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        assert!(serde_json::from_str::<AnalyzeRequest>(r#"{"documentText": 42}"#).is_err());
    }

    #[test]
    fn test_chat_request_omits_absent_context() {
        let req = ChatRequest {
            message: "hi".to_string(),
            context: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"message":"hi"}"#);
    }
}
