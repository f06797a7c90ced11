//! Prompt and schema construction for `generateContent` requests
//!
//! Pure construction: nothing here touches the network.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::GatewayError;

/// Persona and output instructions for document analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are \"Legal AI,\" an expert legal analyst. \
Your task is to demystify a legal document for a non-technical user. \
Return a structured JSON object. The summary should be written in simple, clear language. \
Mark legal terms for highlighting by wrapping them in double angle brackets, like <<Term>>.";

/// Persona for conversational follow-up
pub const CHAT_SYSTEM_PROMPT: &str = "You are \"Legal AI,\" a helpful legal assistant. \
Answer questions about legal terms and documents in simple, clear language. \
If provided with document context, use it to give more specific answers.";

pub const CHAT_TEMPERATURE: f32 = 0.7;
pub const CHAT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Body of a `models/{model}:generateContent` call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response schema enumerating the `AnalysisResult` shape
///
/// Uses the OpenAPI subset the generative-language API accepts (uppercase
/// type names). Every field is required so the model cannot drop a section.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "legalTerms": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "term": { "type": "STRING" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["term", "explanation"]
                }
            },
            "riskAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "verdict": { "type": "STRING" },
                    "flags": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "type": { "type": "STRING" },
                                "description": { "type": "STRING" }
                            },
                            "required": ["type", "description"]
                        }
                    }
                },
                "required": ["verdict", "flags"]
            },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "comprehensionCheck": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswer": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswer"]
                }
            }
        },
        "required": [
            "summary",
            "legalTerms",
            "riskAnalysis",
            "recommendations",
            "comprehensionCheck"
        ]
    })
}

/// Build the schema-constrained analysis request for a raw document
pub fn build_analysis_request(document_text: &str) -> Result<GenerateContentRequest, GatewayError> {
    if document_text.trim().is_empty() {
        return Err(GatewayError::Validation(
            "Document text is required".to_string(),
        ));
    }

    Ok(GenerateContentRequest {
        contents: vec![Content::text(format!("Document:\n\n{}", document_text))],
        system_instruction: Content::text(ANALYSIS_SYSTEM_PROMPT),
        generation_config: GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(analysis_schema()),
            ..Default::default()
        },
    })
}

/// Build the free-form chat request
///
/// A blank context is treated as no context.
pub fn build_chat_request(
    message: &str,
    context: Option<&str>,
) -> Result<GenerateContentRequest, GatewayError> {
    if message.trim().is_empty() {
        return Err(GatewayError::Validation("Message is required".to_string()));
    }

    let prompt = match context.filter(|c| !c.trim().is_empty()) {
        Some(context) => format!("Context: {}\n\nQuestion: {}", context, message),
        None => format!("Question: {}", message),
    };

    Ok(GenerateContentRequest {
        contents: vec![Content::text(prompt)],
        system_instruction: Content::text(CHAT_SYSTEM_PROMPT),
        generation_config: GenerationConfig {
            temperature: Some(CHAT_TEMPERATURE),
            max_output_tokens: Some(CHAT_MAX_OUTPUT_TOKENS),
            ..Default::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_request_shape() {
        let request = build_analysis_request("The tenant shall pay rent.").unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "Document:\n\nThe tenant shall pay rent."
        );
        assert!(value["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("<<Term>>"));
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["properties"]["riskAnalysis"]["type"],
            "OBJECT"
        );
        // No chat tuning on the analysis path
        assert!(value["generationConfig"].get("temperature").is_none());
        assert!(value["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn test_schema_requires_every_section() {
        let schema = analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            vec![
                "summary",
                "legalTerms",
                "riskAnalysis",
                "recommendations",
                "comprehensionCheck"
            ]
        );
    }

    #[test]
    fn test_analysis_request_rejects_blank_text() {
        assert!(matches!(
            build_analysis_request(""),
            Err(GatewayError::Validation(_))
        ));
        assert!(matches!(
            build_analysis_request(" \n\t "),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn test_chat_request_with_context() {
        let request =
            build_chat_request("What is a lien?", Some("Lien: A legal claim.")).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["contents"][0]["parts"][0]["text"],
            "Context: Lien: A legal claim.\n\nQuestion: What is a lien?"
        );
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1000);
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_chat_request_without_context() {
        for context in [None, Some(""), Some("  ")] {
            let request = build_chat_request("Hello?", context).unwrap();
            assert_eq!(request.contents[0].parts[0].text, "Question: Hello?");
        }
    }

    #[test]
    fn test_chat_request_rejects_blank_message() {
        assert!(matches!(
            build_chat_request("  ", Some("ctx")),
            Err(GatewayError::Validation(_))
        ));
    }
}
