//! Analysis result data model
//!
//! One `AnalysisResult` is produced per analysis request and is immutable
//! afterwards. Field names on the wire are camelCase, matching the response
//! schema the model is constrained to.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Structured analysis of a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Plain-language summary; glossary terms are wrapped in `<<` and `>>`
    pub summary: String,

    /// Glossary of legal terms, in the order the model returned them
    #[serde(default)]
    pub legal_terms: Vec<LegalTerm>,

    /// Overall verdict plus individual risk flags
    #[serde(default)]
    pub risk_analysis: RiskAnalysis,

    /// Actionable recommendations for the reader
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Multiple-choice comprehension quiz
    #[serde(default)]
    pub comprehension_check: Vec<QuizQuestion>,
}

/// Glossary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalTerm {
    pub term: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub flags: Vec<RiskFlag>,
}

/// A single risk flag (`type` is free text chosen by the model, e.g. "High Risk")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl AnalysisResult {
    /// Parse and validate an analysis from its JSON text form
    pub fn from_json(text: &str) -> Result<Self> {
        let result: AnalysisResult =
            serde_json::from_str(text).map_err(|e| Error::Malformed(e.to_string()))?;
        result.validate()?;
        Ok(result)
    }

    /// Check the invariants serde cannot express
    ///
    /// The summary is the one field every page relies on, so an empty one is
    /// rejected rather than rendered.
    pub fn validate(&self) -> Result<()> {
        if self.summary.trim().is_empty() {
            return Err(Error::Malformed("summary is empty".to_string()));
        }
        Ok(())
    }

    /// Look up a glossary entry by its exact term
    pub fn term(&self, term: &str) -> Option<&LegalTerm> {
        self.legal_terms.iter().find(|t| t.term == term)
    }
}
