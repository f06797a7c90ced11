//! # Legal AI Common Library
//!
//! Shared code for the Legal AI analysis service and its client:
//! - Analysis result data model
//! - Request/response types for the HTTP routes
//! - Glossary delimiter parsing and chat context helpers
//! - Configuration loading
//! - Common error type

pub mod analysis;
pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod glossary;

pub use analysis::{AnalysisResult, LegalTerm, QuizQuestion, RiskAnalysis, RiskFlag};
pub use chat::{ChatMessage, Sender};
pub use error::{Error, Result};
