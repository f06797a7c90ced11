//! Capture page: document entry and submission
//!
//! The text lives here until it is submitted. A successful analysis is
//! written to the session carrier and the page navigates to the dashboard;
//! any failure is shown inline and the page stays put.

use legalai_common::AnalysisResult;
use tracing::{info, warn};

use crate::client::{AnalysisApi, ClientError};
use crate::routes::Route;
use crate::session::SessionCarrier;

pub const UNSUPPORTED_FILE_MESSAGE: &str = "Only .txt files are supported at this time.";
pub const EMPTY_DOCUMENT_MESSAGE: &str = "Please provide a document to analyze.";

#[derive(Debug, Default)]
pub struct CapturePage {
    document_text: String,
    error: Option<String>,
    is_analyzing: bool,
}

impl CapturePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    /// Inline error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a submission is in flight; the analyze button is disabled
    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    /// Manual entry or paste
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.document_text = text.into();
    }

    /// Accept an uploaded file's full contents
    ///
    /// Only `.txt` files are accepted; anything else leaves the current text
    /// untouched and shows an error.
    pub fn load_file(&mut self, file_name: &str, contents: &str) -> bool {
        if !file_name.ends_with(".txt") {
            self.error = Some(UNSUPPORTED_FILE_MESSAGE.to_string());
            return false;
        }

        self.document_text = contents.to_string();
        true
    }

    /// Submit the document for analysis
    ///
    /// Returns the route to navigate to on success. Blank text never reaches
    /// the network.
    pub async fn submit(
        &mut self,
        api: &dyn AnalysisApi,
        session: &mut SessionCarrier,
    ) -> Option<Route> {
        let document_text = self.begin_submit()?;
        let outcome = api.analyze(&document_text).await;
        self.complete_submit(outcome, session)
    }

    /// First half of [`submit`](Self::submit): validate and enter the
    /// analyzing state
    ///
    /// Returns the text to send, or `None` when there is nothing to send or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_analyzing {
            return None;
        }
        if self.document_text.trim().is_empty() {
            self.error = Some(EMPTY_DOCUMENT_MESSAGE.to_string());
            return None;
        }

        self.is_analyzing = true;
        self.error = None;
        Some(self.document_text.clone())
    }

    /// Second half of [`submit`](Self::submit): leave the analyzing state and
    /// apply the outcome
    pub fn complete_submit(
        &mut self,
        outcome: Result<AnalysisResult, ClientError>,
        session: &mut SessionCarrier,
    ) -> Option<Route> {
        self.is_analyzing = false;

        match outcome {
            Ok(analysis) => {
                info!(terms = analysis.legal_terms.len(), "Analysis received");
                session.store(analysis);
                Some(Route::Dashboard)
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }
}
