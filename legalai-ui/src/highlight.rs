//! Glossary term highlighting in the summary
//!
//! Each `<<term>>` span becomes an interactive element. Activating one sends
//! a [`TermLookup`] over an explicit channel to the chat assistant.

use legalai_common::glossary::{self, Segment};
use legalai_common::LegalTerm;
use tokio::sync::mpsc;
use tracing::debug;

/// Request for the assistant to explain a glossary term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermLookup {
    pub term: String,
}

pub type TermLookupSender = mpsc::UnboundedSender<TermLookup>;
pub type TermLookupReceiver = mpsc::UnboundedReceiver<TermLookup>;

/// Channel connecting a highlighter to an assistant
pub fn term_lookup_channel() -> (TermLookupSender, TermLookupReceiver) {
    mpsc::unbounded_channel()
}

/// Render a summary as HTML with every delimited term as a clickable span
pub fn render_summary_html(summary: &str) -> String {
    let mut html = String::with_capacity(summary.len() + 64);
    for segment in glossary::parse_summary(summary) {
        match segment {
            Segment::Text(text) => html.push_str(&escape_html(text)),
            Segment::Term(term) => {
                let term = escape_html(term);
                html.push_str(&format!(
                    r#"<span class="legal-term" data-term="{}">{}</span>"#,
                    term, term
                ));
            }
        }
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Summary with interactive glossary terms
pub struct SummaryHighlighter {
    summary: String,
    glossary: Vec<LegalTerm>,
    lookups: TermLookupSender,
}

impl SummaryHighlighter {
    pub fn new(summary: &str, glossary: &[LegalTerm], lookups: TermLookupSender) -> Self {
        Self {
            summary: summary.to_string(),
            glossary: glossary.to_vec(),
            lookups,
        }
    }

    pub fn render_html(&self) -> String {
        render_summary_html(&self.summary)
    }

    /// Labels of the interactive spans, in order of first appearance
    pub fn terms(&self) -> Vec<&str> {
        glossary::referenced_terms(&self.summary)
    }

    /// Handle a click on a highlighted term
    ///
    /// Terms the glossary does not define are inert. Returns whether a lookup
    /// was dispatched.
    pub fn activate(&self, term: &str) -> bool {
        if !self.glossary.iter().any(|t| t.term == term) {
            debug!(term, "Ignoring activation of term missing from glossary");
            return false;
        }

        self.lookups
            .send(TermLookup {
                term: term.to_string(),
            })
            .is_ok()
    }
}
