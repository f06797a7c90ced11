//! Glossary delimiter handling
//!
//! The model marks legal terms in the summary as `<<Term>>`. This module
//! splits a summary into plain and term segments, builds the chat context
//! string from a glossary, and performs the local keyword match the chat
//! assistant falls back to when the service is unavailable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::LegalTerm;

/// Opening glossary delimiter
pub const TERM_OPEN: &str = "<<";
/// Closing glossary delimiter
pub const TERM_CLOSE: &str = ">>";

// Non-greedy so adjacent terms on one line stay separate
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<<(.+?)>>").expect("term pattern is a valid regex")
});

/// Piece of a summary after delimiter parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Term(&'a str),
}

/// Split a summary into text and term segments, preserving order
///
/// Unterminated delimiters are left as literal text.
pub fn parse_summary(summary: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in TERM_PATTERN.captures_iter(summary) {
        let (Some(whole), Some(term)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(Segment::Text(&summary[cursor..whole.start()]));
        }
        segments.push(Segment::Term(term.as_str()));
        cursor = whole.end();
    }

    if cursor < summary.len() {
        segments.push(Segment::Text(&summary[cursor..]));
    }

    segments
}

/// Terms referenced in a summary, in order of first appearance
pub fn referenced_terms(summary: &str) -> Vec<&str> {
    let mut terms: Vec<&str> = Vec::new();
    for segment in parse_summary(summary) {
        if let Segment::Term(term) = segment {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }
    terms
}

/// Build the chat context string: one `term: explanation` line per entry
pub fn build_context(terms: &[LegalTerm]) -> String {
    terms
        .iter()
        .map(|t| format!("{}: {}", t.term, t.explanation))
        .collect::<Vec<_>>()
        .join("\n")
}

/// First glossary entry whose term occurs in the message (case-insensitive)
pub fn find_local_match<'a>(message: &str, terms: &'a [LegalTerm]) -> Option<&'a LegalTerm> {
    let message = message.to_lowercase();
    terms
        .iter()
        .find(|t| !t.term.is_empty() && message.contains(&t.term.to_lowercase()))
}

/// The question the assistant asks when a highlighted term is activated
pub fn term_question(term: &str) -> String {
    format!("What does \"{}\" mean?", term)
}
