//! Floating chat assistant
//!
//! Questions go to the chat route with the glossary as context. When the
//! route fails the assistant answers from the glossary itself, so the user
//! never sees a raw service error here.

use legalai_common::api::ChatRequest;
use legalai_common::glossary;
use legalai_common::{ChatMessage, LegalTerm};
use tracing::{debug, warn};

use crate::client::{AnalysisApi, ClientError};
use crate::highlight::TermLookupReceiver;

pub const GREETING: &str =
    "Hello! I can help explain legal terms and answer questions about your analyzed document.";

pub const FALLBACK_MESSAGE: &str = "I can help explain legal terms from your analyzed document. \
Please ask about specific terms or concepts.";

pub struct ChatAssistant {
    is_open: bool,
    transcript: Vec<ChatMessage>,
    input: String,
    is_typing: bool,
    glossary: Vec<LegalTerm>,
    lookups: Option<TermLookupReceiver>,
}

impl ChatAssistant {
    /// New, closed assistant whose transcript starts with the greeting
    pub fn new(glossary: &[LegalTerm]) -> Self {
        Self {
            is_open: false,
            transcript: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
            is_typing: false,
            glossary: glossary.to_vec(),
            lookups: None,
        }
    }

    /// Receive term lookups from a summary highlighter
    pub fn with_lookups(mut self, lookups: TermLookupReceiver) -> Self {
        self.lookups = Some(lookups);
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// True while waiting for an answer; the send button is disabled
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Send whatever is in the input box
    pub async fn submit(&mut self, api: &dyn AnalysisApi) -> bool {
        let message = self.input.trim().to_string();
        self.ask(api, &message).await
    }

    /// Explain a term activated in the summary
    pub async fn lookup_term(&mut self, api: &dyn AnalysisApi, term: &str) -> bool {
        self.open();
        let question = glossary::term_question(term);
        self.input = question.clone();
        self.ask(api, &question).await
    }

    /// Handle every lookup queued by the highlighter; returns how many ran
    pub async fn process_lookups(&mut self, api: &dyn AnalysisApi) -> usize {
        let mut pending = Vec::new();
        if let Some(lookups) = self.lookups.as_mut() {
            while let Ok(lookup) = lookups.try_recv() {
                pending.push(lookup.term);
            }
        }

        let count = pending.len();
        for term in pending {
            self.lookup_term(api, &term).await;
        }
        count
    }

    /// Ask a question; blank messages are ignored
    pub async fn ask(&mut self, api: &dyn AnalysisApi, message: &str) -> bool {
        let Some(request) = self.begin_ask(message) else {
            return false;
        };
        let outcome = api.chat(&request).await;
        self.complete_ask(&request.message, outcome);
        true
    }

    /// First half of [`ask`](Self::ask): record the question and enter the
    /// typing state
    ///
    /// Returns the request to send, or `None` for a blank message.
    pub fn begin_ask(&mut self, message: &str) -> Option<ChatRequest> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(message));
        self.input.clear();
        self.is_typing = true;

        let context = glossary::build_context(&self.glossary);
        Some(ChatRequest {
            message: message.to_string(),
            context: Some(context).filter(|c| !c.is_empty()),
        })
    }

    /// Second half of [`ask`](Self::ask): append the answer, or the local
    /// fallback when the chat route failed, and leave the typing state
    pub fn complete_ask(&mut self, message: &str, outcome: Result<String, ClientError>) {
        let reply = match outcome {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Chat request failed, answering from glossary: {}", e);
                self.local_answer(message)
            }
        };

        self.transcript.push(ChatMessage::assistant(reply));
        self.is_typing = false;
    }

    fn local_answer(&self, message: &str) -> String {
        match glossary::find_local_match(message, &self.glossary) {
            Some(term) => {
                debug!(term = %term.term, "Local glossary match");
                term.explanation.clone()
            }
            None => FALLBACK_MESSAGE.to_string(),
        }
    }
}
