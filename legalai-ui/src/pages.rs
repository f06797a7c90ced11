//! Presentation pages
//!
//! Each page is built from the session carrier. With no stored analysis the
//! page does not render at all; it redirects to the capture page instead.

use std::sync::Arc;

use legalai_common::{AnalysisResult, LegalTerm, RiskFlag};

use crate::assistant::ChatAssistant;
use crate::highlight::{term_lookup_channel, SummaryHighlighter};
use crate::quiz::Quiz;
use crate::routes::Route;
use crate::session::{Carried, SessionCarrier};

/// Result of loading a page
pub enum PageOutcome<T> {
    Render(T),
    Redirect(Route),
}

impl<T> PageOutcome<T> {
    fn load(session: &SessionCarrier, build: impl FnOnce(Arc<AnalysisResult>) -> T) -> Self {
        match session.current() {
            Carried::Present(analysis) => PageOutcome::Render(build(analysis)),
            Carried::Absent => PageOutcome::Redirect(Route::Analyze),
        }
    }

    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            PageOutcome::Render(_) => None,
            PageOutcome::Redirect(route) => Some(*route),
        }
    }

    pub fn into_view(self) -> Option<T> {
        match self {
            PageOutcome::Render(view) => Some(view),
            PageOutcome::Redirect(_) => None,
        }
    }
}

/// Where navigation to `route` should actually land
pub fn guard(route: Route, session: &SessionCarrier) -> Route {
    if route.requires_analysis() && !session.current().is_present() {
        Route::Analyze
    } else {
        route
    }
}

/// Dashboard: summary with glossary links, section cards, recommendations
/// and the chat assistant
pub struct DashboardView {
    analysis: Arc<AnalysisResult>,
    pub highlighter: SummaryHighlighter,
    pub assistant: ChatAssistant,
}

impl DashboardView {
    pub fn load(session: &SessionCarrier) -> PageOutcome<Self> {
        PageOutcome::load(session, |analysis| {
            let (tx, rx) = term_lookup_channel();
            let highlighter =
                SummaryHighlighter::new(&analysis.summary, &analysis.legal_terms, tx);
            let assistant = ChatAssistant::new(&analysis.legal_terms).with_lookups(rx);
            Self {
                analysis,
                highlighter,
                assistant,
            }
        })
    }

    pub fn summary_html(&self) -> String {
        self.highlighter.render_html()
    }

    pub fn verdict(&self) -> &str {
        &self.analysis.risk_analysis.verdict
    }

    pub fn term_count_label(&self) -> String {
        format!("{} terms identified.", self.analysis.legal_terms.len())
    }

    pub fn recommendations(&self) -> &[String] {
        &self.analysis.recommendations
    }
}

pub struct RiskAnalysisView {
    analysis: Arc<AnalysisResult>,
}

impl RiskAnalysisView {
    pub fn load(session: &SessionCarrier) -> PageOutcome<Self> {
        PageOutcome::load(session, |analysis| Self { analysis })
    }

    pub fn verdict(&self) -> &str {
        &self.analysis.risk_analysis.verdict
    }

    pub fn flags(&self) -> &[RiskFlag] {
        &self.analysis.risk_analysis.flags
    }
}

pub struct KeyTermsView {
    analysis: Arc<AnalysisResult>,
}

impl KeyTermsView {
    pub fn load(session: &SessionCarrier) -> PageOutcome<Self> {
        PageOutcome::load(session, |analysis| Self { analysis })
    }

    pub fn terms(&self) -> &[LegalTerm] {
        &self.analysis.legal_terms
    }
}

pub struct ComprehensionCheckView {
    pub quiz: Quiz,
}

impl ComprehensionCheckView {
    pub fn load(session: &SessionCarrier) -> PageOutcome<Self> {
        PageOutcome::load(session, |analysis| Self {
            quiz: Quiz::new(analysis.comprehension_check.clone()),
        })
    }
}
