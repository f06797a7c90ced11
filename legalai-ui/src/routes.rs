//! Page routes

/// Every page the front end can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    /// Capture page: upload or paste a document
    Analyze,
    Dashboard,
    RiskAnalysis,
    KeyTerms,
    ComprehensionCheck,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Analyze => "/analyze",
            Route::Dashboard => "/dashboard",
            Route::RiskAnalysis => "/risk-analysis",
            Route::KeyTerms => "/key-terms",
            Route::ComprehensionCheck => "/comprehension-check",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Home),
            "/analyze" => Some(Route::Analyze),
            "/dashboard" => Some(Route::Dashboard),
            "/risk-analysis" => Some(Route::RiskAnalysis),
            "/key-terms" => Some(Route::KeyTerms),
            "/comprehension-check" => Some(Route::ComprehensionCheck),
            _ => None,
        }
    }

    /// Pages that render the current analysis and need one to exist
    pub fn requires_analysis(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::RiskAnalysis | Route::KeyTerms | Route::ComprehensionCheck
        )
    }
}
