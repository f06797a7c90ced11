//! Session carrier: the single-slot handoff of the current analysis
//!
//! The capture page writes the slot after a successful analysis; every
//! presentation page reads it. There is no clear operation: the slot empties
//! only when the session itself ends. Writes are last-write-wins.

use std::sync::Arc;

use legalai_common::AnalysisResult;
use tracing::{debug, warn};

/// Key under which the serialized analysis is kept in tab-scoped storage
pub const STORAGE_KEY: &str = "analysisData";

/// Typed view of the slot
#[derive(Debug, Clone, PartialEq)]
pub enum Carried {
    Absent,
    Present(Arc<AnalysisResult>),
}

impl Carried {
    pub fn is_present(&self) -> bool {
        matches!(self, Carried::Present(_))
    }
}

/// Application-state container passed by reference to each page
#[derive(Debug, Default)]
pub struct SessionCarrier {
    slot: Option<Arc<AnalysisResult>>,
}

impl SessionCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever analysis was stored before
    pub fn store(&mut self, analysis: AnalysisResult) {
        if self.slot.is_some() {
            debug!("Replacing stored analysis");
        }
        self.slot = Some(Arc::new(analysis));
    }

    pub fn current(&self) -> Carried {
        match &self.slot {
            Some(analysis) => Carried::Present(Arc::clone(analysis)),
            None => Carried::Absent,
        }
    }

    /// Serialized form for tab-scoped storage under [`STORAGE_KEY`]
    pub fn to_storage(&self) -> Option<String> {
        let analysis = self.slot.as_ref()?;
        match serde_json::to_string(analysis.as_ref()) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!("Failed to serialize stored analysis: {}", e);
                None
            }
        }
    }

    /// Rehydrate from tab-scoped storage
    ///
    /// Missing or malformed stored data yields an empty carrier, which the
    /// pages treat as "go back to the capture page".
    pub fn restore(stored: Option<&str>) -> Self {
        let slot = stored.and_then(|json| match AnalysisResult::from_json(json) {
            Ok(analysis) => Some(Arc::new(analysis)),
            Err(e) => {
                warn!("Discarding malformed stored analysis: {}", e);
                None
            }
        });
        Self { slot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalai_common::RiskAnalysis;

    fn analysis(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            legal_terms: vec![],
            risk_analysis: RiskAnalysis::default(),
            recommendations: vec![],
            comprehension_check: vec![],
        }
    }

    #[test]
    fn test_starts_absent() {
        let carrier = SessionCarrier::new();
        assert_eq!(carrier.current(), Carried::Absent);
        assert!(carrier.to_storage().is_none());
    }

    #[test]
    fn test_store_overwrites() {
        let mut carrier = SessionCarrier::new();
        carrier.store(analysis("first"));
        carrier.store(analysis("second"));

        match carrier.current() {
            Carried::Present(a) => assert_eq!(a.summary, "second"),
            Carried::Absent => panic!("expected stored analysis"),
        }
    }

    #[test]
    fn test_storage_round_trip() {
        let mut carrier = SessionCarrier::new();
        carrier.store(analysis("kept"));

        let stored = carrier.to_storage().unwrap();
        let restored = SessionCarrier::restore(Some(&stored));
        assert_eq!(restored.current(), carrier.current());
    }

    #[test]
    fn test_restore_malformed_is_absent() {
        assert!(!SessionCarrier::restore(Some("{not json")).current().is_present());
        assert!(!SessionCarrier::restore(Some(r#"{"summary": ""}"#)).current().is_present());
        assert!(!SessionCarrier::restore(None).current().is_present());
    }
}
