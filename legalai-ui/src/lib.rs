//! Client-side state for the Legal AI browser pages
//!
//! Holds everything the pages share between navigations:
//! - [`session::SessionCarrier`] - single-slot handoff of the current analysis
//! - [`capture::CapturePage`] - document entry and submission
//! - [`pages`] - dashboard, risk, key terms and quiz views
//! - [`highlight`] / [`assistant`] - glossary links and the chat assistant
//! - [`client`] - HTTP client for the analysis service routes

pub mod assistant;
pub mod capture;
pub mod client;
pub mod highlight;
pub mod pages;
pub mod quiz;
pub mod routes;
pub mod session;

pub use client::{AnalysisApi, ClientError, HttpApiClient};
pub use routes::Route;
pub use session::{Carried, SessionCarrier};
