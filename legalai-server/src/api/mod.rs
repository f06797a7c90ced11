//! HTTP API handlers for legalai-server

pub mod analyze;
pub mod chat;
pub mod health;

pub use analyze::analyze_routes;
pub use chat::chat_routes;
pub use health::health_routes;
