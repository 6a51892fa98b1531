//! HTTP adapter - REST API implementation.
//!
//! Exposes the feedback domain via REST:
//! - `GET|HEAD /` - Liveness message
//! - `POST /feedback` - Submit feedback
//! - `GET /feedback` - List all feedback records
//! - `GET /stats` - Aggregate statistics

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

// Re-export key types for convenience
pub use handlers::FeedbackAppState;
pub use routes::{cors_layer, feedback_router};
