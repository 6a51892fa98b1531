//! PostgreSQL adapters.

mod feedback_store;

pub use feedback_store::PostgresFeedbackStore;
