//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates the ports.
//! Command handlers (write) are separated from query handlers (read).

pub mod handlers;

pub use handlers::{
    GetStatsHandler, ListFeedbackHandler, SubmitFeedbackCommand, SubmitFeedbackHandler,
};
