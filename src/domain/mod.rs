//! Domain layer - core business logic.
//!
//! Contains the sentiment classifier and the feedback record model. This
//! layer has no knowledge of HTTP or the database; persistence goes through
//! the ports.

pub mod feedback;
