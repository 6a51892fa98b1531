//! Feedback Collector - Feedback collection API with sentiment analysis.
//!
//! This crate collects free-text product feedback, classifies its sentiment
//! through keyword and phrase matching, and exposes aggregate statistics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
