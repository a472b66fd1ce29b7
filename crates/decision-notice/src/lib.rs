//! Decision-notice adjudication for tribunal benefit appeals.
//!
//! The engine validates a caseworker's answers, aggregates descriptor points per activity
//! domain, and selects the single outcome condition that drives the decision-notice template.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
