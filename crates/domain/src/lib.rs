//! Shared domain types for the StudyRemind workspace: the schedule model,
//! the common error type, and client configuration.

pub mod config;
pub mod error;
pub mod schedule;
