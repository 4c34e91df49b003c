//! Collaborator implementations for the schedule editor: a REST-backed
//! schedule service and notification sinks.

pub mod notify;
pub mod rest;
pub mod types;

pub use notify::{BroadcastNotifier, LogNotifier};
pub use rest::RestScheduleClient;
