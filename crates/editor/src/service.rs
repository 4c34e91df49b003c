//! Collaborator contracts consumed by the editor.

use async_trait::async_trait;
use sr_domain::error::Result;
use sr_domain::schedule::{ScheduleFields, ScheduleRecord};
use uuid::Uuid;

/// Abstraction over the remote schedule service.
///
/// Implementations may talk to the real REST API or a test double. The
/// editor calls each method at most once per submit action and performs no
/// retry of its own; whether the transport retries internally is its own
/// business.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Create a new schedule from the submitted fields.
    async fn create(&self, fields: ScheduleFields) -> Result<ScheduleRecord>;

    /// Update the schedule identified by `id` with the submitted fields.
    async fn update(&self, id: Uuid, fields: ScheduleFields) -> Result<ScheduleRecord>;
}

/// Fire-and-forget sink for user-facing messages.
///
/// The editor uses it only for submission failures; sinks must not block
/// and must never fail back into the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
