//! Wire types for the schedule service REST API.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sr_domain::schedule::{ScheduleFields, ScheduleRecord, Weekday};

/// Body of `POST /api/schedules` and `PUT /api/schedules/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePayload {
    pub topic: String,
    pub time: String,
    pub days: BTreeSet<Weekday>,
    pub description: String,
}

impl From<ScheduleFields> for SchedulePayload {
    fn from(fields: ScheduleFields) -> Self {
        Self {
            topic: fields.topic,
            time: fields.time,
            days: fields.days,
            description: fields.description,
        }
    }
}

/// A schedule as the service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub topic: String,
    pub time: String,
    pub days: BTreeSet<Weekday>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ScheduleResponse> for ScheduleRecord {
    fn from(resp: ScheduleResponse) -> Self {
        Self {
            id: resp.id,
            fields: ScheduleFields {
                topic: resp.topic,
                time: resp.time,
                days: resp.days,
                description: resp.description,
            },
            created_at: resp.created_at,
            updated_at: resp.updated_at,
        }
    }
}
