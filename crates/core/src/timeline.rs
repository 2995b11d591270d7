//! Timeline event record shape.

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Resource};

/// One event on the archive timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

impl Resource for TimelineEvent {
    const COLLECTION: &'static str = "TimelineEvents";
}
