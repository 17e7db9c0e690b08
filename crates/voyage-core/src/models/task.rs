//! Task model definition.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

/// A single time-boxed activity within a plan's itinerary.
///
/// Tasks are embedded in their parent [`Plan`](super::Plan) and persisted as
/// one JSON array inside the plan row. The serialized field names are
/// camelCase to match the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Client-generated identifier, assigned when the task is added to a plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Title of the activity
    pub title: String,

    /// Calendar date the task occurs on; must fall inside the trip window
    pub date: Date,

    /// Time of day the task begins
    pub start_time: Time,

    /// Time of day the task ends; strictly after `start_time`
    pub end_time: Time,

    /// Display duration ("{h}h {m}m"), derived once at creation and stored
    /// verbatim
    pub duration: String,

    /// Decimal cost string; empty means zero wherever it is aggregated
    pub cost: String,
}
