//! Plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Task;

/// A trip plan with a date range, optional photo, and its itinerary.
///
/// The plan row is the sole unit of persistence: tasks travel with it as an
/// atomic embedded collection and are never queried across plans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Store-assigned identifier; `None` until the plan is first persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display title of the trip
    pub title: String,

    /// First day of the trip
    pub start_date: Date,

    /// Last day of the trip, inclusive; never before `start_date` once saved
    pub end_date: Date,

    /// Optional local file reference for the cover photo
    pub image_url: Option<String>,

    /// Owned itinerary, kept sorted by the write path
    #[serde(default)]
    pub tasks: Vec<Task>,
}
