//! Pure itinerary transformations over an in-memory task list.
//!
//! This module is stateless and never touches storage: it sorts a plan's
//! tasks chronologically, validates new tasks against the trip window,
//! derives display durations, normalizes costs, aggregates the budget, and
//! groups tasks by calendar date for display. All state lives in the
//! caller-held task collection, which is only durable once written back
//! through [`crate::db::Database`].

use jiff::civil::{Date, Time};

use crate::{
    error::{PlannerError, Result},
    models::{Plan, Task},
    params::TaskCreate,
};

/// Sorts tasks chronologically by `(date, start hour, start minute)`.
///
/// The sort is stable, so tasks sharing a date and start time keep their
/// insertion order. Idempotent by construction.
pub fn sort_tasks(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by_key(|task| (task.date, task.start_time.hour(), task.start_time.minute()));
    tasks
}

/// Validates a prospective task against its plan's trip window.
///
/// The task date comparison is on calendar dates, so a task on the last day
/// of the trip is accepted regardless of its start time.
pub fn validate_new_task(plan: &Plan, params: &TaskCreate) -> Result<()> {
    if params.title.trim().is_empty() {
        return Err(PlannerError::validation("title", "title must not be empty"));
    }
    if params.date < plan.start_date || params.date > plan.end_date {
        return Err(PlannerError::validation(
            "date",
            "task date must fall within the trip duration",
        ));
    }
    if params.end_time <= params.start_time {
        return Err(PlannerError::validation(
            "end_time",
            "end time must be after start time",
        ));
    }
    Ok(())
}

/// Computes the display duration between two times of day.
///
/// Whole hours and remaining whole minutes, floor semantics. Validation
/// rejects non-positive spans before this is ever called.
pub fn derive_duration(start_time: Time, end_time: Time) -> String {
    let total_minutes = minutes_of(end_time) - minutes_of(start_time);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{hours}h {minutes}m")
}

fn minutes_of(time: Time) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Maps a blank cost input to `"0"`, passing anything else through as-is.
///
/// No numeric validation happens here; malformed strings surface as zero at
/// aggregation and display time.
pub fn normalize_cost(cost: &str) -> String {
    if cost.trim().is_empty() {
        "0".to_string()
    } else {
        cost.to_string()
    }
}

/// Parses a single cost string, treating empty or unparsable input as zero.
pub fn parse_cost(cost: &str) -> f64 {
    cost.trim().parse::<f64>().unwrap_or(0.0)
}

/// Sums the costs of all tasks into the plan's running budget.
pub fn compute_budget(tasks: &[Task]) -> f64 {
    tasks.iter().map(|task| parse_cost(&task.cost)).sum()
}

/// Groups an already-sorted task slice by calendar date.
///
/// Emits a new group each time the date changes moving through the input;
/// does not sort internally, so callers must pass tasks through
/// [`sort_tasks`] first (the write path keeps persisted plans sorted).
pub fn group_by_date(tasks: &[Task]) -> Vec<(Date, Vec<&Task>)> {
    let mut groups: Vec<(Date, Vec<&Task>)> = Vec::new();

    for task in tasks {
        match groups.last_mut() {
            Some((date, group)) if *date == task.date => group.push(task),
            _ => groups.push((task.date, vec![task])),
        }
    }

    groups
}

#[cfg(test)]
mod tests;
