//! Task operations for the Planner.
//!
//! This is the only write path with business rules: a task mutation stages
//! the new list in memory, runs it through the itinerary engine, and then
//! persists the entire parent plan as one row update. On a failed persist
//! nothing is returned and the stored plan is untouched, so callers never
//! observe a half-applied itinerary.

use jiff::Timestamp;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    itinerary,
    models::Task,
    params::{RemoveTask, TaskCreate},
};

/// Picks a client-generated task id.
///
/// Ids are millisecond-timestamp derived, like the original client, but
/// bumped past any sibling id so two tasks added within the same
/// millisecond cannot collide.
fn next_task_id(siblings: &[Task]) -> i64 {
    let mut candidate = Timestamp::now().as_millisecond();
    while siblings.iter().any(|task| task.id == Some(candidate)) {
        candidate += 1;
    }
    candidate
}

impl Planner {
    /// Adds a task to a plan's itinerary and persists the whole plan.
    ///
    /// Validates against the trip window, derives the display duration,
    /// normalizes the cost, inserts in chronological position, and rewrites
    /// the plan row. Returns the stored task.
    pub async fn add_task(&self, params: &TaskCreate) -> Result<Task> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut plan = db
                .get_plan(params.plan_id)?
                .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;

            itinerary::validate_new_task(&plan, &params)?;

            let stored = Task {
                id: Some(next_task_id(&plan.tasks)),
                title: params.title.clone(),
                date: params.date,
                start_time: params.start_time,
                end_time: params.end_time,
                duration: itinerary::derive_duration(params.start_time, params.end_time),
                cost: itinerary::normalize_cost(&params.cost),
            };

            plan.tasks.push(stored.clone());
            plan.tasks = itinerary::sort_tasks(std::mem::take(&mut plan.tasks));

            db.update_plan(&plan)?;
            Ok(stored)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a task from a plan's itinerary and persists the whole plan.
    ///
    /// Returns the removed task, or `None` when no task in the plan carries
    /// the given id (the plan is rewritten unchanged in that case).
    pub async fn remove_task(&self, params: &RemoveTask) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut plan = db
                .get_plan(params.plan_id)?
                .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;

            let removed = plan
                .tasks
                .iter()
                .position(|task| task.id == Some(params.task_id))
                .map(|index| plan.tasks.remove(index));

            // Re-sort is a no-op for order but keeps the write path uniform.
            plan.tasks = itinerary::sort_tasks(std::mem::take(&mut plan.tasks));

            db.update_plan(&plan)?;
            Ok(removed)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
