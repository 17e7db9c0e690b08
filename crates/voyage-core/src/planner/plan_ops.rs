//! Plan operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::Plan,
    params::{CreatePlan, Id, UpdatePlan},
};

impl Planner {
    /// Creates a new plan with an empty itinerary and returns it with its
    /// store-assigned id.
    ///
    /// Validates the title and date range before touching the store; the
    /// store itself does not enforce those invariants.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&params)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan by its ID, with its full task list.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plan by its ID, failing with [`PlannerError::PlanNotFound`]
    /// on a lookup miss.
    pub async fn require_plan(&self, params: &Id) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.id })
    }

    /// Lists all plans.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Edits a plan's metadata, leaving absent fields and the task list
    /// unchanged, and returns the updated plan.
    ///
    /// The merged date range is re-validated so an edit can never produce a
    /// trip that ends before it starts.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut plan = db
                .get_plan(params.id)?
                .ok_or(PlannerError::PlanNotFound { id: params.id })?;

            if let Some(title) = params.title {
                plan.title = title;
            }
            if let Some(start_date) = params.start_date {
                plan.start_date = start_date;
            }
            if let Some(end_date) = params.end_date {
                plan.end_date = end_date;
            }
            if let Some(image_url) = params.image_url {
                plan.image_url = Some(image_url);
            }

            if plan.title.trim().is_empty() {
                return Err(PlannerError::validation("title", "title must not be empty"));
            }
            if plan.end_date < plan.start_date {
                return Err(PlannerError::validation(
                    "end_date",
                    "end date must not be before start date",
                ));
            }

            db.update_plan(&plan)?;
            Ok(plan)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a plan and its embedded tasks.
    ///
    /// Returns the deleted plan's details for confirmation, or `None` when
    /// the id never existed (deletion itself is a silent no-op then).
    pub async fn delete_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = db.get_plan(plan_id)?;
            db.delete_plan(plan_id)?;
            Ok(plan)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
