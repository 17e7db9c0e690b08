//! Plan CRUD operations and queries.
//!
//! Every write rewrites the full row: the embedded task list is serialized
//! to JSON and stored in one text column, so there is no column-level or
//! per-task update path.

use jiff::civil::Date;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, Task},
    params::CreatePlan,
};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (title, startDate, endDate, imageUrl, tasks) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PLAN_COLUMNS: &str = "id, title, startDate, endDate, imageUrl, tasks";
const SELECT_PLAN_SQL: &str =
    "SELECT id, title, startDate, endDate, imageUrl, tasks FROM plans WHERE id = ?1";
const UPDATE_PLAN_SQL: &str =
    "UPDATE plans SET title = ?1, startDate = ?2, endDate = ?3, imageUrl = ?4, tasks = ?5 WHERE id = ?6";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

impl super::Database {
    /// Helper to construct a Plan from a database row, parsing the stored
    /// date strings and deserializing the embedded task JSON.
    fn build_plan_from_row(row: &Row) -> rusqlite::Result<Plan> {
        let tasks_json: Option<String> = row.get(5)?;
        let tasks: Vec<Task> = match tasks_json.as_deref() {
            None | Some("") => Vec::new(),
            Some(json) => serde_json::from_str(json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
        };

        Ok(Plan {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            start_date: row.get::<_, String>(2)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            end_date: row.get::<_, String>(3)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            image_url: row.get(4)?,
            tasks,
        })
    }

    /// Creates a new plan with an empty itinerary and returns it with the
    /// store-assigned id, so callers can reference the plan without a
    /// follow-up list scan.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                params.title,
                params.start_date.to_string(),
                params.end_date.to_string(),
                params.image_url.as_deref(),
                "[]",
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id: Some(id),
            title: params.title.clone(),
            start_date: params.start_date,
            end_date: params.end_date,
            image_url: params.image_url.clone(),
            tasks: Vec::new(),
        })
    }

    /// Retrieves a plan by its ID, or `None` on a lookup miss.
    pub fn get_plan(&self, id: i64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id], Self::build_plan_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))
    }

    /// Lists every plan, each with its full deserialized task list.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let query = format!("SELECT {SELECT_PLAN_COLUMNS} FROM plans ORDER BY id");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let plans = stmt
            .query_map([], Self::build_plan_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        Ok(plans)
    }

    /// Overwrites all columns of an existing plan row, including a full
    /// rewrite of the serialized task collection.
    ///
    /// Fails with [`PlannerError::InvalidInput`] when the plan has never
    /// been persisted (no id).
    pub fn update_plan(&mut self, plan: &Plan) -> Result<()> {
        let Some(id) = plan.id else {
            return Err(PlannerError::invalid_input(
                "id",
                "plan has no id; create it before updating",
            ));
        };

        let tasks_json = serde_json::to_string(&plan.tasks)?;

        self.connection
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    plan.title,
                    plan.start_date.to_string(),
                    plan.end_date.to_string(),
                    plan.image_url.as_deref(),
                    tasks_json,
                    id,
                ],
            )
            .db_context("Failed to update plan")?;

        Ok(())
    }

    /// Removes a plan row unconditionally; its embedded tasks go with it.
    /// Deleting a nonexistent id is a silent no-op.
    pub fn delete_plan(&mut self, id: i64) -> Result<()> {
        self.connection
            .execute(DELETE_PLAN_SQL, params![id])
            .db_context("Failed to delete plan")?;

        Ok(())
    }
}
