//! Command definitions and handlers for the voyage CLI.
//!
//! Each subcommand has a clap argument struct that converts into the
//! framework-free parameter types from `voyage_core::params`, keeping clap
//! concerns (flags, help text, value parsing) out of the core. The [`Cli`]
//! struct owns the planner and renderer and dispatches parsed commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use jiff::civil::{Date, Time};
use voyage_core::{
    params::{CreatePlan, Id, RemoveTask, TaskCreate, UpdatePlan},
    CreateResult, DeleteResult, Planner, Plans, UpdateResult,
};

use crate::renderer::TerminalRenderer;

/// Create a new trip plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the trip
    pub title: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(long = "from")]
    pub start_date: Date,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(long = "to")]
    pub end_date: Date,
    /// Local file reference for a cover photo
    #[arg(long)]
    pub image: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            title: val.title,
            start_date: val.start_date,
            end_date: val.end_date,
            image_url: val.image,
        }
    }
}

/// Show a plan's itinerary and budget
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: i64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a plan's title, dates, or cover photo
#[derive(Args)]
pub struct EditPlanArgs {
    /// ID of the plan to edit
    pub id: i64,
    /// New title for the trip
    #[arg(long)]
    pub title: Option<String>,
    /// New first day of the trip (YYYY-MM-DD)
    #[arg(long = "from")]
    pub start_date: Option<Date>,
    /// New last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(long = "to")]
    pub end_date: Option<Date>,
    /// New cover photo reference
    #[arg(long)]
    pub image: Option<String>,
}

impl From<EditPlanArgs> for UpdatePlan {
    fn from(val: EditPlanArgs) -> Self {
        UpdatePlan {
            id: val.id,
            title: val.title,
            start_date: val.start_date,
            end_date: val.end_date,
            image_url: val.image,
        }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    #[arg(help = "Unique identifier of the plan to permanently delete")]
    pub id: i64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new trip plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan's itinerary and budget
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Edit a plan's title, dates, or cover photo
    #[command(alias = "e")]
    Edit(EditPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Add a task to a plan's itinerary
#[derive(Args)]
pub struct AddTaskArgs {
    /// ID of the plan to add the task to
    pub plan_id: i64,
    /// Title of the activity
    pub title: String,
    /// Date the task occurs on (YYYY-MM-DD, within the trip window)
    #[arg(long)]
    pub date: Date,
    /// Start time of day (HH:MM)
    #[arg(long)]
    pub start: Time,
    /// End time of day (HH:MM, after the start time)
    #[arg(long)]
    pub end: Time,
    /// Cost as a decimal string; omit for free activities
    #[arg(long, default_value = "")]
    pub cost: String,
}

impl From<AddTaskArgs> for TaskCreate {
    fn from(val: AddTaskArgs) -> Self {
        TaskCreate {
            plan_id: val.plan_id,
            title: val.title,
            date: val.date,
            start_time: val.start,
            end_time: val.end,
            cost: val.cost,
        }
    }
}

/// Remove a task from a plan's itinerary
#[derive(Args)]
pub struct RemoveTaskArgs {
    /// ID of the plan owning the task
    pub plan_id: i64,
    /// ID of the task to remove
    pub task_id: i64,
}

impl From<RemoveTaskArgs> for RemoveTask {
    fn from(val: RemoveTaskArgs) -> Self {
        RemoveTask {
            plan_id: val.plan_id,
            task_id: val.task_id,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a plan's itinerary
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Remove a task from a plan's itinerary
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveTaskArgs),
}

/// Command dispatcher owning the planner and terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Handle a plan subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self.planner.create_plan(&args.into()).await?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let plan = self.planner.require_plan(&args.into()).await?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Edit(args) => {
                let plan = self.planner.update_plan(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(plan).to_string())
            }
            PlanCommands::Delete(args) => {
                if !args.confirm {
                    return self
                        .renderer
                        .render("Deletion is permanent. Re-run with --confirm to proceed.");
                }
                match self.planner.delete_plan(&Id { id: args.id }).await? {
                    Some(plan) => self.renderer.render(&DeleteResult::new(plan).to_string()),
                    None => self.renderer.render(&format!("No plan with ID {}.", args.id)),
                }
            }
        }
    }

    /// Handle a task subcommand.
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.planner.add_task(&args.into()).await?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::Remove(args) => {
                let params: RemoveTask = args.into();
                match self.planner.remove_task(&params).await? {
                    Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
                    None => self.renderer.render(&format!(
                        "No task with ID {} in plan {}.",
                        params.task_id, params.plan_id
                    )),
                }
            }
        }
    }

    /// List all plans as compact summaries (also the bare `vy` default).
    pub async fn list_plans(&self) -> Result<()> {
        let plans = self.planner.list_plans().await?;
        self.renderer.render(&Plans(plans).to_string())
    }
}
