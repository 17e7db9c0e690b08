use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands};

/// Main command-line interface for the voyage trip planner
///
/// Voyage organizes personal trips into plans, each holding a day-by-day
/// itinerary of time-boxed tasks with costs. The CLI creates and lists
/// plans, renders a plan's grouped itinerary with its running budget, and
/// adds or removes tasks.
#[derive(Parser)]
#[command(version, about, name = "vy")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/voyage/voyage.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the voyage CLI
///
/// Commands fall into two categories: `plan` for managing trips and `task`
/// for managing the itinerary inside one trip. Running `vy` with no command
/// lists all plans.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trip plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage tasks within a plan's itinerary
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
