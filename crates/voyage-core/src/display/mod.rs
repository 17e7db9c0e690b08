//! Display formatting for plans, tasks, and operation results.
//!
//! Domain models implement `Display` directly (in [`models`]) and produce
//! markdown; newtype wrappers add context-specific formatting for
//! collections ([`collections`]) and operation outcomes ([`results`]).
//! Date and time formatting helpers live in [`datetime`].

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::Plans;
pub use datetime::{ClockTime, DateLabel, ShortDate};
pub use results::{CreateResult, DeleteResult, UpdateResult};
