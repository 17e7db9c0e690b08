//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::ShortDate;
use crate::{itinerary, models::Plan};

/// Newtype wrapper for displaying a list of plans as compact summaries.
///
/// Each plan renders as one summary block (title, date range, task count,
/// budget) rather than its full itinerary. Handles the empty collection
/// gracefully.
pub struct Plans(pub Vec<Plan>);

impl Plans {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, Plan> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Plans {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans yet.");
        }

        for plan in &self.0 {
            writeln!(
                f,
                "## {} (ID: {})",
                plan.title,
                plan.id.unwrap_or_default()
            )?;
            writeln!(f)?;
            writeln!(
                f,
                "- Dates: {} - {}",
                ShortDate(plan.start_date),
                ShortDate(plan.end_date)
            )?;
            writeln!(
                f,
                "- Tasks: {}, Budget: ${:.2}",
                plan.tasks.len(),
                itinerary::compute_budget(&plan.tasks)
            )?;
            writeln!(f)?;
        }

        Ok(())
    }
}
