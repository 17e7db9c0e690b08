//! Display implementations for domain models.
//!
//! All output is markdown for rich terminal rendering. A plan formats as a
//! header with its date range and running budget, followed by the itinerary
//! grouped under one header per calendar date. The write path keeps
//! persisted task lists sorted, which is what the date grouping relies on.

use std::fmt;

use super::datetime::{ClockTime, DateLabel, ShortDate};
use crate::{itinerary, models::{Plan, Task}};

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} - {} ({} • ${:.2})",
            self.title,
            ClockTime(self.start_time),
            ClockTime(self.end_time),
            self.duration,
            itinerary::parse_cost(&self.cost),
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "# {}. {}", id, self.title)?,
            None => writeln!(f, "# {}", self.title)?,
        }
        writeln!(f)?;

        writeln!(
            f,
            "- Dates: {} - {}",
            ShortDate(self.start_date),
            ShortDate(self.end_date)
        )?;
        writeln!(f, "- Budget: ${:.2}", itinerary::compute_budget(&self.tasks))?;
        if let Some(image_url) = &self.image_url {
            writeln!(f, "- Image: {image_url}")?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nYour itinerary will appear here.")?;
        } else {
            writeln!(f, "\n## Itinerary")?;
            for (date, tasks) in itinerary::group_by_date(&self.tasks) {
                writeln!(f)?;
                writeln!(f, "### {}", DateLabel(date))?;
                writeln!(f)?;
                for task in tasks {
                    write!(f, "{task}")?;
                }
            }
        }

        Ok(())
    }
}
