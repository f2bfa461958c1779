//! Semester model.
//!
//! Semesters are the only calendar the engine has: there is no lecture-level
//! schedule, so month-scoped reports use a semester's date range as a proxy.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A semester within an academic year.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::models::Semester;
/// use chrono::NaiveDate;
///
/// let semester = Semester {
///     id: "sem_2023_2".to_string(),
///     academic_year: "2023-2024".to_string(),
///     name: "Spring 2024".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 7, 19).unwrap(),
/// };
///
/// assert_eq!(semester.month_bounds(), (3, 7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique identifier for the semester.
    pub id: String,
    /// The academic year this semester belongs to (e.g. "2023-2024").
    pub academic_year: String,
    /// Human-readable semester name.
    pub name: String,
    /// First day of the semester (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the semester (inclusive).
    pub end_date: NaiveDate,
}

impl Semester {
    /// Returns the calendar months (1-12) of the start and end dates.
    pub fn month_bounds(&self) -> (u32, u32) {
        (self.start_date.month(), self.end_date.month())
    }

    /// Returns true if the semester starts in a later calendar month than it
    /// ends, i.e. it runs across a new year (e.g. September to January).
    pub fn wraps_year_end(&self) -> bool {
        let (start, end) = self.month_bounds();
        start > end
    }
}
