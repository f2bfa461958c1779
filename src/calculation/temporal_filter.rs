//! Month scoping for personal reports.
//!
//! There is no lecture-level calendar, only semester start and end dates.
//! A section therefore counts as taught in *every* month its semester
//! touches. This is a coarse approximation, not attendance data: a report
//! for month M shows the full salary of every section whose semester spans
//! M, so summing twelve monthly reports over-counts a year.

use crate::models::Semester;

/// Returns true if the semester spans the calendar month (1-12).
///
/// Only calendar months are compared; the year of the dates is ignored.
/// A semester that runs across a new year (start month later than end
/// month, e.g. September to January) spans the months from its start
/// through December and from January through its end.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::calculation::semester_covers_month;
/// use teaching_salary_engine::models::Semester;
/// use chrono::NaiveDate;
///
/// let spring = Semester {
///     id: "sem_2023_2".to_string(),
///     academic_year: "2023-2024".to_string(),
///     name: "Spring 2024".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 7, 19).unwrap(),
/// };
///
/// assert!(!semester_covers_month(&spring, 2));
/// assert!(semester_covers_month(&spring, 3));
/// assert!(semester_covers_month(&spring, 7));
/// assert!(!semester_covers_month(&spring, 8));
/// ```
pub fn semester_covers_month(semester: &Semester, month: u32) -> bool {
    let (start, end) = semester.month_bounds();
    if semester.wraps_year_end() {
        month >= start || month <= end
    } else {
        start <= month && month <= end
    }
}
