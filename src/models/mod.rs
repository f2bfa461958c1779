//! Core data models for the Teaching-Salary Engine.
//!
//! This module contains the read-only records the engine consumes
//! (coefficient rows, teachers, courses, semesters, class sections) and the
//! ephemeral report types it produces.

mod coefficient;
mod course;
mod salary_report;
mod scope;
mod semester;
mod teacher;

pub use coefficient::{ClassSizeRate, DegreeRate, LessonRate, RecordStatus};
pub use course::{ClassSection, Course, DEFAULT_STUDENT_COUNT};
pub use salary_report::{
    ExcludedSection, ReportWarning, SalaryLine, SalaryReport, TeacherSalary, round_for_display,
};
pub use scope::{ReportOptions, ReportPeriod, ReportQuery, ReportScope};
pub use semester::Semester;
pub use teacher::{DegreeTier, Department, Teacher};
