//! Coefficient table rows.
//!
//! This module contains the three independently versioned rule tables that
//! scale teaching hours into money: [`LessonRate`], [`DegreeRate`] and
//! [`ClassSizeRate`]. Every row is scoped to one academic year and carries
//! an ACTIVE/INACTIVE status so that historical rows can stay in the table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DegreeTier;

/// Lifecycle status shared by coefficient rows and class sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// The row is in force.
    Active,
    /// The row is kept for history only.
    Inactive,
}

impl RecordStatus {
    /// Returns true for [`RecordStatus::Active`].
    pub fn is_active(self) -> bool {
        self == RecordStatus::Active
    }
}

/// The per-hour lesson rate for an academic year.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::models::{LessonRate, RecordStatus};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let rate = LessonRate {
///     id: "lr_2023".to_string(),
///     academic_year: "2023-2024".to_string(),
///     amount_per_hour: Decimal::new(50000, 0),
///     status: RecordStatus::Active,
///     created_at: Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).unwrap(),
/// };
/// assert!(rate.status.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRate {
    /// Unique identifier of the row.
    pub id: String,
    /// The academic year this row applies to (e.g. "2023-2024").
    pub academic_year: String,
    /// Money paid per teaching hour.
    pub amount_per_hour: Decimal,
    /// Whether the row is in force.
    pub status: RecordStatus,
    /// When the row was created; the latest active row wins.
    pub created_at: DateTime<Utc>,
}

/// Degree-tier multipliers for an academic year.
///
/// One row holds all four tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRate {
    /// Unique identifier of the row.
    pub id: String,
    /// The academic year this row applies to.
    pub academic_year: String,
    /// Multiplier for teachers holding a master's degree.
    pub master: Decimal,
    /// Multiplier for teachers holding a doctorate.
    pub doctor: Decimal,
    /// Multiplier for associate professors.
    pub associate_professor: Decimal,
    /// Multiplier for full professors.
    pub professor: Decimal,
    /// Whether the row is in force.
    pub status: RecordStatus,
    /// When the row was created; the latest active row wins.
    pub created_at: DateTime<Utc>,
}

impl DegreeRate {
    /// Returns the multiplier matching a teacher's degree tier.
    pub fn coefficient_for(&self, tier: DegreeTier) -> Decimal {
        match tier {
            DegreeTier::Master => self.master,
            DegreeTier::Doctor => self.doctor,
            DegreeTier::AssociateProfessor => self.associate_professor,
            DegreeTier::Professor => self.professor,
        }
    }
}

/// A class-size band and its multiplier for an academic year.
///
/// The band `[min_students, max_students]` is inclusive on both ends. Bands
/// for the same year may overlap or leave gaps; the resolver decides which
/// one applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSizeRate {
    /// Unique identifier of the row.
    pub id: String,
    /// The academic year this row applies to.
    pub academic_year: String,
    /// Lowest student count in the band (inclusive).
    pub min_students: u32,
    /// Highest student count in the band (inclusive).
    pub max_students: u32,
    /// Multiplier applied to sections whose student count falls in the band.
    pub coefficient: Decimal,
    /// Whether the row is in force.
    pub status: RecordStatus,
}

impl ClassSizeRate {
    /// Checks if a student count falls inside this band (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use teaching_salary_engine::models::{ClassSizeRate, RecordStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let band = ClassSizeRate {
    ///     id: "csr_1".to_string(),
    ///     academic_year: "2023-2024".to_string(),
    ///     min_students: 30,
    ///     max_students: 60,
    ///     coefficient: Decimal::new(12, 1),
    ///     status: RecordStatus::Active,
    /// };
    /// assert!(band.contains(30));
    /// assert!(band.contains(60));
    /// assert!(!band.contains(61));
    /// ```
    pub fn contains(&self, student_count: u32) -> bool {
        student_count >= self.min_students && student_count <= self.max_students
    }
}
