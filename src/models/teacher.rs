//! Teacher and department models.

use serde::{Deserialize, Serialize};

/// A teacher's highest academic qualification.
///
/// Drives which [`DegreeRate`](super::DegreeRate) field applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DegreeTier {
    /// Master's degree.
    Master,
    /// Doctorate.
    Doctor,
    /// Associate professor.
    AssociateProfessor,
    /// Full professor.
    Professor,
}

/// An academic department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// Human-readable department name.
    pub name: String,
}

/// A teacher owed salary through the class sections assigned to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier for the teacher.
    pub id: String,
    /// Staff code shown on reports.
    pub code: String,
    /// Full name shown on reports.
    pub name: String,
    /// Highest academic qualification.
    pub degree_tier: DegreeTier,
    /// The department the teacher belongs to.
    pub department_id: String,
}
