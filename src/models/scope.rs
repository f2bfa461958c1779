//! Report scope models.
//!
//! A salary report is always the same computation over a different filter.
//! [`ReportScope`] names who is covered (the whole school, one department,
//! or one teacher) and [`ReportPeriod`] names when (an academic year, one
//! semester, or one month of a year).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The time dimension of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReportPeriod {
    /// Every semester of an academic year.
    AcademicYear {
        /// The academic year (e.g. "2023-2024").
        academic_year: String,
    },
    /// A single semester.
    Semester {
        /// The semester id.
        semester_id: String,
    },
    /// One calendar month of an academic year, approximated by semester
    /// date ranges. Only valid for personal reports.
    Month {
        /// The academic year (e.g. "2023-2024").
        academic_year: String,
        /// Calendar month, 1-12.
        month: u32,
    },
}

/// The population dimension of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportScope {
    /// Every assigned section in the school.
    School {
        /// The time dimension.
        period: ReportPeriod,
    },
    /// Sections of courses owned by one department.
    Department {
        /// The department whose courses are covered.
        department_id: String,
        /// The time dimension.
        period: ReportPeriod,
    },
    /// Sections assigned to one teacher (self-service view).
    Personal {
        /// The requesting teacher.
        teacher_id: String,
        /// The time dimension.
        period: ReportPeriod,
    },
}

impl ReportScope {
    /// Returns the time dimension of the scope.
    pub fn period(&self) -> &ReportPeriod {
        match self {
            ReportScope::School { period }
            | ReportScope::Department { period, .. }
            | ReportScope::Personal { period, .. } => period,
        }
    }

    /// Rejects scopes that cannot be answered, before any lookup happens.
    ///
    /// # Example
    ///
    /// ```
    /// use teaching_salary_engine::models::{ReportPeriod, ReportScope};
    ///
    /// let scope = ReportScope::School {
    ///     period: ReportPeriod::Month { academic_year: "2023-2024".to_string(), month: 3 },
    /// };
    /// assert!(scope.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        match self {
            ReportScope::School { .. } => {}
            ReportScope::Department { department_id, .. } => {
                if department_id.trim().is_empty() {
                    return Err(EngineError::invalid_scope(
                        "department_id is required for a department report",
                    ));
                }
            }
            ReportScope::Personal { teacher_id, .. } => {
                if teacher_id.trim().is_empty() {
                    return Err(EngineError::invalid_scope(
                        "teacher_id is required for a personal report",
                    ));
                }
            }
        }

        match self.period() {
            ReportPeriod::AcademicYear { academic_year } => {
                if academic_year.trim().is_empty() {
                    return Err(EngineError::invalid_scope("academic_year must not be empty"));
                }
            }
            ReportPeriod::Semester { semester_id } => {
                if semester_id.trim().is_empty() {
                    return Err(EngineError::invalid_scope("semester_id must not be empty"));
                }
            }
            ReportPeriod::Month {
                academic_year,
                month,
            } => {
                if !matches!(self, ReportScope::Personal { .. }) {
                    return Err(EngineError::invalid_scope(
                        "month granularity is only available for personal reports",
                    ));
                }
                if academic_year.trim().is_empty() {
                    return Err(EngineError::invalid_scope(
                        "academic_year is required for a monthly report",
                    ));
                }
                if !(1..=12).contains(month) {
                    return Err(EngineError::invalid_scope(format!(
                        "month must be between 1 and 12, got {}",
                        month
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Caller-selected options that do not change which sections are covered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Abort the whole report on the first data-integrity error instead of
    /// skipping the offending section.
    #[serde(default)]
    pub strict: bool,
    /// Round presented totals to this many decimal places. Unrounded totals
    /// are always reported as well.
    #[serde(default)]
    pub display_decimal_places: Option<u32>,
}

/// A validated-on-use report request: scope plus options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Who and when.
    pub scope: ReportScope,
    /// How.
    #[serde(default)]
    pub options: ReportOptions,
}

impl ReportQuery {
    /// Creates a query with default options.
    pub fn new(scope: ReportScope) -> Self {
        Self {
            scope,
            options: ReportOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(academic_year: &str) -> ReportPeriod {
        ReportPeriod::AcademicYear {
            academic_year: academic_year.to_string(),
        }
    }

    #[test]
    fn test_school_year_scope_is_valid() {
        let scope = ReportScope::School {
            period: year("2023-2024"),
        };
        assert!(scope.validate().is_ok());
    }

    #[test]
    fn test_month_rejected_for_department_scope() {
        let scope = ReportScope::Department {
            department_id: "dep_cs".to_string(),
            period: ReportPeriod::Month {
                academic_year: "2023-2024".to_string(),
                month: 3,
            },
        };
        assert!(matches!(
            scope.validate(),
            Err(EngineError::InvalidScope { .. })
        ));
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        for month in [0, 13] {
            let scope = ReportScope::Personal {
                teacher_id: "tch_001".to_string(),
                period: ReportPeriod::Month {
                    academic_year: "2023-2024".to_string(),
                    month,
                },
            };
            match scope.validate() {
                Err(EngineError::InvalidScope { message }) => {
                    assert!(message.contains(&month.to_string()));
                }
                other => panic!("Expected InvalidScope, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_department_id_rejected() {
        let scope = ReportScope::Department {
            department_id: "  ".to_string(),
            period: year("2023-2024"),
        };
        assert!(scope.validate().is_err());
    }

    #[test]
    fn test_empty_academic_year_rejected() {
        let scope = ReportScope::School { period: year("") };
        assert!(scope.validate().is_err());
    }

    #[test]
    fn test_scope_serialization_is_tagged() {
        let scope = ReportScope::Personal {
            teacher_id: "tch_001".to_string(),
            period: ReportPeriod::Month {
                academic_year: "2023-2024".to_string(),
                month: 4,
            },
        };
        let json = serde_json::to_string(&scope).unwrap();
        assert!(json.contains("\"kind\":\"personal\""));
        assert!(json.contains("\"mode\":\"month\""));
        assert!(json.contains("\"month\":4"));
    }
}
