//! Request types for the Teaching-Salary Engine API.
//!
//! This module defines the flat JSON body accepted by the report endpoint
//! and its conversion into a [`ReportQuery`].

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ReportOptions, ReportPeriod, ReportQuery, ReportScope};

/// Which population a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// The whole school.
    School,
    /// One department.
    Department,
    /// One teacher's self-service view.
    Personal,
}

/// Request body for the `/reports/salary` endpoint.
///
/// Exactly one of `academic_year` or `semester_id` selects the period;
/// when both are given the semester wins. `month` narrows a personal
/// report to one calendar month of `academic_year`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The report population.
    pub kind: ReportKind,
    /// Department for `kind = department`.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Teacher for `kind = personal`.
    #[serde(default)]
    pub teacher_id: Option<String>,
    /// Academic year (e.g. "2023-2024").
    #[serde(default)]
    pub academic_year: Option<String>,
    /// Semester id.
    #[serde(default)]
    pub semester_id: Option<String>,
    /// Calendar month, 1-12, for personal monthly reports.
    #[serde(default)]
    pub month: Option<u32>,
    /// Abort on the first data-integrity error.
    #[serde(default)]
    pub strict: bool,
    /// Round presented totals to this many decimal places.
    #[serde(default)]
    pub display_decimal_places: Option<u32>,
}

impl ReportRequest {
    fn period(&self) -> EngineResult<ReportPeriod> {
        if let Some(semester_id) = &self.semester_id {
            if self.month.is_some() {
                return Err(EngineError::invalid_scope(
                    "month cannot be combined with semester_id",
                ));
            }
            return Ok(ReportPeriod::Semester {
                semester_id: semester_id.clone(),
            });
        }

        match (&self.academic_year, self.month) {
            (Some(academic_year), Some(month)) => Ok(ReportPeriod::Month {
                academic_year: academic_year.clone(),
                month,
            }),
            (Some(academic_year), None) => Ok(ReportPeriod::AcademicYear {
                academic_year: academic_year.clone(),
            }),
            (None, Some(_)) => Err(EngineError::invalid_scope(
                "academic_year is required for a monthly report",
            )),
            (None, None) => Err(EngineError::invalid_scope(
                "either academic_year or semester_id is required",
            )),
        }
    }
}

impl TryFrom<ReportRequest> for ReportQuery {
    type Error = EngineError;

    fn try_from(req: ReportRequest) -> Result<Self, Self::Error> {
        let period = req.period()?;

        let scope = match req.kind {
            ReportKind::School => ReportScope::School { period },
            ReportKind::Department => ReportScope::Department {
                department_id: req.department_id.ok_or_else(|| {
                    EngineError::invalid_scope("department_id is required for a department report")
                })?,
                period,
            },
            ReportKind::Personal => ReportScope::Personal {
                teacher_id: req.teacher_id.ok_or_else(|| {
                    EngineError::invalid_scope("teacher_id is required for a personal report")
                })?,
                period,
            },
        };
        scope.validate()?;

        Ok(ReportQuery {
            scope,
            options: ReportOptions {
                strict: req.strict,
                display_decimal_places: req.display_decimal_places,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: ReportKind) -> ReportRequest {
        ReportRequest {
            kind,
            department_id: None,
            teacher_id: None,
            academic_year: None,
            semester_id: None,
            month: None,
            strict: false,
            display_decimal_places: None,
        }
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "kind": "school", "academic_year": "2023-2024" }"#;

        let req: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, ReportKind::School);
        assert!(!req.strict);

        let query = ReportQuery::try_from(req).unwrap();
        assert_eq!(
            query.scope,
            ReportScope::School {
                period: ReportPeriod::AcademicYear {
                    academic_year: "2023-2024".to_string()
                }
            }
        );
    }

    #[test]
    fn test_neither_year_nor_semester_rejected() {
        let result = ReportQuery::try_from(request(ReportKind::School));
        match result {
            Err(EngineError::InvalidScope { message }) => {
                assert!(message.contains("academic_year or semester_id"));
            }
            other => panic!("Expected InvalidScope, got {:?}", other),
        }
    }

    #[test]
    fn test_semester_takes_precedence_over_year() {
        let mut req = request(ReportKind::Department);
        req.department_id = Some("dep_cs".to_string());
        req.academic_year = Some("2023-2024".to_string());
        req.semester_id = Some("sem_2023_2".to_string());

        let query = ReportQuery::try_from(req).unwrap();
        assert_eq!(
            query.scope.period(),
            &ReportPeriod::Semester {
                semester_id: "sem_2023_2".to_string()
            }
        );
    }

    #[test]
    fn test_personal_month_request() {
        let mut req = request(ReportKind::Personal);
        req.teacher_id = Some("tch_001".to_string());
        req.academic_year = Some("2023-2024".to_string());
        req.month = Some(4);
        req.display_decimal_places = Some(0);

        let query = ReportQuery::try_from(req).unwrap();
        assert_eq!(
            query.scope,
            ReportScope::Personal {
                teacher_id: "tch_001".to_string(),
                period: ReportPeriod::Month {
                    academic_year: "2023-2024".to_string(),
                    month: 4
                }
            }
        );
        assert_eq!(query.options.display_decimal_places, Some(0));
    }

    #[test]
    fn test_month_without_year_rejected() {
        let mut req = request(ReportKind::Personal);
        req.teacher_id = Some("tch_001".to_string());
        req.month = Some(4);
        assert!(ReportQuery::try_from(req).is_err());
    }

    #[test]
    fn test_month_with_semester_rejected() {
        let mut req = request(ReportKind::Personal);
        req.teacher_id = Some("tch_001".to_string());
        req.semester_id = Some("sem_2023_2".to_string());
        req.month = Some(4);
        assert!(ReportQuery::try_from(req).is_err());
    }

    #[test]
    fn test_month_for_school_report_rejected() {
        let mut req = request(ReportKind::School);
        req.academic_year = Some("2023-2024".to_string());
        req.month = Some(4);
        assert!(matches!(
            ReportQuery::try_from(req),
            Err(EngineError::InvalidScope { .. })
        ));
    }

    #[test]
    fn test_department_without_id_rejected() {
        let mut req = request(ReportKind::Department);
        req.academic_year = Some("2023-2024".to_string());
        assert!(ReportQuery::try_from(req).is_err());
    }

    #[test]
    fn test_personal_without_teacher_rejected() {
        let mut req = request(ReportKind::Personal);
        req.academic_year = Some("2023-2024".to_string());
        assert!(ReportQuery::try_from(req).is_err());
    }
}
