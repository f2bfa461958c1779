//! Salary report models.
//!
//! This module contains the ephemeral outputs of the engine: a
//! [`SalaryLine`] per class section, grouped into [`TeacherSalary`] entries
//! and wrapped in a [`SalaryReport`]. Nothing here is persisted.
//!
//! All monetary fields are exact decimals. Display rounding is applied only
//! to the separate `display_*` fields and never feeds back into sums.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DegreeTier, ReportScope};

/// Rounds an amount for presentation, midpoint away from zero.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::models::round_for_display;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234.565").unwrap();
/// assert_eq!(round_for_display(amount, 2), Decimal::from_str("1234.57").unwrap());
/// ```
pub fn round_for_display(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// The salary computed for one class section.
///
/// `amount` is always `hours * rate_per_hour * degree_coefficient *
/// class_coefficient`, unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryLine {
    /// The class section this line was computed for.
    pub class_section_id: String,
    /// Section code, for display.
    pub section_code: String,
    /// Course code, for display.
    pub course_code: String,
    /// The semester the section runs in.
    pub semester_id: String,
    /// The academic year whose coefficient tables were used.
    pub academic_year: String,
    /// Student count used for the class-size lookup.
    pub student_count: u32,
    /// Teaching hours of the offering.
    pub hours: Decimal,
    /// Resolved lesson rate per hour.
    pub rate_per_hour: Decimal,
    /// Resolved degree-tier multiplier.
    pub degree_coefficient: Decimal,
    /// Resolved class-size multiplier.
    pub class_coefficient: Decimal,
    /// The salary owed for this section.
    pub amount: Decimal,
}

/// A salary total for one teacher within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSalary {
    /// The teacher the salary is owed to.
    pub teacher_id: String,
    /// Staff code, for display.
    pub teacher_code: String,
    /// Full name, for display.
    pub teacher_name: String,
    /// The teacher's department.
    pub department_id: String,
    /// The teacher's degree tier.
    pub degree_tier: DegreeTier,
    /// Sum of `hours` over the teacher's lines.
    pub total_hours: Decimal,
    /// Sum of `amount` over the teacher's lines.
    pub total_salary: Decimal,
    /// `total_salary` rounded for display, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_total_salary: Option<Decimal>,
    /// Line-by-line breakdown, in section order.
    pub lines: Vec<SalaryLine>,
}

/// A non-fatal configuration gap found while resolving rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// A code identifying the type of gap.
    pub code: String,
    /// A human-readable description of the gap.
    pub message: String,
    /// The academic year whose configuration is incomplete.
    pub academic_year: String,
}

/// A class section left out of a report because its data was inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedSection {
    /// The offending class section.
    pub section_id: String,
    /// Why it was excluded.
    pub reason: String,
}

/// The complete result of a salary report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The scope the report covers.
    pub scope: ReportScope,
    /// Per-teacher totals, in order of first appearance.
    pub teachers: Vec<TeacherSalary>,
    /// Sum of every included line's amount.
    pub grand_total: Decimal,
    /// `grand_total` rounded for display, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_grand_total: Option<Decimal>,
    /// Sections skipped because of data-integrity errors.
    pub excluded_sections: Vec<ExcludedSection>,
    /// Number of skipped sections.
    pub excluded_count: usize,
    /// Configuration gaps resolved to neutral multipliers.
    pub warnings: Vec<ReportWarning>,
}

impl SalaryReport {
    /// Iterates over every included line, teacher by teacher.
    pub fn lines(&self) -> impl Iterator<Item = &SalaryLine> {
        self.teachers.iter().flat_map(|t| t.lines.iter())
    }

    /// Returns the entry for one teacher, if present.
    pub fn teacher(&self, teacher_id: &str) -> Option<&TeacherSalary> {
        self.teachers.iter().find(|t| t.teacher_id == teacher_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportPeriod;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_line(section_id: &str, amount: Decimal) -> SalaryLine {
        SalaryLine {
            class_section_id: section_id.to_string(),
            section_code: "CS101-01".to_string(),
            course_code: "CS101".to_string(),
            semester_id: "sem_2023_1".to_string(),
            academic_year: "2023-2024".to_string(),
            student_count: 40,
            hours: dec("45"),
            rate_per_hour: dec("50000"),
            degree_coefficient: dec("1.5"),
            class_coefficient: dec("1.2"),
            amount,
        }
    }

    fn create_report() -> SalaryReport {
        SalaryReport {
            report_id: Uuid::nil(),
            generated_at: DateTime::parse_from_rfc3339("2024-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            scope: ReportScope::School {
                period: ReportPeriod::AcademicYear {
                    academic_year: "2023-2024".to_string(),
                },
            },
            teachers: vec![TeacherSalary {
                teacher_id: "tch_001".to_string(),
                teacher_code: "GV001".to_string(),
                teacher_name: "Nguyen Van An".to_string(),
                department_id: "dep_cs".to_string(),
                degree_tier: DegreeTier::Doctor,
                total_hours: dec("90"),
                total_salary: dec("8100000"),
                display_total_salary: None,
                lines: vec![
                    create_line("cs_001", dec("4050000")),
                    create_line("cs_002", dec("4050000")),
                ],
            }],
            grand_total: dec("8100000"),
            display_grand_total: None,
            excluded_sections: vec![],
            excluded_count: 0,
            warnings: vec![],
        }
    }

    #[test]
    fn test_round_for_display_midpoint_away_from_zero() {
        assert_eq!(round_for_display(dec("2.5"), 0), dec("3"));
        assert_eq!(round_for_display(dec("-2.5"), 0), dec("-3"));
        assert_eq!(round_for_display(dec("1234.564"), 2), dec("1234.56"));
    }

    #[test]
    fn test_lines_iterates_all_teachers() {
        let report = create_report();
        let ids: Vec<&str> = report
            .lines()
            .map(|l| l.class_section_id.as_str())
            .collect();
        assert_eq!(ids, vec!["cs_001", "cs_002"]);
    }

    #[test]
    fn test_teacher_lookup() {
        let report = create_report();
        assert!(report.teacher("tch_001").is_some());
        assert!(report.teacher("tch_999").is_none());
    }

    #[test]
    fn test_salary_line_serializes_decimals_as_strings() {
        let line = create_line("cs_001", dec("4050000"));
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"class_section_id\":\"cs_001\""));
        assert!(json.contains("\"degree_coefficient\":\"1.5\""));
        assert!(json.contains("\"amount\":\"4050000\""));
    }

    #[test]
    fn test_display_fields_skipped_when_absent() {
        let report = create_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("display_grand_total"));
        assert!(!json.contains("display_total_salary"));
        assert!(json.contains("\"report_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"kind\":\"school\""));
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = create_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: SalaryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
