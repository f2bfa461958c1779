//! Section salary calculation.
//!
//! Combines a class section's teaching load with the resolved rates into
//! one [`SalaryLine`]:
//!
//! ```text
//! amount = hours * rate_per_hour * degree_coefficient * class_coefficient
//! ```
//!
//! Everything is computed in `Decimal` with no intermediate rounding.

use crate::error::{EngineError, EngineResult};
use crate::models::{ClassSection, Course, ReportWarning, SalaryLine, Teacher};
use crate::store::CoefficientStore;

use super::rate_resolver::{
    resolve_class_coefficient, resolve_degree_coefficient, resolve_lesson_rate,
};

/// Warning code for a year with no active lesson rate.
pub const LESSON_RATE_MISSING: &str = "LESSON_RATE_MISSING";
/// Warning code for a year with no active degree rate.
pub const DEGREE_RATE_MISSING: &str = "DEGREE_RATE_MISSING";
/// Warning code for a student count no active class-size band covers.
pub const CLASS_SIZE_BAND_MISSING: &str = "CLASS_SIZE_BAND_MISSING";

/// The result of computing one section's salary.
#[derive(Debug, Clone)]
pub struct SectionSalaryResult {
    /// The computed line.
    pub line: SalaryLine,
    /// Configuration gaps hit while resolving rates for the line.
    pub warnings: Vec<ReportWarning>,
}

/// Computes the salary owed for one class section.
///
/// The caller is responsible for having joined the section with its course
/// and assigned teacher; sections without a teacher never reach this
/// function. `academic_year` is the year of the section's semester and
/// selects the coefficient tables.
///
/// Returns `DataIntegrity` if the product does not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::calculation::compute_section_salary;
/// use teaching_salary_engine::models::{ClassSection, Course, DegreeTier, RecordStatus, Teacher};
/// use teaching_salary_engine::store::CoefficientTables;
/// use rust_decimal::Decimal;
///
/// let course = Course {
///     id: "crs_cs101".to_string(),
///     code: "CS101".to_string(),
///     name: "Intro to Programming".to_string(),
///     credit: 3,
///     total_hours: Decimal::new(45, 0),
///     department_id: "dep_cs".to_string(),
/// };
/// let teacher = Teacher {
///     id: "tch_001".to_string(),
///     code: "GV001".to_string(),
///     name: "Nguyen Van An".to_string(),
///     degree_tier: DegreeTier::Doctor,
///     department_id: "dep_cs".to_string(),
/// };
/// let section = ClassSection {
///     id: "cs_001".to_string(),
///     code: "CS101-01".to_string(),
///     name: "group 1".to_string(),
///     semester_id: "sem_2023_1".to_string(),
///     course_id: course.id.clone(),
///     max_students: Some(40),
///     assigned_teacher_id: Some(teacher.id.clone()),
///     status: RecordStatus::Active,
/// };
///
/// // No coefficients configured: the lesson rate falls back to zero.
/// let result = compute_section_salary(&section, &course, &teacher, "2023-2024", &CoefficientTables::default())?;
/// assert_eq!(result.line.amount, Decimal::ZERO);
/// assert_eq!(result.warnings.len(), 3);
/// # Ok::<(), teaching_salary_engine::error::EngineError>(())
/// ```
pub fn compute_section_salary<S>(
    section: &ClassSection,
    course: &Course,
    teacher: &Teacher,
    academic_year: &str,
    store: &S,
) -> EngineResult<SectionSalaryResult>
where
    S: CoefficientStore + ?Sized,
{
    let student_count = section.effective_student_count();
    let hours = course.total_hours;

    let lesson_rate = resolve_lesson_rate(store, academic_year);
    let degree = resolve_degree_coefficient(store, academic_year, teacher.degree_tier);
    let class = resolve_class_coefficient(store, academic_year, student_count);

    let mut warnings = Vec::new();
    if lesson_rate.is_fallback() {
        warnings.push(ReportWarning {
            code: LESSON_RATE_MISSING.to_string(),
            message: format!(
                "No active lesson rate for {}; teaching hours earn 0",
                academic_year
            ),
            academic_year: academic_year.to_string(),
        });
    }
    if degree.is_fallback() {
        warnings.push(ReportWarning {
            code: DEGREE_RATE_MISSING.to_string(),
            message: format!(
                "No active degree rate for {}; degree coefficient defaults to 1",
                academic_year
            ),
            academic_year: academic_year.to_string(),
        });
    }
    if class.is_fallback() {
        warnings.push(ReportWarning {
            code: CLASS_SIZE_BAND_MISSING.to_string(),
            message: format!(
                "No active class-size band for {} students in {}; class coefficient defaults to 1",
                student_count, academic_year
            ),
            academic_year: academic_year.to_string(),
        });
    }

    let amount = hours
        .checked_mul(lesson_rate.value)
        .and_then(|a| a.checked_mul(degree.value))
        .and_then(|a| a.checked_mul(class.value))
        .ok_or_else(|| {
            EngineError::data_integrity(
                &section.id,
                format!(
                    "salary amount overflows: {} h x {} x {} x {}",
                    hours, lesson_rate.value, degree.value, class.value
                ),
            )
        })?;

    Ok(SectionSalaryResult {
        line: SalaryLine {
            class_section_id: section.id.clone(),
            section_code: section.code.clone(),
            course_code: course.code.clone(),
            semester_id: section.semester_id.clone(),
            academic_year: academic_year.to_string(),
            student_count,
            hours,
            rate_per_hour: lesson_rate.value,
            degree_coefficient: degree.value,
            class_coefficient: class.value,
            amount,
        },
        warnings,
    })
}
