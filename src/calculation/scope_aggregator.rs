//! Scope aggregation.
//!
//! Every salary report, whatever its dimension, is produced by the same
//! primitive: select the assigned class sections that satisfy the scope
//! filter, compute one [`SalaryLine`](crate::models::SalaryLine) per section, and group the lines by
//! teacher in order of first appearance. Totals are sums of unrounded line
//! amounts; the grand total is summed from the lines themselves. Sums are
//! checked, and a section whose amount would overflow a total is treated
//! like any other inconsistent section.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClassSection, Course, ExcludedSection, ReportPeriod, ReportQuery, ReportScope, ReportWarning,
    SalaryReport, Semester, Teacher, TeacherSalary, round_for_display,
};
use crate::store::{CoefficientStore, SectionReader};

use super::section_salary::{SectionSalaryResult, compute_section_salary};
use super::temporal_filter::semester_covers_month;

/// A class section joined with the records it references.
struct JoinedSection<'r> {
    section: &'r ClassSection,
    semester: &'r Semester,
    course: &'r Course,
    teacher: &'r Teacher,
}

/// Builds a salary report for the requested scope.
///
/// Sections without an assigned teacher are never considered. A section
/// whose semester, course, or teacher cannot be found is a data-integrity
/// error, as is an amount too large to add to the running totals: with
/// `options.strict` the whole report fails, otherwise the section is
/// skipped and listed in `excluded_sections`.
///
/// # Errors
///
/// * `InvalidScope` if the scope fails validation or names an unknown
///   semester, department, or personal teacher. These are detected before
///   any section is read.
/// * `DataIntegrity` in strict mode, for the first inconsistent section,
///   including one whose amount overflows a total.
///
/// # Example
///
/// ```no_run
/// use teaching_salary_engine::calculation::build_salary_report;
/// use teaching_salary_engine::models::{ReportPeriod, ReportQuery, ReportScope};
/// use teaching_salary_engine::store::DataLoader;
///
/// let loader = DataLoader::load("./data/sample")?;
/// let query = ReportQuery::new(ReportScope::School {
///     period: ReportPeriod::AcademicYear { academic_year: "2023-2024".to_string() },
/// });
/// let report = build_salary_report(&query, loader.coefficients(), loader.records())?;
/// println!("grand total: {}", report.grand_total);
/// # Ok::<(), teaching_salary_engine::error::EngineError>(())
/// ```
pub fn build_salary_report<S, R>(
    query: &ReportQuery,
    store: &S,
    records: &R,
) -> EngineResult<SalaryReport>
where
    S: CoefficientStore + ?Sized,
    R: SectionReader + ?Sized,
{
    let start_time = Instant::now();
    let scope = &query.scope;

    scope.validate()?;
    if let ReportPeriod::Semester { semester_id } = scope.period() {
        if records.semester(semester_id).is_none() {
            return Err(EngineError::invalid_scope(format!(
                "unknown semester '{}'",
                semester_id
            )));
        }
    }
    if let ReportScope::Department { department_id, .. } = scope {
        if records.department(department_id).is_none() {
            return Err(EngineError::invalid_scope(format!(
                "unknown department '{}'",
                department_id
            )));
        }
    }

    let mut teachers: Vec<TeacherSalary> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    if let ReportScope::Personal { teacher_id, .. } = scope {
        let teacher = records.teacher(teacher_id).ok_or_else(|| {
            EngineError::invalid_scope(format!("unknown teacher '{}'", teacher_id))
        })?;
        // The self-service view always shows the requesting teacher, even
        // with nothing taught in the period.
        positions.insert(teacher.id.clone(), 0);
        teachers.push(empty_teacher_salary(teacher));
    }

    info!(scope = ?scope, strict = query.options.strict, "Building salary report");

    let mut warnings: Vec<ReportWarning> = Vec::new();
    let mut excluded: Vec<ExcludedSection> = Vec::new();
    let mut grand_total = Decimal::ZERO;

    for section in records.class_sections() {
        let joined = match select_section(scope, section, records) {
            Ok(Some(joined)) => joined,
            Ok(None) => continue,
            Err(err) => {
                exclude_or_abort(query.options.strict, section, err, &mut excluded)?;
                continue;
            }
        };

        let running = positions
            .get(&joined.teacher.id)
            .map(|&p| (teachers[p].total_salary, teachers[p].total_hours))
            .unwrap_or_default();
        let priced = match price_section(&joined, store, grand_total, running) {
            Ok(priced) => priced,
            Err(err) => {
                exclude_or_abort(query.options.strict, section, err, &mut excluded)?;
                continue;
            }
        };

        for warning in priced.result.warnings {
            if !warnings.contains(&warning) {
                warn!(
                    code = %warning.code,
                    academic_year = %warning.academic_year,
                    "{}",
                    warning.message
                );
                warnings.push(warning);
            }
        }

        let position = *positions
            .entry(joined.teacher.id.clone())
            .or_insert_with(|| {
                teachers.push(empty_teacher_salary(joined.teacher));
                teachers.len() - 1
            });
        let entry = &mut teachers[position];
        entry.total_salary = priced.teacher_salary;
        entry.total_hours = priced.teacher_hours;
        entry.lines.push(priced.result.line);
        grand_total = priced.grand_total;
    }

    let display_places = query.options.display_decimal_places;
    for teacher in &mut teachers {
        teacher.display_total_salary =
            display_places.map(|dp| round_for_display(teacher.total_salary, dp));
    }

    let line_count: usize = teachers.iter().map(|t| t.lines.len()).sum();

    info!(
        teachers = teachers.len(),
        lines = line_count,
        grand_total = %grand_total,
        excluded = excluded.len(),
        warnings = warnings.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Salary report completed"
    );

    Ok(SalaryReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scope: scope.clone(),
        teachers,
        grand_total,
        display_grand_total: display_places.map(|dp| round_for_display(grand_total, dp)),
        excluded_count: excluded.len(),
        excluded_sections: excluded,
        warnings,
    })
}

/// Decides whether a section belongs to the scope, joining records as
/// needed.
///
/// Joins happen in filter order (semester, then course, then teacher) so
/// that a broken reference only counts against the report when the section
/// could still be in scope.
fn select_section<'r, R>(
    scope: &ReportScope,
    section: &'r ClassSection,
    records: &'r R,
) -> EngineResult<Option<JoinedSection<'r>>>
where
    R: SectionReader + ?Sized,
{
    let Some(teacher_id) = section.assigned_teacher_id.as_deref() else {
        return Ok(None);
    };

    if let ReportScope::Personal {
        teacher_id: requested,
        ..
    } = scope
    {
        if !section.is_assigned_to(requested) {
            return Ok(None);
        }
    }

    if let ReportPeriod::Semester { semester_id } = scope.period() {
        if section.semester_id != *semester_id {
            return Ok(None);
        }
    }

    let semester = records.semester(&section.semester_id).ok_or_else(|| {
        EngineError::data_integrity(
            &section.id,
            format!("semester '{}' not found", section.semester_id),
        )
    })?;

    let period_matches = match scope.period() {
        ReportPeriod::AcademicYear { academic_year } => semester.academic_year == *academic_year,
        ReportPeriod::Semester { .. } => true,
        ReportPeriod::Month {
            academic_year,
            month,
        } => semester.academic_year == *academic_year && semester_covers_month(semester, *month),
    };
    if !period_matches {
        return Ok(None);
    }

    let course = records.course(&section.course_id).ok_or_else(|| {
        EngineError::data_integrity(
            &section.id,
            format!("course '{}' not found", section.course_id),
        )
    })?;

    if let ReportScope::Department { department_id, .. } = scope {
        if course.department_id != *department_id {
            return Ok(None);
        }
    }

    let teacher = records.teacher(teacher_id).ok_or_else(|| {
        EngineError::data_integrity(&section.id, format!("teacher '{}' not found", teacher_id))
    })?;

    debug!(section_id = %section.id, teacher_id = %teacher.id, "Section in scope");

    Ok(Some(JoinedSection {
        section,
        semester,
        course,
        teacher,
    }))
}

fn empty_teacher_salary(teacher: &Teacher) -> TeacherSalary {
    TeacherSalary {
        teacher_id: teacher.id.clone(),
        teacher_code: teacher.code.clone(),
        teacher_name: teacher.name.clone(),
        department_id: teacher.department_id.clone(),
        degree_tier: teacher.degree_tier,
        total_hours: Decimal::ZERO,
        total_salary: Decimal::ZERO,
        display_total_salary: None,
        lines: Vec::new(),
    }
}

/// A computed line plus the running totals it produces.
struct PricedSection {
    result: SectionSalaryResult,
    grand_total: Decimal,
    teacher_salary: Decimal,
    teacher_hours: Decimal,
}

/// Computes a section's line and adds it to the running totals.
///
/// `running` is the teacher's `(total_salary, total_hours)` so far. Any
/// overflow is reported against the section, so it goes through the same
/// skip or abort path as a broken reference.
fn price_section<S>(
    joined: &JoinedSection<'_>,
    store: &S,
    grand_total: Decimal,
    running: (Decimal, Decimal),
) -> EngineResult<PricedSection>
where
    S: CoefficientStore + ?Sized,
{
    let result = compute_section_salary(
        joined.section,
        joined.course,
        joined.teacher,
        &joined.semester.academic_year,
        store,
    )?;

    let overflow = |what: &str| {
        EngineError::data_integrity(&joined.section.id, format!("{} overflows", what))
    };
    let (teacher_salary, teacher_hours) = running;

    Ok(PricedSection {
        grand_total: grand_total
            .checked_add(result.line.amount)
            .ok_or_else(|| overflow("grand total"))?,
        teacher_salary: teacher_salary
            .checked_add(result.line.amount)
            .ok_or_else(|| overflow("teacher salary total"))?,
        teacher_hours: teacher_hours
            .checked_add(result.line.hours)
            .ok_or_else(|| overflow("teacher hours total"))?,
        result,
    })
}

/// Aborts in strict mode, otherwise records the section as excluded.
fn exclude_or_abort(
    strict: bool,
    section: &ClassSection,
    err: EngineError,
    excluded: &mut Vec<ExcludedSection>,
) -> EngineResult<()> {
    if strict {
        warn!(section_id = %section.id, error = %err, "Aborting report");
        return Err(err);
    }
    warn!(section_id = %section.id, error = %err, "Skipping class section");
    excluded.push(ExcludedSection {
        section_id: section.id.clone(),
        reason: err.to_string(),
    });
    Ok(())
}
