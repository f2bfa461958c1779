//! Calculation logic for the Teaching-Salary Engine.
//!
//! The pipeline runs leaf-first: rate resolution against the coefficient
//! store, per-section salary calculation, then scope aggregation into a
//! report, with month scoping for personal views. Every stage is a pure
//! function of its inputs.

mod rate_resolver;
mod scope_aggregator;
mod section_salary;
mod temporal_filter;

pub use rate_resolver::{
    LESSON_RATE_FALLBACK, NEUTRAL_COEFFICIENT, RateSource, ResolvedRate,
    resolve_class_coefficient, resolve_degree_coefficient, resolve_lesson_rate,
};
pub use scope_aggregator::build_salary_report;
pub use section_salary::{
    CLASS_SIZE_BAND_MISSING, DEGREE_RATE_MISSING, LESSON_RATE_MISSING, SectionSalaryResult,
    compute_section_salary,
};
pub use temporal_filter::semester_covers_month;
