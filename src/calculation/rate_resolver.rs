//! Rate resolution.
//!
//! Each coefficient table may hold zero, one, or several rows for a year.
//! The functions here pick exactly one value per lookup and never fail:
//! a missing configuration resolves to a neutral value and is reported
//! through [`RateSource::Fallback`] so callers can surface a warning.
//!
//! | Table      | Selection                                     | Fallback |
//! |------------|-----------------------------------------------|----------|
//! | lesson     | latest `created_at` among ACTIVE rows         | 0        |
//! | degree     | latest `created_at` among ACTIVE rows         | 1        |
//! | class size | first ACTIVE band containing the count, by ascending `min_students` | 1 |

use rust_decimal::Decimal;

use crate::models::DegreeTier;
use crate::store::CoefficientStore;

/// Per-hour rate used when no active lesson rate exists for a year.
pub const LESSON_RATE_FALLBACK: Decimal = Decimal::ZERO;

/// Multiplier used when no degree or class-size row applies.
pub const NEUTRAL_COEFFICIENT: Decimal = Decimal::ONE;

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateSource {
    /// Read from the row with this id.
    Configured {
        /// The id of the selected row.
        row_id: String,
    },
    /// No row applied; the neutral value was used.
    Fallback,
}

/// A single resolved rate or multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRate {
    /// The value to multiply by.
    pub value: Decimal,
    /// Where the value came from.
    pub source: RateSource,
}

impl ResolvedRate {
    fn configured(value: Decimal, row_id: &str) -> Self {
        Self {
            value,
            source: RateSource::Configured {
                row_id: row_id.to_string(),
            },
        }
    }

    fn fallback(value: Decimal) -> Self {
        Self {
            value,
            source: RateSource::Fallback,
        }
    }

    /// Returns true if no configured row applied.
    pub fn is_fallback(&self) -> bool {
        self.source == RateSource::Fallback
    }
}

/// Resolves the per-hour lesson rate for an academic year.
///
/// Among ACTIVE rows for the year, the one with the latest `created_at`
/// wins. With no active row the rate is 0: teaching still counts, but
/// earns nothing until a rate is configured.
///
/// # Example
///
/// ```
/// use teaching_salary_engine::calculation::resolve_lesson_rate;
/// use teaching_salary_engine::store::CoefficientTables;
/// use rust_decimal::Decimal;
///
/// let tables = CoefficientTables::default();
/// let rate = resolve_lesson_rate(&tables, "2023-2024");
/// assert_eq!(rate.value, Decimal::ZERO);
/// assert!(rate.is_fallback());
/// ```
pub fn resolve_lesson_rate<S>(store: &S, academic_year: &str) -> ResolvedRate
where
    S: CoefficientStore + ?Sized,
{
    store
        .find_lesson_rates(academic_year)
        .into_iter()
        .filter(|r| r.status.is_active())
        .max_by_key(|r| r.created_at)
        .map(|r| ResolvedRate::configured(r.amount_per_hour, &r.id))
        .unwrap_or_else(|| ResolvedRate::fallback(LESSON_RATE_FALLBACK))
}

/// Resolves the degree-tier multiplier for an academic year.
///
/// Among ACTIVE rows for the year, the one with the latest `created_at`
/// wins and the field matching `tier` is read. With no active row the
/// multiplier is 1, so load is reported undiscounted rather than zeroed.
pub fn resolve_degree_coefficient<S>(
    store: &S,
    academic_year: &str,
    tier: DegreeTier,
) -> ResolvedRate
where
    S: CoefficientStore + ?Sized,
{
    store
        .find_degree_rates(academic_year)
        .into_iter()
        .filter(|r| r.status.is_active())
        .max_by_key(|r| r.created_at)
        .map(|r| ResolvedRate::configured(r.coefficient_for(tier), &r.id))
        .unwrap_or_else(|| ResolvedRate::fallback(NEUTRAL_COEFFICIENT))
}

/// Resolves the class-size multiplier for a student count.
///
/// ACTIVE bands for the year are ordered by `min_students` ascending (ties
/// keep store order) and the first band containing `student_count` wins.
/// Overlapping bands therefore always resolve the same way. A count that
/// falls in a gap, or below every band, gets a multiplier of 1.
pub fn resolve_class_coefficient<S>(
    store: &S,
    academic_year: &str,
    student_count: u32,
) -> ResolvedRate
where
    S: CoefficientStore + ?Sized,
{
    let mut bands: Vec<_> = store
        .find_class_size_rates(academic_year)
        .into_iter()
        .filter(|r| r.status.is_active())
        .collect();
    bands.sort_by_key(|r| r.min_students);

    bands
        .into_iter()
        .find(|r| r.contains(student_count))
        .map(|r| ResolvedRate::configured(r.coefficient, &r.id))
        .unwrap_or_else(|| ResolvedRate::fallback(NEUTRAL_COEFFICIENT))
}
