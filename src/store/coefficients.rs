//! Coefficient store.
//!
//! [`CoefficientStore`] is the read contract for the three rule tables.
//! It performs no selection: every row for the requested academic year is
//! returned, active or not, and picking one is the rate resolver's job.

use serde::{Deserialize, Serialize};

use crate::models::{ClassSizeRate, DegreeRate, LessonRate};

/// Read access to the per-academic-year coefficient tables.
///
/// Implementations may be backed by a database, a cache, or an in-memory
/// snapshot. Each lookup returns raw rows for the given year, possibly
/// none and possibly several.
pub trait CoefficientStore {
    /// Returns every lesson-rate row for the academic year.
    fn find_lesson_rates(&self, academic_year: &str) -> Vec<&LessonRate>;

    /// Returns every degree-rate row for the academic year.
    fn find_degree_rates(&self, academic_year: &str) -> Vec<&DegreeRate>;

    /// Returns every class-size band for the academic year.
    fn find_class_size_rates(&self, academic_year: &str) -> Vec<&ClassSizeRate>;
}

/// An in-memory snapshot of the three coefficient tables.
///
/// Also the on-disk shape of each file under `coefficients/`; any table may
/// be omitted from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientTables {
    /// Lesson-rate rows, all years.
    #[serde(default)]
    pub lesson_rates: Vec<LessonRate>,
    /// Degree-rate rows, all years.
    #[serde(default)]
    pub degree_rates: Vec<DegreeRate>,
    /// Class-size bands, all years.
    #[serde(default)]
    pub class_size_rates: Vec<ClassSizeRate>,
}

impl CoefficientTables {
    /// Appends every row of `other`, keeping row order.
    pub fn merge(&mut self, other: CoefficientTables) {
        self.lesson_rates.extend(other.lesson_rates);
        self.degree_rates.extend(other.degree_rates);
        self.class_size_rates.extend(other.class_size_rates);
    }

    /// Returns true if no table holds any row.
    pub fn is_empty(&self) -> bool {
        self.lesson_rates.is_empty()
            && self.degree_rates.is_empty()
            && self.class_size_rates.is_empty()
    }
}

impl CoefficientStore for CoefficientTables {
    fn find_lesson_rates(&self, academic_year: &str) -> Vec<&LessonRate> {
        self.lesson_rates
            .iter()
            .filter(|r| r.academic_year == academic_year)
            .collect()
    }

    fn find_degree_rates(&self, academic_year: &str) -> Vec<&DegreeRate> {
        self.degree_rates
            .iter()
            .filter(|r| r.academic_year == academic_year)
            .collect()
    }

    fn find_class_size_rates(&self, academic_year: &str) -> Vec<&ClassSizeRate> {
        self.class_size_rates
            .iter()
            .filter(|r| r.academic_year == academic_year)
            .collect()
    }
}
