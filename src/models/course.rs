//! Course and class section models.
//!
//! A [`Course`] fixes the teaching load of one offering; a [`ClassSection`]
//! is one offering of a course in one semester, optionally assigned to a
//! teacher.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordStatus;

/// Student count used for the class-size lookup when a section has no cap.
pub const DEFAULT_STUDENT_COUNT: u32 = 1;

/// A course in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: String,
    /// Catalogue code (e.g., "CS101").
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    /// Credit value of the course.
    pub credit: u32,
    /// Teaching hours contributed by one offering, independent of who
    /// teaches it or how many students enrol.
    pub total_hours: Decimal,
    /// The department that owns the course.
    pub department_id: String,
}

/// One offering of a course in one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    /// Unique identifier for the section.
    pub id: String,
    /// Section code shown on reports.
    pub code: String,
    /// Human-readable section name.
    pub name: String,
    /// The semester this section runs in.
    pub semester_id: String,
    /// The course being offered.
    pub course_id: String,
    /// Enrolment cap, if one is set.
    #[serde(default)]
    pub max_students: Option<u32>,
    /// The teacher assigned to the section, if any.
    #[serde(default)]
    pub assigned_teacher_id: Option<String>,
    /// Lifecycle status of the section.
    pub status: RecordStatus,
}

impl ClassSection {
    /// Returns the student count used for the class-size lookup.
    ///
    /// Sections without an enrolment cap count as [`DEFAULT_STUDENT_COUNT`].
    ///
    /// # Example
    ///
    /// ```
    /// use teaching_salary_engine::models::{ClassSection, RecordStatus};
    ///
    /// let section = ClassSection {
    ///     id: "cs_001".to_string(),
    ///     code: "CS101-01".to_string(),
    ///     name: "Intro to Programming, group 1".to_string(),
    ///     semester_id: "sem_2023_1".to_string(),
    ///     course_id: "crs_cs101".to_string(),
    ///     max_students: None,
    ///     assigned_teacher_id: Some("tch_001".to_string()),
    ///     status: RecordStatus::Active,
    /// };
    /// assert_eq!(section.effective_student_count(), 1);
    /// ```
    pub fn effective_student_count(&self) -> u32 {
        self.max_students.unwrap_or(DEFAULT_STUDENT_COUNT)
    }

    /// Returns true if the section is assigned to the given teacher.
    pub fn is_assigned_to(&self, teacher_id: &str) -> bool {
        self.assigned_teacher_id.as_deref() == Some(teacher_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_section(max_students: Option<u32>, teacher: Option<&str>) -> ClassSection {
        ClassSection {
            id: "cs_001".to_string(),
            code: "CS101-01".to_string(),
            name: "Intro to Programming, group 1".to_string(),
            semester_id: "sem_2023_1".to_string(),
            course_id: "crs_cs101".to_string(),
            max_students,
            assigned_teacher_id: teacher.map(str::to_string),
            status: RecordStatus::Active,
        }
    }

    #[test]
    fn test_effective_student_count_uses_cap() {
        assert_eq!(create_section(Some(40), None).effective_student_count(), 40);
    }

    #[test]
    fn test_effective_student_count_defaults_to_one() {
        assert_eq!(create_section(None, None).effective_student_count(), 1);
    }

    #[test]
    fn test_is_assigned_to() {
        let section = create_section(Some(40), Some("tch_001"));
        assert!(section.is_assigned_to("tch_001"));
        assert!(!section.is_assigned_to("tch_002"));
        assert!(!create_section(Some(40), None).is_assigned_to("tch_001"));
    }

    #[test]
    fn test_deserialize_section_with_optional_fields_missing() {
        let json = r#"{
            "id": "cs_009",
            "code": "MA201-02",
            "name": "Linear Algebra, group 2",
            "semester_id": "sem_2023_2",
            "course_id": "crs_ma201",
            "status": "ACTIVE"
        }"#;

        let section: ClassSection = serde_json::from_str(json).unwrap();
        assert!(section.max_students.is_none());
        assert!(section.assigned_teacher_id.is_none());
    }
}
