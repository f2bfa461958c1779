//! School records reader.
//!
//! [`SectionReader`] is the read contract for the relational records the
//! engine joins against. Records are supplied by an external collaborator as
//! one consistent snapshot per report request.

use std::collections::HashMap;

use crate::models::{ClassSection, Course, Department, Semester, Teacher};

/// Read access to class sections and the records they reference.
pub trait SectionReader {
    /// Returns every class section, in a stable order.
    fn class_sections(&self) -> &[ClassSection];

    /// Looks up a course by id.
    fn course(&self, id: &str) -> Option<&Course>;

    /// Looks up a semester by id.
    fn semester(&self, id: &str) -> Option<&Semester>;

    /// Looks up a teacher by id.
    fn teacher(&self, id: &str) -> Option<&Teacher>;

    /// Looks up a department by id.
    fn department(&self, id: &str) -> Option<&Department>;
}

/// An in-memory snapshot of school records, indexed by id.
///
/// When two records share an id the later one wins. Class sections keep
/// their input order, which drives first-appearance ordering in reports.
#[derive(Debug, Clone, Default)]
pub struct SchoolRecords {
    departments: HashMap<String, Department>,
    teachers: HashMap<String, Teacher>,
    courses: HashMap<String, Course>,
    semesters: HashMap<String, Semester>,
    class_sections: Vec<ClassSection>,
}

impl SchoolRecords {
    /// Builds a snapshot from record lists.
    pub fn new(
        departments: Vec<Department>,
        teachers: Vec<Teacher>,
        courses: Vec<Course>,
        semesters: Vec<Semester>,
        class_sections: Vec<ClassSection>,
    ) -> Self {
        Self {
            departments: departments
                .into_iter()
                .map(|d| (d.id.clone(), d))
                .collect(),
            teachers: teachers.into_iter().map(|t| (t.id.clone(), t)).collect(),
            courses: courses.into_iter().map(|c| (c.id.clone(), c)).collect(),
            semesters: semesters.into_iter().map(|s| (s.id.clone(), s)).collect(),
            class_sections,
        }
    }

    /// Number of teachers in the snapshot.
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }
}

impl SectionReader for SchoolRecords {
    fn class_sections(&self) -> &[ClassSection] {
        &self.class_sections
    }

    fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    fn semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.get(id)
    }

    fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.get(id)
    }

    fn department(&self, id: &str) -> Option<&Department> {
        self.departments.get(id)
    }
}
