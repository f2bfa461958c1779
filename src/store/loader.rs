//! Snapshot loading functionality.
//!
//! This module provides the [`DataLoader`] type for loading a consistent
//! snapshot of coefficient tables and school records from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{ClassSection, Course, Department, Semester, Teacher};

use super::coefficients::CoefficientTables;
use super::records::SchoolRecords;

#[derive(Debug, Deserialize)]
struct DepartmentsFile {
    departments: Vec<Department>,
}

#[derive(Debug, Deserialize)]
struct TeachersFile {
    teachers: Vec<Teacher>,
}

#[derive(Debug, Deserialize)]
struct CoursesFile {
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct SemestersFile {
    semesters: Vec<Semester>,
}

#[derive(Debug, Deserialize)]
struct ClassSectionsFile {
    class_sections: Vec<ClassSection>,
}

/// Loads and holds one snapshot of engine inputs.
///
/// # Directory Structure
///
/// ```text
/// data/sample/
/// ├── departments.yaml
/// ├── teachers.yaml
/// ├── courses.yaml
/// ├── semesters.yaml
/// ├── class_sections.yaml
/// └── coefficients/
///     └── 2023-2024.yaml   # lesson_rates, degree_rates, class_size_rates
/// ```
///
/// Coefficient files are read in file-name order and concatenated. A
/// missing or empty `coefficients/` directory is not an error: every rate
/// then resolves to its neutral fallback.
///
/// # Example
///
/// ```no_run
/// use teaching_salary_engine::store::{CoefficientStore, DataLoader};
///
/// let loader = DataLoader::load("./data/sample")?;
/// let rows = loader.coefficients().find_lesson_rates("2023-2024");
/// println!("{} lesson-rate rows", rows.len());
/// # Ok::<(), teaching_salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataLoader {
    coefficients: CoefficientTables,
    records: SchoolRecords,
}

impl DataLoader {
    /// Loads a snapshot from the specified directory.
    ///
    /// Returns `ConfigNotFound` if a record file is missing and
    /// `ConfigParseError` if any file contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let departments = Self::load_yaml::<DepartmentsFile>(&path.join("departments.yaml"))?;
        let teachers = Self::load_yaml::<TeachersFile>(&path.join("teachers.yaml"))?;
        let courses = Self::load_yaml::<CoursesFile>(&path.join("courses.yaml"))?;
        let semesters = Self::load_yaml::<SemestersFile>(&path.join("semesters.yaml"))?;
        let class_sections =
            Self::load_yaml::<ClassSectionsFile>(&path.join("class_sections.yaml"))?;

        let coefficients = Self::load_coefficients(&path.join("coefficients"))?;

        let records = SchoolRecords::new(
            departments.departments,
            teachers.teachers,
            courses.courses,
            semesters.semesters,
            class_sections.class_sections,
        );

        Ok(Self::from_parts(coefficients, records))
    }

    /// Wraps already-built tables and records.
    pub fn from_parts(coefficients: CoefficientTables, records: SchoolRecords) -> Self {
        Self {
            coefficients,
            records,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and concatenates every coefficient file in the directory.
    fn load_coefficients(dir: &Path) -> EngineResult<CoefficientTables> {
        let mut tables = CoefficientTables::default();

        if !dir.exists() {
            warn!(path = %dir.display(), "coefficient directory missing; all rates fall back");
            return Ok(tables);
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir.display().to_string(),
        })?;

        let files = Self::yaml_files(dir, entries.map(|entry| entry.map(|e| e.path())))?;

        for file in &files {
            debug!(path = %file.display(), "loading coefficient file");
            tables.merge(Self::load_yaml::<CoefficientTables>(file)?);
        }

        if tables.is_empty() {
            warn!(path = %dir.display(), "no coefficient rows found; all rates fall back");
        }

        Ok(tables)
    }

    /// Collects the `.yaml` paths among directory entries, sorted by name.
    ///
    /// An entry that cannot be read fails the whole load with
    /// `ConfigParseError` on the directory, so a snapshot never silently
    /// loses a coefficient file.
    fn yaml_files<I>(dir: &Path, entries: I) -> EngineResult<Vec<PathBuf>>
    where
        I: IntoIterator<Item = std::io::Result<PathBuf>>,
    {
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| EngineError::ConfigParseError {
                path: dir.display().to_string(),
                message: format!("failed to read directory entry: {}", e),
            })?;
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Returns the coefficient tables.
    pub fn coefficients(&self) -> &CoefficientTables {
        &self.coefficients
    }

    /// Returns the school records.
    pub fn records(&self) -> &SchoolRecords {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CoefficientStore, SectionReader};
    use std::io::{Error, ErrorKind};
    use tempfile::TempDir;

    fn data_path() -> &'static str {
        "./data/sample"
    }

    /// Writes a snapshot with empty record lists, then applies `overrides`
    /// as (relative path, contents) pairs.
    fn write_snapshot(overrides: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("coefficients")).unwrap();

        let defaults = [
            ("departments.yaml", "departments: []\n"),
            ("teachers.yaml", "teachers: []\n"),
            ("courses.yaml", "courses: []\n"),
            ("semesters.yaml", "semesters: []\n"),
            ("class_sections.yaml", "class_sections: []\n"),
        ];
        for (name, contents) in defaults.iter().chain(overrides) {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_snapshot() {
        let result = DataLoader::load(data_path());
        assert!(result.is_ok(), "Failed to load snapshot: {:?}", result.err());

        let loader = result.unwrap();
        assert!(loader.records().teacher("tch_001").is_some());
        assert!(!loader.records().class_sections().is_empty());
    }

    #[test]
    fn test_coefficients_loaded_for_year() {
        let loader = DataLoader::load(data_path()).unwrap();

        assert!(!loader.coefficients().find_lesson_rates("2023-2024").is_empty());
        assert!(!loader.coefficients().find_degree_rates("2023-2024").is_empty());
        assert!(
            !loader
                .coefficients()
                .find_class_size_rates("2023-2024")
                .is_empty()
        );
    }

    #[test]
    fn test_year_without_class_size_bands() {
        let loader = DataLoader::load(data_path()).unwrap();
        assert!(
            loader
                .coefficients()
                .find_class_size_rates("2024-2025")
                .is_empty()
        );
        assert!(!loader.coefficients().find_lesson_rates("2024-2025").is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = DataLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("departments.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_coefficient_directory_is_empty_tables() {
        let tables = DataLoader::load_coefficients(Path::new("/nonexistent/coefficients")).unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_empty_snapshot_loads() {
        let dir = write_snapshot(&[]);
        let loader = DataLoader::load(dir.path()).unwrap();

        assert!(loader.records().class_sections().is_empty());
        assert!(loader.coefficients().is_empty());
    }

    #[test]
    fn test_malformed_record_file_returns_parse_error() {
        let dir = write_snapshot(&[("teachers.yaml", "teachers: [ { id: tch_001\n")]);

        match DataLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.ends_with("teachers.yaml"), "unexpected path {}", path);
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_coefficient_file_returns_parse_error() {
        let dir = write_snapshot(&[
            ("coefficients/2023-2024.yaml", "lesson_rates:\n  - id: lr\n    amount_per_hour: [\n"),
        ]);

        match DataLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("2023-2024.yaml"), "unexpected path {}", path);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_files_sorted_and_filtered() {
        let entries = vec![
            Ok(PathBuf::from("coefficients/2024-2025.yaml")),
            Ok(PathBuf::from("coefficients/README.md")),
            Ok(PathBuf::from("coefficients/2023-2024.yaml")),
        ];

        let files = DataLoader::yaml_files(Path::new("coefficients"), entries).unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("coefficients/2023-2024.yaml"),
                PathBuf::from("coefficients/2024-2025.yaml"),
            ]
        );
    }

    #[test]
    fn test_unreadable_directory_entry_fails_load() {
        let entries = vec![
            Ok(PathBuf::from("coefficients/2023-2024.yaml")),
            Err(Error::new(ErrorKind::PermissionDenied, "denied")),
        ];

        match DataLoader::yaml_files(Path::new("coefficients"), entries) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "coefficients");
                assert!(message.contains("denied"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
