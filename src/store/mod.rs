//! Read contracts and snapshot loading for the Teaching-Salary Engine.
//!
//! The engine never owns a connection or a global client: callers pass in
//! a [`CoefficientStore`] and a [`SectionReader`], and decide how long those
//! live. [`DataLoader`] provides both from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use teaching_salary_engine::store::DataLoader;
//!
//! let loader = DataLoader::load("./data/sample").unwrap();
//! let _ = (loader.coefficients(), loader.records());
//! ```

mod coefficients;
mod loader;
mod records;

pub use coefficients::{CoefficientStore, CoefficientTables};
pub use loader::DataLoader;
pub use records::{SchoolRecords, SectionReader};
