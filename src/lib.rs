//! Teaching-Salary Engine
//!
//! This crate computes the money owed to university teachers for their
//! teaching load. Given a report scope (school, department, or one teacher;
//! over an academic year, a semester, or a month) and versioned per-year
//! coefficient tables, it derives one salary line per class section and
//! folds the lines into per-teacher and grand totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod store;
