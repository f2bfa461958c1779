//! Application state for the Teaching-Salary Engine API.

use std::sync::Arc;

use crate::store::{CoefficientTables, DataLoader, SchoolRecords};

/// Shared application state.
///
/// Holds one read-only snapshot shared by every request. Requests never
/// mutate it, so report handlers run concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<DataLoader>,
}

impl AppState {
    /// Creates a new application state around a loaded snapshot.
    pub fn new(snapshot: DataLoader) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Returns the coefficient tables.
    pub fn coefficients(&self) -> &CoefficientTables {
        self.snapshot.coefficients()
    }

    /// Returns the school records.
    pub fn records(&self) -> &SchoolRecords {
        self.snapshot.records()
    }
}
