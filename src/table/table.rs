//! Conventional table (collection of named, typed columns)
//!
//! This is the slow, label-addressed structure that frames are built from
//! and rendered back into. Lookups by name are linear scans.

use super::Column;
use crate::error::{FrameError, Result};

/// A table is a collection of named, typed columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub names: Vec<String>,
    pub columns: Vec<Column>,
}

impl Table {
    /// Build a table, checking that names and columns line up and that
    /// every column has the same length.
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        let table = Self { names, columns };
        table.validate()?;
        Ok(table)
    }

    /// Check the shape invariants `new` enforces
    ///
    /// Fields are public, so tables built by hand are checked again by
    /// consumers that index rows across columns.
    pub fn validate(&self) -> Result<()> {
        if self.names.len() != self.columns.len() {
            return Err(FrameError::WidthMismatch {
                expected: self.names.len(),
                actual: self.columns.len(),
            });
        }
        let expected = self.row_count();
        for (name, col) in self.names.iter().zip(&self.columns) {
            if col.len() != expected {
                return Err(FrameError::LengthMismatch {
                    column: name.clone(),
                    expected,
                    actual: col.len(),
                });
            }
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Label lookup (linear in the number of columns)
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Label-based cell access: find the column, then index the row
    pub fn cell(&self, row: usize, name: &str) -> Option<f64> {
        self.column(name)?.get_f64(row)
    }
}
