//! Record tables with time-of-day columns
//!
//! Any column only has to report its length and render its cells; the table
//! itself is drawn by `prettytable`.

use crate::constants::MISSING_LABEL;
use crate::error::HmsError;
use crate::format::format_cells;
use crate::types::HmsVec;
use core::fmt;
use prettytable::{Cell, Row, Table};

#[cfg(feature = "logging")]
use tracing::debug;

/// A column that can be placed in a [`RecordTable`]
pub trait Column {
    /// Number of rows
    fn len(&self) -> usize;

    /// Check if the column has no rows
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rendered cells, one per row
    fn format_cells(&self) -> Vec<String>;
}

impl Column for HmsVec {
    fn len(&self) -> usize {
        HmsVec::len(self)
    }

    fn format_cells(&self) -> Vec<String> {
        format_cells(self)
    }
}

impl Column for Vec<String> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn format_cells(&self) -> Vec<String> {
        self.clone()
    }
}

impl Column for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn format_cells(&self) -> Vec<String> {
        self.iter()
            .map(|v| {
                if v.is_nan() {
                    MISSING_LABEL.to_string()
                } else {
                    v.to_string()
                }
            })
            .collect()
    }
}

impl Column for Vec<i64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn format_cells(&self) -> Vec<String> {
        self.iter().map(|v| v.to_string()).collect()
    }
}

/// A table of named columns with a common row count
#[derive(Default)]
pub struct RecordTable {
    names: Vec<String>,
    columns: Vec<Box<dyn Column>>,
}

impl RecordTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; its length must match the columns already present
    pub fn add_column<C: Column + 'static>(
        &mut self,
        name: impl Into<String>,
        column: C,
    ) -> Result<(), HmsError> {
        let name = name.into();
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(HmsError::ColumnLengthMismatch {
                    column: name,
                    expected: first.len(),
                    actual: column.len(),
                });
            }
        }

        #[cfg(feature = "logging")]
        debug!("Adding column {} with {} row(s)", name, column.len());

        self.names.push(name);
        self.columns.push(Box::new(column));
        Ok(())
    }

    /// Builder-style [`RecordTable::add_column`]
    pub fn with_column<C: Column + 'static>(
        mut self,
        name: impl Into<String>,
        column: C,
    ) -> Result<Self, HmsError> {
        self.add_column(name, column)?;
        Ok(self)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Build the `prettytable` representation
    pub fn to_pretty(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(
            self.names.iter().map(|n| Cell::new(n)).collect(),
        ));

        let cells: Vec<Vec<String>> = self.columns.iter().map(|c| c.format_cells()).collect();
        for row in 0..self.nrows() {
            table.add_row(Row::new(
                cells.iter().map(|col| Cell::new(&col[row])).collect(),
            ));
        }
        table
    }
}

impl fmt::Display for RecordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pretty())
    }
}
