//! Tabular data model and loading utilities.
//!
//! This module provides the in-memory representation of an uploaded
//! dataset and a loader for the CSV files the tracker works with.
//!
//! A [`Dataset`] is an ordered set of named columns plus row-major cells.
//! Every row has exactly one cell per column; the constructor rejects
//! ragged input. Datasets are immutable once built, so an analysis is a
//! pure function of the dataset and its request.
//!
//! # Example
//!
//! ```ignore
//! use paygap::data::load_csv;
//! use std::path::Path;
//!
//! let hr = load_csv(Path::new("hr.csv"))?;
//! println!("{} rows, {} columns", hr.row_count(), hr.columns().len());
//! ```

mod csv;

pub use csv::{load_csv, read_csv};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ColumnKind, Value};

/// Errors that can occur while loading tabular data.
#[derive(Debug)]
pub enum DataError {
    /// IO error reading the file.
    Io(std::io::Error),

    /// Malformed content at a specific line.
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// A row with the wrong number of fields.
    ShapeMismatch {
        /// Line number of the offending row (1-indexed); 0 when the
        /// dataset was built in memory rather than loaded.
        line: usize,
        /// Number of fields expected (the column count).
        expected: usize,
        /// Number of fields found.
        got: usize,
    },

    /// The input contained a header but no data rows, or no header.
    Empty,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::Parse { line, message } => {
                write!(f, "parse error at line {}: {}", line, message)
            }
            DataError::ShapeMismatch {
                line,
                expected,
                got,
            } => {
                if *line == 0 {
                    write!(f, "row has {} field(s), expected {}", got, expected)
                } else {
                    write!(
                        f,
                        "line {} has {} field(s), expected {}",
                        line, got, expected
                    )
                }
            }
            DataError::Empty => write!(f, "no data rows found"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// An immutable tabular dataset with named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Build a dataset from column names and row-major cells.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Empty` when `columns` is empty, and
    /// `DataError::ShapeMismatch` when any row's length differs from
    /// the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, DataError> {
        if columns.is_empty() {
            return Err(DataError::Empty);
        }
        for row in &rows {
            if row.len() != columns.len() {
                return Err(DataError::ShapeMismatch {
                    line: 0,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds. Callers resolve
    /// indices through [`Dataset::column_index`] first.
    pub fn value(&self, row: usize, col: usize) -> &Value {
        &self.rows[row][col]
    }

    /// Iterate over the cells of one column.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().map(move |row| &row[col])
    }

    /// Classify a column as numeric or categorical.
    ///
    /// Missing cells do not influence the classification. A column with
    /// no non-missing cells is numeric (it has no cell contradicting a
    /// numeric reading).
    pub fn column_kind(&self, col: usize) -> ColumnKind {
        let any_text = self
            .column_values(col)
            .any(|v| matches!(v, Value::Text(_)));
        if any_text {
            ColumnKind::Categorical
        } else {
            ColumnKind::Numeric
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![Value::Number(1.0), Value::Text("x".into())],
                vec![Value::Number(2.0), Value::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![Value::Number(1.0)]],
        );
        assert!(matches!(
            result,
            Err(DataError::ShapeMismatch {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn empty_columns_are_rejected() {
        assert!(matches!(Dataset::new(vec![], vec![]), Err(DataError::Empty)));
    }

    #[test]
    fn column_lookup_and_kinds() {
        let ds = two_by_two();
        assert_eq!(ds.column_index("a"), Some(0));
        assert_eq!(ds.column_index("c"), None);
        assert_eq!(ds.column_kind(0), ColumnKind::Numeric);
        assert_eq!(ds.column_kind(1), ColumnKind::Categorical);
    }

    #[test]
    fn missing_cells_do_not_make_a_column_categorical() {
        let ds = Dataset::new(
            vec!["a".into()],
            vec![vec![Value::Missing], vec![Value::Number(4.0)]],
        )
        .unwrap();
        assert_eq!(ds.column_kind(0), ColumnKind::Numeric);
    }
}
