//! CSV parsing for uploaded HR and communication data.
//!
//! The tracker's input files are plain comma-separated text with a
//! header row naming the columns. Fields are split on commas; quoting
//! is not supported. Cell interpretation:
//!
//! - empty field, `NA`, `NaN`, or `null` (case-insensitive) -> missing
//! - anything that parses as `f64` -> numeric
//! - everything else -> text (categorical)

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{DataError, Dataset};
use crate::types::Value;

/// Load a dataset from a CSV file with a header row.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// A `Dataset` whose columns are the header fields, in file order.
///
/// # Errors
/// Returns `DataError` if the file cannot be read, a row's field count
/// differs from the header's, or no data rows are present.
pub fn load_csv(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

/// Parse CSV content from any buffered reader.
///
/// Same format and errors as [`load_csv`]; useful when the content is
/// already in memory (e.g. an upload buffer).
pub fn read_csv<R: BufRead>(reader: R) -> Result<Dataset, DataError> {
    let mut columns: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Value>> = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim_end_matches('\r');

        // Skip blank lines wherever they appear
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        match &columns {
            None => {
                if fields.iter().any(|f| f.is_empty()) {
                    return Err(DataError::Parse {
                        line: line_idx + 1,
                        message: "header contains an empty column name".to_string(),
                    });
                }
                columns = Some(fields.iter().map(|f| f.to_string()).collect());
            }
            Some(header) => {
                if fields.len() != header.len() {
                    return Err(DataError::ShapeMismatch {
                        line: line_idx + 1,
                        expected: header.len(),
                        got: fields.len(),
                    });
                }
                rows.push(fields.iter().map(|f| parse_cell(f)).collect());
            }
        }
    }

    let columns = columns.ok_or(DataError::Empty)?;
    if rows.is_empty() {
        return Err(DataError::Empty);
    }
    Dataset::new(columns, rows)
}

/// Interpret one CSV field as a cell value.
fn parse_cell(field: &str) -> Value {
    if field.is_empty() || field.eq_ignore_ascii_case("na") || field.eq_ignore_ascii_case("nan")
        || field.eq_ignore_ascii_case("null")
    {
        return Value::Missing;
    }
    match field.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::Number(x),
        _ => Value::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_header_and_typed_cells() {
        let input = "name,salary,dept\nalice,52000,Eng\nbob,48000,Sales\n";
        let ds = read_csv(Cursor::new(input)).unwrap();

        assert_eq!(ds.columns(), &["name", "salary", "dept"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.value(0, 1), &Value::Number(52000.0));
        assert_eq!(ds.value(1, 2), &Value::Text("Sales".into()));
    }

    #[test]
    fn missing_markers_become_missing() {
        let input = "a,b\n,NA\nnan,NULL\n";
        let ds = read_csv(Cursor::new(input)).unwrap();

        for row in 0..2 {
            for col in 0..2 {
                assert!(ds.value(row, col).is_missing(), "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn field_count_mismatch_reports_line() {
        let input = "a,b\n1,2\n3\n";
        let result = read_csv(Cursor::new(input));

        match result {
            Err(DataError::ShapeMismatch { line, expected, got }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn header_only_is_empty() {
        let result = read_csv(Cursor::new("a,b\n"));
        assert!(matches!(result, Err(DataError::Empty)));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "a\n\n1\n\n2\n";
        let ds = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn non_finite_literals_stay_textual_or_missing() {
        // "nan" is a missing marker; "inf" parses as f64 but is not finite
        let input = "a\ninf\n";
        let ds = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(ds.value(0, 0), &Value::Text("inf".into()));
    }
}
