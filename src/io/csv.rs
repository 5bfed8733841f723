//! Point lists from delimited text.
//!
//! Input is a header row followed by one point per row. The coordinate
//! columns are located by name (`x` and `y` unless configured otherwise);
//! any other columns are ignored.
//!
//! # Example
//!
//! ```
//! use giftwrap::io::CsvPointSource;
//! use giftwrap::Point2;
//!
//! let data = "id;y;x\na;0;1\nb;2.5;-3\n";
//! let points: Vec<Point2<f64>> = CsvPointSource::new()
//!     .delimiter(b';')
//!     .read_reader(data.as_bytes())
//!     .unwrap();
//!
//! assert_eq!(points, vec![Point2::new(1.0, 0.0), Point2::new(-3.0, 2.5)]);
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::primitives::Point2;
use num_traits::Float;
use thiserror::Error;
use tracing::debug;

/// Errors produced while reading a point list.
#[derive(Debug, Error)]
pub enum PointSourceError {
    /// The input file could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed delimited text.
    #[error("malformed delimited input")]
    Csv(#[from] csv::Error),

    /// The header row lacks a coordinate column.
    #[error("missing column `{name}` in header")]
    MissingColumn { name: String },

    /// A coordinate field does not parse as a number.
    #[error("line {line}: column `{column}` has invalid number `{value}`")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    /// A coordinate parsed to NaN or infinity.
    #[error("line {line}: column `{column}` is not finite")]
    NonFinite { line: u64, column: String },

    /// The input holds no points.
    #[error("input contains no points")]
    Empty,
}

/// Reads points from delimited text with a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPointSource {
    delimiter: u8,
    x_column: String,
    y_column: String,
}

impl Default for CsvPointSource {
    fn default() -> Self {
        Self {
            delimiter: b',',
            x_column: "x".to_string(),
            y_column: "y".to_string(),
        }
    }
}

impl CsvPointSource {
    /// Creates a source reading comma-separated `x` and `y` columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the name of the column holding x coordinates.
    pub fn x_column(mut self, name: impl Into<String>) -> Self {
        self.x_column = name.into();
        self
    }

    /// Sets the name of the column holding y coordinates.
    pub fn y_column(mut self, name: impl Into<String>) -> Self {
        self.y_column = name.into();
        self
    }

    /// Reads every point from the file at `path`.
    pub fn read_path<F, P>(&self, path: P) -> Result<Vec<Point2<F>>, PointSourceError>
    where
        F: Float + FromStr,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PointSourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_reader(file)
    }

    /// Reads every point from `reader`.
    ///
    /// Fails if the header lacks a coordinate column, if any coordinate is
    /// not a finite number, or if there are no data rows.
    pub fn read_reader<F, R>(&self, reader: R) -> Result<Vec<Point2<F>>, PointSourceError>
    where
        F: Float + FromStr,
        R: io::Read,
    {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?;
        if headers.is_empty() {
            return Err(PointSourceError::Empty);
        }
        let x_index = column_index(headers, &self.x_column)?;
        let y_index = column_index(headers, &self.y_column)?;

        let mut points = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map_or(row as u64 + 2, |pos| pos.line());

            let x = parse_field(&record, x_index, &self.x_column, line)?;
            let y = parse_field(&record, y_index, &self.y_column, line)?;
            points.push(Point2::new(x, y));
        }

        if points.is_empty() {
            return Err(PointSourceError::Empty);
        }

        debug!(points = points.len(), "read point list");
        Ok(points)
    }
}

/// Reads comma-separated `x` and `y` columns from the file at `path`.
pub fn read_points_csv<F, P>(path: P) -> Result<Vec<Point2<F>>, PointSourceError>
where
    F: Float + FromStr,
    P: AsRef<Path>,
{
    CsvPointSource::new().read_path(path)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, PointSourceError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PointSourceError::MissingColumn {
            name: name.to_string(),
        })
}

fn parse_field<F: Float + FromStr>(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> Result<F, PointSourceError> {
    let raw = record.get(index).unwrap_or_default();
    let value = raw
        .parse::<F>()
        .map_err(|_| PointSourceError::InvalidNumber {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        })?;

    if !value.is_finite() {
        return Err(PointSourceError::NonFinite {
            line,
            column: column.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(data: &str) -> Result<Vec<Point2<f64>>, PointSourceError> {
        CsvPointSource::new().read_reader(data.as_bytes())
    }

    #[test]
    fn test_read_basic() {
        let points = read("x,y\n0,0\n4,0\n0,4\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(0.0, 4.0)
            ]
        );
    }

    #[test]
    fn test_read_ignores_extra_columns_and_whitespace() {
        let points = read("label, y , x,weight\np, 2.5 , -1e2,9\n").unwrap();
        assert_eq!(points, vec![Point2::new(-100.0, 2.5)]);
    }

    #[test]
    fn test_read_custom_columns() {
        let data = "lon\tlat\n1.5\t2.5\n";
        let points: Vec<Point2<f64>> = CsvPointSource::new()
            .delimiter(b'\t')
            .x_column("lon")
            .y_column("lat")
            .read_reader(data.as_bytes())
            .unwrap();
        assert_eq!(points, vec![Point2::new(1.5, 2.5)]);
    }

    #[test]
    fn test_read_f32() {
        let points: Vec<Point2<f32>> = CsvPointSource::new()
            .read_reader("x,y\n1,2\n".as_bytes())
            .unwrap();
        assert_eq!(points, vec![Point2::new(1.0_f32, 2.0)]);
    }

    #[test]
    fn test_missing_column() {
        let err = read("x,z\n1,2\n").unwrap_err();
        assert!(matches!(err, PointSourceError::MissingColumn { ref name } if name == "y"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read(""), Err(PointSourceError::Empty)));
        assert!(matches!(read("x,y\n"), Err(PointSourceError::Empty)));
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = read("x,y\n1,2\n3,abc\n").unwrap_err();
        match err {
            PointSourceError::InvalidNumber {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "y");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_field_is_invalid() {
        let err = read("x,y\n,2\n").unwrap_err();
        assert!(matches!(err, PointSourceError::InvalidNumber { line: 2, .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = read("x,y\n1,2\nNaN,0\n").unwrap_err();
        assert!(matches!(err, PointSourceError::NonFinite { line: 3, ref column } if column == "x"));

        let err = read("x,y\n1,inf\n").unwrap_err();
        assert!(matches!(err, PointSourceError::NonFinite { line: 2, .. }));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = read("x,y\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, PointSourceError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_points_csv::<f64, _>("/nonexistent/giftwrap/points.csv").unwrap_err();
        assert!(matches!(err, PointSourceError::Open { .. }));
        assert!(err.to_string().contains("points.csv"));
    }

    #[test]
    fn test_read_path() {
        let path = std::env::temp_dir().join(format!("giftwrap-read-{}.csv", std::process::id()));
        std::fs::write(&path, "x,y\n0,0\n1,0\n0,1\n").unwrap();
        let points: Vec<Point2<f64>> = read_points_csv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(points.len(), 3);
    }
}
