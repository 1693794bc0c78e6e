//! Point set reader
//!
//! One point per line, coordinates separated by commas. Whitespace-only lines are
//! skipped; the first point fixes the dimension.

use std::path::Path;

use symnmf::core::Matrix;

use crate::error::{CliError, CliResult};

/// Read a point set from `path`
pub fn read_points(path: &Path) -> CliResult<Matrix> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = parse_points(&text)?;
    tracing::debug!(
        path = %path.display(),
        n = points.rows(),
        d = points.cols(),
        "points loaded"
    );
    Ok(points)
}

/// Parse comma-separated rows into an `n × d` matrix
pub fn parse_points(text: &str) -> CliResult<Matrix> {
    let mut data = Vec::new();
    let mut dim = None;
    let mut rows = 0;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let start = data.len();
        for (column, field) in line.split(',').enumerate() {
            let field = field.trim();
            let value = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CliError::Parse {
                    line: line_no,
                    column: column + 1,
                    value: field.to_string(),
                })?;
            data.push(value);
        }

        let width = data.len() - start;
        match dim {
            None => dim = Some(width),
            Some(expected) if expected != width => {
                return Err(CliError::Ragged {
                    line: line_no,
                    expected,
                    actual: width,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = dim.ok_or(CliError::Empty)?;
    Ok(Matrix::from_vec(data, rows, cols)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_points() {
        let m = parse_points("0,0\n1.5, -2\n0,1e-3\n").unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.get(1, 0), 1.5);
        assert_eq!(m.get(1, 1), -2.0);
        assert_eq!(m.get(2, 1), 1e-3);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let m = parse_points("1,2\n\n3,4\n\n   \n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse_points("1,2\n3\n").unwrap_err();
        assert!(matches!(
            err,
            CliError::Ragged {
                line: 2,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_bad_field_reports_position() {
        let err = parse_points("1,2\n\n3,x\n").unwrap_err();
        match err {
            CliError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!((line, column), (3, 2));
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            parse_points("1,\n"),
            Err(CliError::Parse { column: 2, .. })
        ));
        assert!(matches!(
            parse_points("nan,1\n"),
            Err(CliError::Parse { column: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_points(""), Err(CliError::Empty)));
        assert!(matches!(parse_points("\n \n"), Err(CliError::Empty)));
    }

    #[test]
    fn test_read_points_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0\n1,0\n0,1").unwrap();

        let m = read_points(file.path()).unwrap();
        assert_eq!(m.shape(), (3, 2));

        let missing = file.path().with_extension("missing");
        assert!(matches!(read_points(&missing), Err(CliError::Io { .. })));
    }
}
