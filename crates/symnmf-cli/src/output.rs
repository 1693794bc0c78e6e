//! Result formatting: four decimals, comma separated, one row per line

use std::io::{self, Write};

use symnmf::core::Matrix;
use symnmf::Analysis;

/// Render `matrix` with each value as `{:.4}`
pub fn format_matrix(matrix: &Matrix) -> String {
    let mut out = String::new();
    for row in matrix.as_array().outer_iter() {
        let line: Vec<String> = row.iter().map(|v| format!("{:.4}", v)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> io::Result<()> {
    writer.write_all(format_matrix(matrix).as_bytes())?;
    writer.flush()
}

pub fn write_scores<W: Write>(writer: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(writer, "nmf: {:.4}", analysis.nmf)?;
    writeln!(writer, "kmeans: {:.4}", analysis.kmeans)?;
    writer.flush()
}
