//! Tabular rendering of the score table and the backtrace path
//!
//! Row and column headers tag each symbol with its occurrence count
//! ("A1", "C1", "A2", ...) so repeated symbols stay distinguishable. The
//! counting map is scoped to one call; nothing here is shared state.

use rustc_hash::FxHashMap;
use std::io::{self, Write};

use crate::align::{PathGrid, ScoreMatrix};

/// Marker for a visited cell in the path table
const PATH_MARK: &str = "X";
/// Marker for an unvisited cell
const PATH_BLANK: &str = ".";

/// Tag each symbol with its occurrence count
pub fn unique_labels(seq: &[u8]) -> Vec<String> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    seq.iter()
        .map(|&c| {
            let n = counts.entry(c).or_insert(0);
            *n += 1;
            format!("{}{}", c as char, n)
        })
        .collect()
}

/// Row and column headers for a (query_len + 1) x (subject_len + 1) table
fn headers(query: &[u8], subject: &[u8]) -> (Vec<String>, Vec<String>) {
    let mut row_labels = vec!["-".to_string()];
    row_labels.extend(unique_labels(query));
    let mut col_labels = vec!["-".to_string()];
    col_labels.extend(unique_labels(subject));
    (row_labels, col_labels)
}

/// Write the labeled score table
pub fn write_score_table<W: Write>(
    writer: &mut W,
    scores: &ScoreMatrix,
    query: &[u8],
    subject: &[u8],
) -> io::Result<()> {
    let cells: Vec<Vec<String>> = (0..scores.rows())
        .map(|i| (0..scores.cols()).map(|j| scores.get(i, j).to_string()).collect())
        .collect();
    write_grid(writer, &cells, query, subject)
}

/// Write the visited-path table, marking cells the traceback walked
pub fn write_path_table<W: Write>(
    writer: &mut W,
    path: &PathGrid,
    query: &[u8],
    subject: &[u8],
) -> io::Result<()> {
    let cells: Vec<Vec<String>> = (0..path.rows())
        .map(|i| {
            (0..path.cols())
                .map(|j| {
                    if path.marked(i, j) {
                        PATH_MARK.to_string()
                    } else {
                        PATH_BLANK.to_string()
                    }
                })
                .collect()
        })
        .collect();
    write_grid(writer, &cells, query, subject)
}

fn write_grid<W: Write>(
    writer: &mut W,
    cells: &[Vec<String>],
    query: &[u8],
    subject: &[u8],
) -> io::Result<()> {
    let (row_labels, col_labels) = headers(query, subject);

    let width = cells
        .iter()
        .flatten()
        .chain(row_labels.iter())
        .chain(col_labels.iter())
        .map(|s| s.len())
        .max()
        .unwrap_or(1);

    write!(writer, "{:>width$}", "")?;
    for label in &col_labels {
        write!(writer, " {label:>width$}")?;
    }
    writeln!(writer)?;

    for (label, row) in row_labels.iter().zip(cells.iter()) {
        write!(writer, "{label:>width$}")?;
        for cell in row {
            write!(writer, " {cell:>width$}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
