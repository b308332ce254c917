//! Backward walk over the move grid
//!
//! The walk is shared logic: alignment reconstruction and path marking both
//! consume the same step list, so the transition rules and terminal tests
//! live in exactly one place.

use super::matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};
use super::scoring::{AlignMode, GAP_CHAR};

/// One visited cell of the backward walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub row: usize,
    pub col: usize,
    pub dir: TracebackDir,
}

/// Grid flagging every cell the traceback walk visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGrid {
    data: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl PathGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn marked(&self, row: usize, col: usize) -> bool {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn mark(&mut self, row: usize, col: usize) {
        self.data[row * self.cols + col] = true;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Walk backward from `end` until the mode's terminal test holds.
///
/// Global mode stops at the origin; local mode stops at the first zero-score
/// cell. Steps come back in walk order, end cell first.
pub fn walk(
    scores: &ScoreMatrix,
    moves: &TracebackMatrix,
    mode: AlignMode,
    end: (usize, usize),
) -> Vec<PathStep> {
    let (mut row, mut col) = end;
    let mut steps = Vec::new();

    loop {
        let done = match mode {
            AlignMode::Global => row == 0 && col == 0,
            AlignMode::Local => scores.get(row, col) == 0,
        };
        if done {
            break;
        }

        // Boundary cells carry no move tag; in global mode row 0 can only
        // extend left and column 0 can only extend up.
        let dir = match moves.get(row, col) {
            TracebackDir::Stop if row == 0 => TracebackDir::Left,
            TracebackDir::Stop if col == 0 => TracebackDir::Up,
            dir => dir,
        };

        match dir {
            TracebackDir::Diag => {
                steps.push(PathStep { row, col, dir });
                row -= 1;
                col -= 1;
            }
            TracebackDir::Up => {
                steps.push(PathStep { row, col, dir });
                row -= 1;
            }
            TracebackDir::Left => {
                steps.push(PathStep { row, col, dir });
                col -= 1;
            }
            TracebackDir::Stop => {
                break;
            }
        }
    }

    steps
}

/// Rebuild the aligned pair from the walk, inserting gap markers
pub fn reconstruct(query: &[u8], subject: &[u8], steps: &[PathStep]) -> (Vec<u8>, Vec<u8>) {
    let mut aligned_query = Vec::with_capacity(steps.len());
    let mut aligned_subject = Vec::with_capacity(steps.len());

    for step in steps {
        match step.dir {
            TracebackDir::Diag => {
                aligned_query.push(query[step.row - 1]);
                aligned_subject.push(subject[step.col - 1]);
            }
            TracebackDir::Up => {
                aligned_query.push(query[step.row - 1]);
                aligned_subject.push(GAP_CHAR);
            }
            TracebackDir::Left => {
                aligned_query.push(GAP_CHAR);
                aligned_subject.push(subject[step.col - 1]);
            }
            TracebackDir::Stop => {}
        }
    }

    // The walk runs end-to-start; reverse to get forward order
    aligned_query.reverse();
    aligned_subject.reverse();

    (aligned_query, aligned_subject)
}

/// Flag every cell the walk visited
pub fn mark_path(rows: usize, cols: usize, steps: &[PathStep]) -> PathGrid {
    let mut grid = PathGrid::new(rows, cols);
    for step in steps {
        grid.mark(step.row, step.col);
    }
    grid
}
