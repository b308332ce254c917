use super::scoring::{AlignMode, ScoringScheme};

/// Direction recorded per DP cell for traceback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackDir {
    /// Diagonal (match/mismatch)
    Diag,
    /// Up (gap in subject)
    Up,
    /// Left (gap in query)
    Left,
    /// No move recorded (boundary cell, or local cell clamped to zero)
    Stop,
}

/// Score table for the DP recurrence, (query_len + 1) x (subject_len + 1)
///
/// Row and column 0 represent the empty-prefix state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Allocate a zero-filled table and seed the boundaries for `mode`.
    ///
    /// Global mode stacks cumulative gap penalties along row 0 and column 0;
    /// local mode leaves every boundary cell at zero.
    pub fn init(rows: usize, cols: usize, scheme: &ScoringScheme, mode: AlignMode) -> Self {
        let mut matrix = Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        };
        if mode == AlignMode::Global {
            for i in 1..rows {
                matrix.set(i, 0, matrix.get(i - 1, 0) + scheme.gap);
            }
            for j in 1..cols {
                matrix.set(0, j, matrix.get(0, j - 1) + scheme.gap);
            }
        }
        matrix
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// Per-cell move records, same shape as the score table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracebackMatrix {
    data: Vec<TracebackDir>,
    rows: usize,
    cols: usize,
}

impl TracebackMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![TracebackDir::Stop; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> TracebackDir {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, dir: TracebackDir) {
        self.data[row * self.cols + col] = dir;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}
