//! Score and backtrace computation
//!
//! Fills the DP table row-major, records the move that produced each cell,
//! and (local mode) tracks the best-scoring cell. Global and local modes run
//! the same recurrence; they differ only in boundary seeding, the clamp to
//! zero, and where traceback starts.

use thiserror::Error;

use super::matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};
use super::result::AlignmentResult;
use super::scoring::{AlignMode, ScoringScheme};
use super::traceback::{mark_path, reconstruct, walk};

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("empty input: {0} has zero length")]
    EmptyInput(&'static str),
}

/// Running best cell for local mode
struct BestCell {
    score: i32,
    pos: (usize, usize),
}

/// Align two non-empty sequences and reconstruct the optimal path.
///
/// One call is one independent computation: tables are allocated fresh,
/// filled in a single pass, walked once, and returned with the result.
pub fn align(
    query: &[u8],
    subject: &[u8],
    mode: AlignMode,
    scheme: &ScoringScheme,
) -> Result<AlignmentResult, AlignError> {
    if query.is_empty() {
        return Err(AlignError::EmptyInput("query"));
    }
    if subject.is_empty() {
        return Err(AlignError::EmptyInput("subject"));
    }

    let rows = query.len() + 1;
    let cols = subject.len() + 1;
    let mut scores = ScoreMatrix::init(rows, cols, scheme, mode);
    let mut moves = TracebackMatrix::new(rows, cols);

    let best = fill(&mut scores, &mut moves, query, subject, scheme, mode);

    let (score, end_pos) = match mode {
        AlignMode::Global => {
            let end = (query.len(), subject.len());
            (scores.get(end.0, end.1), end)
        }
        AlignMode::Local => (best.score, best.pos),
    };

    let steps = walk(&scores, &moves, mode, end_pos);
    let (aligned_query, aligned_subject) = reconstruct(query, subject, &steps);
    let path = mark_path(rows, cols, &steps);

    Ok(AlignmentResult::new(
        score,
        end_pos,
        aligned_query,
        aligned_subject,
        scores,
        path,
    ))
}

/// Fill the score table and move grid, returning the running best cell.
///
/// Row-major order is required: each cell depends on the three already-filled
/// neighbors, and the local best-cell update relies on scan order (see below).
fn fill(
    scores: &mut ScoreMatrix,
    moves: &mut TracebackMatrix,
    query: &[u8],
    subject: &[u8],
    scheme: &ScoringScheme,
    mode: AlignMode,
) -> BestCell {
    let mut best = BestCell {
        score: 0,
        pos: (0, 0),
    };

    for i in 1..=query.len() {
        for j in 1..=subject.len() {
            let diag = scores.get(i - 1, j - 1) + scheme.substitution(query[i - 1], subject[j - 1]);
            let up = scores.get(i - 1, j) + scheme.gap;
            let left = scores.get(i, j - 1) + scheme.gap;

            let mut cell = diag.max(up).max(left);
            if mode == AlignMode::Local {
                cell = cell.max(0);
            }
            scores.set(i, j, cell);

            // Tie-break priority: Diag, then Up, then Left. Stop only when
            // the local clamp beat all three candidates.
            let dir = if cell == diag {
                TracebackDir::Diag
            } else if cell == up {
                TracebackDir::Up
            } else if cell == left {
                TracebackDir::Left
            } else {
                TracebackDir::Stop
            };
            moves.set(i, j, dir);

            // Non-strict compare under a row-major scan: the recorded best
            // position is the last cell holding the maximum, not the first.
            if mode == AlignMode::Local && cell >= best.score {
                best.score = cell;
                best.pos = (i, j);
            }
        }
    }

    best
}
