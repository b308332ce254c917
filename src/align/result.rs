use super::matrix::ScoreMatrix;
use super::scoring::GAP_CHAR;
use super::traceback::PathGrid;

/// Result of one pairwise alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    /// Optimal score (final cell for global, best tracked cell for local)
    pub score: i32,
    /// Table coordinates the traceback started from
    pub end_pos: (usize, usize),
    /// Query with gap markers inserted
    pub aligned_query: Vec<u8>,
    /// Subject with gap markers inserted
    pub aligned_subject: Vec<u8>,
    /// Fully populated score table, kept for inspection and display
    pub scores: ScoreMatrix,
    /// Cells visited by the traceback walk
    pub path: PathGrid,
    /// Number of identical aligned positions
    pub matches: usize,
    /// Number of differing aligned positions
    pub mismatches: usize,
    /// Number of gap positions (either side)
    pub gaps: usize,
}

impl AlignmentResult {
    pub fn new(
        score: i32,
        end_pos: (usize, usize),
        aligned_query: Vec<u8>,
        aligned_subject: Vec<u8>,
        scores: ScoreMatrix,
        path: PathGrid,
    ) -> Self {
        let (matches, mismatches, gaps) = pair_stats(&aligned_query, &aligned_subject);
        Self {
            score,
            end_pos,
            aligned_query,
            aligned_subject,
            scores,
            path,
            matches,
            mismatches,
            gaps,
        }
    }

    /// Total alignment length (columns including gaps)
    pub fn alignment_len(&self) -> usize {
        self.aligned_query.len()
    }

    /// Percent identity over the alignment length
    pub fn identity(&self) -> f64 {
        if self.alignment_len() == 0 {
            return 0.0;
        }
        100.0 * (self.matches as f64) / (self.alignment_len() as f64)
    }
}

/// Count matches, mismatches and gap positions in an aligned pair
fn pair_stats(aligned_query: &[u8], aligned_subject: &[u8]) -> (usize, usize, usize) {
    let mut matches = 0;
    let mut mismatches = 0;
    let mut gaps = 0;

    for (&q, &s) in aligned_query.iter().zip(aligned_subject.iter()) {
        if q == GAP_CHAR || s == GAP_CHAR {
            gaps += 1;
        } else if q == s {
            matches += 1;
        } else {
            mismatches += 1;
        }
    }

    (matches, mismatches, gaps)
}
