/// Default match reward
pub const DEFAULT_MATCH: i32 = 1;
/// Default mismatch penalty
pub const DEFAULT_MISMATCH: i32 = -1;
/// Default gap penalty
pub const DEFAULT_GAP: i32 = -2;

/// Gap marker inserted in aligned output
pub const GAP_CHAR: u8 = b'-';

/// Alignment mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// End-to-end alignment (Needleman-Wunsch)
    Global,
    /// Best-scoring subsequence pair (Smith-Waterman)
    Local,
}

/// Linear scoring scheme, fixed for one alignment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    /// Reward for identical residues
    pub match_score: i32,
    /// Penalty for differing residues
    pub mismatch: i32,
    /// Penalty for a gap opposite a real residue
    pub gap: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Substitution score for one residue pair
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.match_score, 1);
        assert_eq!(scheme.mismatch, -1);
        assert_eq!(scheme.gap, -2);
    }

    #[test]
    fn test_substitution() {
        let scheme = ScoringScheme::new(2, -3, -5);
        assert_eq!(scheme.substitution(b'A', b'A'), 2);
        assert_eq!(scheme.substitution(b'A', b'G'), -3);
    }
}
