//! End-to-end tests for the alignment engine

use palign::align::{align, AlignMode, ScoringScheme, GAP_CHAR};

fn degap(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(|&c| c != GAP_CHAR).collect()
}

fn is_contiguous_substring(needle: &[u8], haystack: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_global_identical_short_sequences() {
    let scheme = ScoringScheme::default();
    let result = align(b"AC", b"AC", AlignMode::Global, &scheme).unwrap();

    assert_eq!(result.score, 2);
    assert_eq!(result.aligned_query, b"AC");
    assert_eq!(result.aligned_subject, b"AC");
    assert_eq!(result.end_pos, (2, 2));
}

#[test]
fn test_local_single_match() {
    let scheme = ScoringScheme::default();
    let result = align(b"A", b"A", AlignMode::Local, &scheme).unwrap();

    assert_eq!(result.score, 1);
    assert_eq!(result.aligned_query, b"A");
    assert_eq!(result.aligned_subject, b"A");
    assert_eq!(result.end_pos, (1, 1));
}

#[test]
fn test_global_mismatch_scored_by_recurrence() {
    // diag = 0 + mismatch = -1; both gap routes reach -4. The recurrence
    // keeps the mismatch, so the table's final cell is -1.
    let scheme = ScoringScheme::default();
    let result = align(b"A", b"G", AlignMode::Global, &scheme).unwrap();

    assert_eq!(result.score, -1);
    assert_eq!(result.scores.get(1, 1), -1);
    assert_eq!(result.aligned_query, b"A");
    assert_eq!(result.aligned_subject, b"G");
}

#[test]
fn test_determinism() {
    let scheme = ScoringScheme::default();
    let first = align(b"GATTACA", b"GCATGCU", AlignMode::Global, &scheme).unwrap();
    let second = align(b"GATTACA", b"GCATGCU", AlignMode::Global, &scheme).unwrap();
    assert_eq!(first, second);

    let first = align(b"GATTACA", b"GCATGCU", AlignMode::Local, &scheme).unwrap();
    let second = align(b"GATTACA", b"GCATGCU", AlignMode::Local, &scheme).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_global_round_trip() {
    let scheme = ScoringScheme::default();
    let result = align(b"GATTACA", b"GCATGCU", AlignMode::Global, &scheme).unwrap();

    assert_eq!(result.aligned_query.len(), result.aligned_subject.len());
    assert_eq!(degap(&result.aligned_query), b"GATTACA");
    assert_eq!(degap(&result.aligned_subject), b"GCATGCU");
}

#[test]
fn test_local_round_trip_is_contiguous_substring() {
    let scheme = ScoringScheme::default();
    let result = align(b"TTACGTT", b"GACGA", AlignMode::Local, &scheme).unwrap();

    assert_eq!(result.aligned_query.len(), result.aligned_subject.len());
    assert!(is_contiguous_substring(&degap(&result.aligned_query), b"TTACGTT"));
    assert!(is_contiguous_substring(&degap(&result.aligned_subject), b"GACGA"));
}

#[test]
fn test_local_table_never_negative() {
    let scheme = ScoringScheme::default();
    let result = align(b"AGCTAGC", b"TTTTTTT", AlignMode::Local, &scheme).unwrap();

    for i in 0..result.scores.rows() {
        for j in 0..result.scores.cols() {
            assert!(result.scores.get(i, j) >= 0);
        }
    }
}

#[test]
fn test_global_table_can_go_negative() {
    let scheme = ScoringScheme::default();
    let result = align(b"AAAA", b"TTTT", AlignMode::Global, &scheme).unwrap();
    assert!(result.score < 0);
}

#[test]
fn test_three_way_tie_resolved_diagonal() {
    // With match = -4 and gap = -2 the single interior cell sees
    // diag = up = left = -4; the diagonal move must win the tie.
    let scheme = ScoringScheme::new(-4, -4, -2);
    let result = align(b"A", b"A", AlignMode::Global, &scheme).unwrap();

    assert_eq!(result.score, -4);
    assert_eq!(result.aligned_query, b"A");
    assert_eq!(result.aligned_subject, b"A");
    assert!(result.path.marked(1, 1));
    assert!(!result.path.marked(0, 1));
    assert!(!result.path.marked(1, 0));
}

#[test]
fn test_global_traceback_through_boundary_row() {
    // "A" vs "AA": the diagonal/left tie at (1,2) goes diagonal, landing
    // the walk on untagged boundary cell (0,1); it must continue left and
    // terminate at the origin.
    let scheme = ScoringScheme::default();
    let result = align(b"A", b"AA", AlignMode::Global, &scheme).unwrap();

    assert_eq!(result.score, -1);
    assert_eq!(result.aligned_query, b"-A");
    assert_eq!(result.aligned_subject, b"AA");
    assert!(result.path.marked(1, 2));
    assert!(result.path.marked(0, 1));
}

#[test]
fn test_local_best_position_is_last_maximum() {
    // "AGA" vs "A" holds the maximum score 1 at both (1,1) and (3,1); the
    // non-strict update under the row-major scan records the later cell.
    let scheme = ScoringScheme::default();
    let result = align(b"AGA", b"A", AlignMode::Local, &scheme).unwrap();

    assert_eq!(result.score, 1);
    assert_eq!(result.end_pos, (3, 1));
}

#[test]
fn test_local_no_positive_cell_yields_empty_alignment() {
    let scheme = ScoringScheme::default();
    let result = align(b"A", b"G", AlignMode::Local, &scheme).unwrap();

    assert_eq!(result.score, 0);
    assert!(result.aligned_query.is_empty());
    assert!(result.aligned_subject.is_empty());
}

#[test]
fn test_custom_scheme_changes_outcome() {
    // With a cheap gap (-1) and costly mismatch (-3), aligning "A" against
    // "G" prefers two gaps over the mismatch.
    let scheme = ScoringScheme::new(1, -3, -1);
    let result = align(b"A", b"G", AlignMode::Global, &scheme).unwrap();

    assert_eq!(result.score, -2);
    assert_eq!(result.gaps, 2);
}

#[test]
fn test_path_grid_matches_alignment_length() {
    let scheme = ScoringScheme::default();
    let result = align(b"GATTACA", b"GCATGCU", AlignMode::Global, &scheme).unwrap();

    let marked = (0..result.path.rows())
        .flat_map(|i| (0..result.path.cols()).map(move |j| (i, j)))
        .filter(|&(i, j)| result.path.marked(i, j))
        .count();
    assert_eq!(marked, result.alignment_len());
}
