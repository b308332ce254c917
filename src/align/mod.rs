pub mod engine;
pub mod matrix;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use engine::{align, AlignError};
pub use matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};
pub use result::AlignmentResult;
pub use scoring::{AlignMode, ScoringScheme, GAP_CHAR};
pub use traceback::PathGrid;
