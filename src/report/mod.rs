pub mod pairwise;
pub mod table;
