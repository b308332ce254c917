pub mod align;
pub mod input;
pub mod report;
pub mod run;
