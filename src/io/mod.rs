pub mod import;
pub mod reporting;
pub mod sample;
