pub mod cli;
pub mod report;
pub mod severity_counts;
