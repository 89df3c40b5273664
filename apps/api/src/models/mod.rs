pub mod candidate;
pub mod catalog;
pub mod report;
