pub mod recent;
pub mod report;
