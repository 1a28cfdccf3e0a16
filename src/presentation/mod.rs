// Presentation layer - Command line and report output
pub mod cli;
pub mod report;
