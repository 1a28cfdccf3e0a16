// Domain layer - Dashboard documents and lint outcomes
pub mod dashboard;
pub mod lint_result;
