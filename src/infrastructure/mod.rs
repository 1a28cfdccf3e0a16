// Infrastructure layer - Document and config loading
pub mod config;
pub mod dashboard_loader;
