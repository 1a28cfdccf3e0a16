// Dashboard document loading
use crate::domain::dashboard::Dashboard;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read dashboard {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode dashboard: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_dashboard(document: &str) -> Result<Dashboard, LoadError> {
    serde_json::from_str(document).map_err(|source| LoadError::Decode { source })
}

pub fn load_dashboard(path: &Path) -> Result<Dashboard, LoadError> {
    let document = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dashboard = parse_dashboard(&document)?;
    tracing::debug!(
        path = %path.display(),
        title = %dashboard.title,
        templates = dashboard.templating.list.len(),
        "Loaded dashboard"
    );
    Ok(dashboard)
}
