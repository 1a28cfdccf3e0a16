use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".dashboard-lint.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load lint config {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: config::ConfigError,
    },
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LintConfig {
    #[serde(default)]
    pub exclusions: HashMap<String, RuleExclusion>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RuleExclusion {
    #[serde(default)]
    pub reason: String,
    /// Dashboard titles the exclusion applies to; empty means all dashboards
    #[serde(default)]
    pub dashboards: Vec<String>,
}

impl LintConfig {
    pub fn is_excluded(&self, rule: &str, dashboard_title: &str) -> bool {
        match self.exclusions.get(rule) {
            Some(exclusion) => {
                exclusion.dashboards.is_empty()
                    || exclusion.dashboards.iter().any(|d| d == dashboard_title)
            }
            None => false,
        }
    }
}

/// Load lint configuration; the format follows the file extension.
/// A missing file is only an error when `required` is set.
pub fn load_lint_config(path: &Path, required: bool) -> Result<LintConfig, ConfigError> {
    let wrap = |source: config::ConfigError| ConfigError::Load {
        path: path.display().to_string(),
        source,
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .build()
        .map_err(wrap)?;

    let lint_config: LintConfig = settings.try_deserialize().map_err(wrap)?;
    tracing::debug!(
        path = %path.display(),
        exclusions = lint_config.exclusions.len(),
        "Loaded lint config"
    );
    Ok(lint_config)
}
