// Rule contract shared by every dashboard check
use crate::domain::dashboard::Dashboard;
use crate::domain::lint_result::LintResult;

pub trait Rule: Send + Sync {
    /// Stable identifier, used in reports and config exclusions
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Evaluate the dashboard. Must not depend on anything but the input.
    fn evaluate(&self, dashboard: &Dashboard) -> LintResult;
}

/// Strip one `${name}` or `$name` wrapping from a variable reference.
pub fn strip_variable(reference: &str) -> &str {
    if let Some(inner) = reference
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return inner;
    }
    reference.strip_prefix('$').unwrap_or(reference)
}
