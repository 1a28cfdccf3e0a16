// Template job rule - Dashboards must expose job and instance filters
use crate::application::rule::{strip_variable, Rule};
use crate::domain::dashboard::{Dashboard, QUERY_TYPE};
use crate::domain::lint_result::LintResult;

const JOB_TEMPLATE: &str = "job";
const INSTANCE_TEMPLATE: &str = "instance";

#[derive(Debug, Clone, Default)]
pub struct TemplateJobRule;

impl TemplateJobRule {
    pub fn new() -> Self {
        Self
    }

    /// Selector variable names a job template may reference.
    /// A single datasource is named `datasource`, several are `<kind>_datasource`.
    fn expected_datasources(kinds: &[&str]) -> Vec<String> {
        if kinds.len() == 1 {
            return vec!["datasource".to_string()];
        }
        kinds.iter().map(|kind| format!("{}_datasource", kind)).collect()
    }

    fn fail(&self, dashboard: &Dashboard, detail: String) -> LintResult {
        tracing::debug!(
            rule = self.name(),
            dashboard = %dashboard.title,
            "{}",
            detail
        );
        LintResult::error(format!("Dashboard '{}' {}", dashboard.title, detail))
    }
}

impl Rule for TemplateJobRule {
    fn name(&self) -> &'static str {
        "template-job-rule"
    }

    fn description(&self) -> &'static str {
        "Checks that the dashboard has a templated job and instance."
    }

    fn evaluate(&self, dashboard: &Dashboard) -> LintResult {
        let kinds = dashboard.datasource_kinds();
        if kinds.is_empty() {
            return LintResult::ok();
        }
        let expected = Self::expected_datasources(&kinds);

        let Some(job) = dashboard.template(JOB_TEMPLATE) else {
            return self.fail(dashboard, "is missing the job template".to_string());
        };

        let actual = strip_variable(&job.datasource);
        if !expected.iter().any(|name| name == actual) {
            let names = expected
                .iter()
                .map(|name| format!("${}", name))
                .collect::<Vec<_>>()
                .join(" or ");
            return self.fail(
                dashboard,
                format!(
                    "job template should use datasource {}, is currently '{}'",
                    names, actual
                ),
            );
        }

        if job.kind != QUERY_TYPE {
            return self.fail(
                dashboard,
                format!(
                    "job template should be a Prometheus query, is currently '{}'",
                    job.kind
                ),
            );
        }

        if job.label != JOB_TEMPLATE {
            return self.fail(
                dashboard,
                format!(
                    "job template should be a labelled 'job', is currently '{}'",
                    job.label
                ),
            );
        }

        // Only presence is checked for instance.
        if dashboard.template(INSTANCE_TEMPLATE).is_none() {
            return self.fail(dashboard, "is missing the instance template".to_string());
        }

        LintResult::ok()
    }
}
