// Rule set - Applies an ordered list of rules to dashboards
use crate::application::rule::Rule;
use crate::application::template_job_rule::TemplateJobRule;
use crate::domain::dashboard::Dashboard;
use crate::domain::lint_result::{ResultSet, RuleOutcome, Severity};
use crate::infrastructure::config::LintConfig;

#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in rules, in evaluation order
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.add(TemplateJobRule::new());
        set
    }

    pub fn add(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| &**r as &dyn Rule)
    }

    pub fn lint(&self, dashboards: &[Dashboard], config: &LintConfig) -> ResultSet {
        let mut results = ResultSet::new();

        for dashboard in dashboards {
            for rule in &self.rules {
                let mut result = rule.evaluate(dashboard);

                if !result.is_success() && config.is_excluded(rule.name(), &dashboard.title) {
                    tracing::info!(
                        rule = rule.name(),
                        dashboard = %dashboard.title,
                        "Finding excluded by config"
                    );
                    result.severity = Severity::Exclude;
                }

                results.push(RuleOutcome {
                    rule: rule.name().to_string(),
                    dashboard: dashboard.title.clone(),
                    result,
                });
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Template;
    use crate::domain::lint_result::LintResult;
    use crate::infrastructure::config::RuleExclusion;

    struct TitleRule;

    impl Rule for TitleRule {
        fn name(&self) -> &'static str {
            "title-rule"
        }

        fn description(&self) -> &'static str {
            "Warns about untitled dashboards."
        }

        fn evaluate(&self, dashboard: &Dashboard) -> LintResult {
            if dashboard.title.is_empty() {
                LintResult::warning("Dashboard has no title")
            } else {
                LintResult::ok()
            }
        }
    }

    fn missing_job(title: &str) -> Dashboard {
        Dashboard::new(title, vec![Template::datasource_selector("prometheus")])
    }

    #[test]
    fn test_standard_rules() {
        let names: Vec<&str> = RuleSet::standard().rules().map(|r| r.name()).collect();
        assert_eq!(names, vec!["template-job-rule"]);
    }

    #[test]
    fn test_every_rule_applied_to_every_dashboard() {
        let mut set = RuleSet::standard();
        set.add(TitleRule);

        let dashboards = vec![missing_job("a"), Dashboard::new("", vec![])];
        let results = set.lint(&dashboards, &LintConfig::default());

        let seen: Vec<(&str, &str, Severity)> = results
            .outcomes
            .iter()
            .map(|o| (o.rule.as_str(), o.dashboard.as_str(), o.result.severity))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("template-job-rule", "a", Severity::Error),
                ("title-rule", "a", Severity::Success),
                ("template-job-rule", "", Severity::Success),
                ("title-rule", "", Severity::Warning),
            ]
        );
        assert_eq!(results.maximum_severity(), Severity::Error);
    }

    #[test]
    fn test_exclusion_downgrades_finding() {
        let mut config = LintConfig::default();
        config.exclusions.insert(
            "template-job-rule".to_string(),
            RuleExclusion {
                reason: "legacy".to_string(),
                dashboards: vec!["legacy".to_string()],
            },
        );

        let dashboards = vec![missing_job("legacy"), missing_job("current")];
        let results = RuleSet::standard().lint(&dashboards, &config);

        assert_eq!(results.outcomes[0].result.severity, Severity::Exclude);
        assert_eq!(
            results.outcomes[0].result.message,
            "Dashboard 'legacy' is missing the job template"
        );
        assert_eq!(results.outcomes[1].result.severity, Severity::Error);
    }

    #[test]
    fn test_exclusion_leaves_success_alone() {
        let mut config = LintConfig::default();
        config
            .exclusions
            .insert("template-job-rule".to_string(), RuleExclusion::default());

        let results = RuleSet::standard().lint(&[Dashboard::new("plain", vec![])], &config);
        assert_eq!(results.outcomes[0].result.severity, Severity::Success);
    }

    #[test]
    fn test_empty_rule_set() {
        let results = RuleSet::new().lint(&[missing_job("a")], &LintConfig::default());
        assert!(results.outcomes.is_empty());
        assert_eq!(results.maximum_severity(), Severity::Success);
    }
}
