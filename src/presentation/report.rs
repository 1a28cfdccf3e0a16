// Report rendering and exit status
use crate::application::rule_set::RuleSet;
use crate::domain::lint_result::{ResultSet, Severity};
use std::fmt::Write;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FINDINGS: u8 = 1;
pub const EXIT_FAULT: u8 = 2;

pub fn render_text(results: &ResultSet, verbose: bool) -> String {
    let mut out = String::new();

    for (rule, outcomes) in results.by_rule() {
        for outcome in outcomes {
            if outcome.result.is_success() && !verbose {
                continue;
            }
            let _ = writeln!(
                out,
                "[{}] {}: {}",
                outcome.result.severity.as_str(),
                rule,
                outcome.result.message
            );
        }
    }

    let _ = writeln!(
        out,
        "{} error(s), {} warning(s), {} excluded",
        results.count(Severity::Error),
        results.count(Severity::Warning),
        results.count(Severity::Exclude)
    );
    out
}

pub fn render_json(results: &ResultSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

pub fn render_rules(rules: &RuleSet) -> String {
    let mut out = String::new();
    for rule in rules.rules() {
        let _ = writeln!(out, "{}: {}", rule.name(), rule.description());
    }
    out
}

pub fn exit_code(results: &ResultSet, strict: bool) -> u8 {
    match results.maximum_severity() {
        Severity::Error => EXIT_FINDINGS,
        Severity::Warning if strict => EXIT_FINDINGS,
        _ => EXIT_OK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lint_result::{LintResult, RuleOutcome};

    fn results(items: Vec<LintResult>) -> ResultSet {
        let mut set = ResultSet::new();
        for result in items {
            set.push(RuleOutcome {
                rule: "template-job-rule".to_string(),
                dashboard: "test".to_string(),
                result,
            });
        }
        set
    }

    #[test]
    fn test_render_hides_success_unless_verbose() {
        let set = results(vec![
            LintResult::ok(),
            LintResult::error("Dashboard 'test' is missing the job template"),
        ]);

        let quiet = render_text(&set, false);
        assert_eq!(
            quiet,
            "[error] template-job-rule: Dashboard 'test' is missing the job template\n\
             1 error(s), 0 warning(s), 0 excluded\n"
        );

        let verbose = render_text(&set, true);
        assert!(verbose.starts_with("[success] template-job-rule: OK\n"));
    }

    #[test]
    fn test_render_json() {
        let set = results(vec![LintResult::ok()]);
        let json: serde_json::Value = serde_json::from_str(&render_json(&set).unwrap()).unwrap();
        assert_eq!(json["outcomes"][0]["severity"], "success");
        assert_eq!(json["outcomes"][0]["message"], "OK");
    }

    #[test]
    fn test_render_rules() {
        assert_eq!(
            render_rules(&RuleSet::standard()),
            "template-job-rule: Checks that the dashboard has a templated job and instance.\n"
        );
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&results(vec![LintResult::ok()]), true), EXIT_OK);
        assert_eq!(exit_code(&results(vec![LintResult::error("x")]), false), EXIT_FINDINGS);

        let warned = results(vec![LintResult::warning("w")]);
        assert_eq!(exit_code(&warned, false), EXIT_OK);
        assert_eq!(exit_code(&warned, true), EXIT_FINDINGS);

        let mut excluded = results(vec![LintResult::error("x")]);
        excluded.outcomes[0].result.severity = Severity::Exclude;
        assert_eq!(exit_code(&excluded, true), EXIT_OK);
    }
}
