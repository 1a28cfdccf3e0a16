// Lint outcome domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    /// A finding suppressed by lint configuration.
    Exclude,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Exclude => "exclude",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    pub severity: Severity,
    pub message: String,
}

impl LintResult {
    pub fn ok() -> Self {
        Self {
            severity: Severity::Success,
            message: "OK".to_string(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

/// One rule applied to one dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub dashboard: String,
    #[serde(flatten)]
    pub result: LintResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub outcomes: Vec<RuleOutcome>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: RuleOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn maximum_severity(&self) -> Severity {
        self.outcomes
            .iter()
            .map(|o| o.result.severity)
            .max()
            .unwrap_or(Severity::Success)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result.severity == severity)
            .count()
    }

    /// Outcomes grouped by rule name, groups in the order rules first appear.
    pub fn by_rule(&self) -> Vec<(&str, Vec<&RuleOutcome>)> {
        let mut groups: Vec<(&str, Vec<&RuleOutcome>)> = Vec::new();
        for outcome in &self.outcomes {
            match groups.iter_mut().find(|(rule, _)| *rule == outcome.rule) {
                Some((_, group)) => group.push(outcome),
                None => groups.push((outcome.rule.as_str(), vec![outcome])),
            }
        }
        groups
    }
}
