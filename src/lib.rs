//! Static checks for dashboard templating conventions.
//!
//! Dashboards are decoded by [`infrastructure::dashboard_loader`], evaluated by
//! the rules of an [`application::rule_set::RuleSet`], and the collected
//! [`domain::lint_result::ResultSet`] is rendered by [`presentation::report`].
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
