// Application layer - Rules and rule orchestration
pub mod rule;
pub mod rule_set;
pub mod template_job_rule;
