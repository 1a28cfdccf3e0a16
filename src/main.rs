// Main entry point - Wiring of config, loader, rules and report
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use dashboard_lint::application::rule_set::RuleSet;
use dashboard_lint::infrastructure::config::{load_lint_config, LintConfig, DEFAULT_CONFIG_FILE};
use dashboard_lint::infrastructure::dashboard_loader::load_dashboard;
use dashboard_lint::presentation::cli::Cli;
use dashboard_lint::presentation::report::{
    exit_code, render_json, render_rules, render_text, EXIT_FAULT, EXIT_OK,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_FAULT)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let rules = RuleSet::standard();
    if cli.list_rules {
        print!("{}", render_rules(&rules));
        return Ok(EXIT_OK);
    }

    let config = load_config(cli)?;

    let dashboards = cli
        .files
        .iter()
        .map(|path| {
            load_dashboard(path).with_context(|| format!("Failed to lint {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::info!(
        dashboards = dashboards.len(),
        exclusions = config.exclusions.len(),
        "Linting dashboards"
    );

    let results = rules.lint(&dashboards, &config);

    if cli.json {
        println!("{}", render_json(&results).context("Failed to render results")?);
    } else {
        print!("{}", render_text(&results, cli.verbose));
    }

    Ok(exit_code(&results, cli.strict))
}

fn load_config(cli: &Cli) -> anyhow::Result<LintConfig> {
    let config = match &cli.config {
        Some(path) => load_lint_config(path, true)?,
        None => load_lint_config(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    Ok(config)
}

/// Initialize tracing; `RUST_LOG` overrides the flag-derived level
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
