// Command line arguments
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dashboard-lint")]
#[command(about = "Checks dashboard templating conventions", long_about = None)]
pub struct Cli {
    /// Dashboard JSON documents to lint
    #[arg(required_unless_present = "list_rules")]
    pub files: Vec<PathBuf>,

    /// Lint config file (defaults to .dashboard-lint.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Report every result, including passing ones, and log at info level
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Enable debug-level logging to stderr
    #[arg(long)]
    pub debug: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the available rules and exit
    #[arg(long)]
    pub list_rules: bool,
}
