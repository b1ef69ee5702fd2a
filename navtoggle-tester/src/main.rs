mod reports;
mod scenarios;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

use navtoggle_core::{MenuState, NavToggleConfig};
use reports::{ReportFormat, ScenarioResult, write_report};
use scenarios::{ScenarioCtx, all_keys, get_scenario, list_scenarios};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InitialState {
    /// Markup starts with the menu open
    Open,
    /// Markup starts with the menu closed
    Closed,
}

impl From<InitialState> for MenuState {
    fn from(value: InitialState) -> Self {
        match value {
            InitialState::Open => Self::Open,
            InitialState::Closed => Self::Closed,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "navtoggle-tester", version)]
#[command(about = "Run navigation toggle scenarios against an in-memory document")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of menu links in the generated page
    #[arg(long, default_value_t = 3)]
    links: usize,

    /// Number of clicks for multi-click scenarios
    #[arg(long, default_value_t = 5)]
    clicks: usize,

    /// State the generated page starts in
    #[arg(long, value_enum, default_value_t = InitialState::Closed)]
    initial: InitialState,

    /// JSON file overriding ids and class names
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        println!("Available scenarios:");
        for (key, description) in list_scenarios() {
            println!("  {key:15} - {description}");
        }
        return Ok(());
    }

    let ctx = ScenarioCtx {
        config: load_config(args.config.as_ref())?,
        initial: args.initial.into(),
        links: args.links,
        clicks: args.clicks,
        verbose: args.verbose,
    };

    if matches!(args.report, ReportFormat::Console) {
        println!("{}", "Navigation Toggle Tester".bright_cyan().bold());
        println!("{}", "========================".cyan());
    }

    let start_time = Instant::now();
    let mut results = Vec::new();
    for key in expand_scenarios(&args.scenarios) {
        let Some(scenario) = get_scenario(&key) else {
            bail!("Unknown scenario: {key} (use --list-scenarios)");
        };
        log::debug!("running scenario {key}");
        let started = Instant::now();
        let outcome = scenario.run(&ctx);
        let result = ScenarioResult::from_outcome(scenario.key, started.elapsed(), outcome);
        if matches!(args.report, ReportFormat::Console) {
            reports::print_line(&result);
        }
        results.push(result);
    }

    write_report(args.report, &results, start_time.elapsed())?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<NavToggleConfig> {
    let Some(path) = path else {
        return Ok(NavToggleConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    NavToggleConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))
}

fn expand_scenarios(arg: &str) -> Vec<String> {
    let mut keys: Vec<String> = arg
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();
    if keys.iter().any(|k| k == "all") {
        keys = all_keys();
    }
    keys
}
