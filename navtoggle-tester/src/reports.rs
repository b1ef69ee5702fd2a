use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub passed: bool,
    pub duration_ms: u128,
    pub error: Option<String>,
}

impl ScenarioResult {
    pub fn from_outcome(key: &str, elapsed: Duration, outcome: Result<()>) -> Self {
        Self {
            scenario: key.to_string(),
            passed: outcome.is_ok(),
            duration_ms: elapsed.as_millis(),
            error: outcome.err().map(|e| format!("{e:#}")),
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    duration_ms: u128,
    results: &'a [ScenarioResult],
}

pub fn print_line(result: &ScenarioResult) {
    if result.passed {
        println!("  {} {}", "PASS".green().bold(), result.scenario);
    } else {
        println!(
            "  {} {}: {}",
            "FAIL".red().bold(),
            result.scenario,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
}

pub fn write_report(format: ReportFormat, results: &[ScenarioResult], elapsed: Duration) -> Result<()> {
    let passed = results.iter().filter(|r| r.passed).count();
    let summary = Summary {
        total: results.len(),
        passed,
        failed: results.len() - passed,
        duration_ms: elapsed.as_millis(),
        results,
    };
    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        ReportFormat::Console => {
            let line = format!(
                "{}/{} scenarios passed in {}ms",
                summary.passed, summary.total, summary.duration_ms
            );
            if summary.failed == 0 {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_keeps_error_text() {
        let result = ScenarioResult::from_outcome(
            "involution",
            Duration::from_millis(3),
            Err(anyhow::anyhow!("closed -> closed after one click")),
        );
        assert!(!result.passed);
        assert_eq!(result.duration_ms, 3);
        assert_eq!(
            result.error.as_deref(),
            Some("closed -> closed after one click")
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scenario"], "involution");
    }
}
