//! Acquisition of the raw `ovs-appctl` reports.
//!
//! A report that cannot be acquired is logged and replaced by empty text,
//! which the extraction engine turns into absent fields.

use crate::catalog::Report;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use std::time::Instant;

mod error;

pub use error::SourceError;

/// Captured text of both reports for one scrape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reports {
    pub pmd_stats: String,
    pub coverage: String,
}

impl Reports {
    pub fn get(&self, report: Report) -> &str {
        match report {
            Report::PmdStats => &self.pmd_stats,
            Report::Coverage => &self.coverage,
        }
    }
}

#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self) -> Reports;
}

/// Runs one external command per report.
pub struct CommandSource {
    pmd_stats: Vec<String>,
    coverage: Vec<String>,
}

impl CommandSource {
    pub fn new(pmd_stats: Vec<String>, coverage: Vec<String>) -> Self {
        Self {
            pmd_stats,
            coverage,
        }
    }

    async fn report(&self, report: Report) -> String {
        let argv = match report {
            Report::PmdStats => &self.pmd_stats,
            Report::Coverage => &self.coverage,
        };

        let start = Instant::now();

        match run(argv).await {
            Ok(output) => {
                debug!(
                    "{} report: {} bytes in {} us",
                    report.as_str(),
                    output.len(),
                    start.elapsed().as_micros()
                );
                output
            }
            Err(e) => {
                warn!("failed to acquire {} report: {e}", report.as_str());
                String::new()
            }
        }
    }
}

#[async_trait]
impl ReportSource for CommandSource {
    async fn fetch(&self) -> Reports {
        // sequential, the two commands talk to the same control socket
        let pmd_stats = self.report(Report::PmdStats).await;
        let coverage = self.report(Report::Coverage).await;

        Reports {
            pmd_stats,
            coverage,
        }
    }
}

/// Runs `argv` and returns its combined stdout and stderr.
pub async fn run(argv: &[String]) -> Result<String, SourceError> {
    let (program, args) = argv.split_first().ok_or(SourceError::EmptyCommand)?;

    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| SourceError::Spawn {
            program: program.clone(),
            source,
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(SourceError::Status {
            program: program.clone(),
            status: output.status,
            output: text.trim().to_string(),
        });
    }

    Ok(text)
}

/// Serves fixed report text.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    reports: Reports,
}

impl StaticSource {
    pub fn new(pmd_stats: impl Into<String>, coverage: impl Into<String>) -> Self {
        Self {
            reports: Reports {
                pmd_stats: pmd_stats.into(),
                coverage: coverage.into(),
            },
        }
    }
}

#[async_trait]
impl ReportSource for StaticSource {
    async fn fetch(&self) -> Reports {
        self.reports.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn captures_stdout() {
        let output = run(&argv(&["sh", "-c", "echo 'miss with success upcall: 3'"]))
            .await
            .unwrap();

        assert_eq!(output, "miss with success upcall: 3\n");
    }

    #[tokio::test]
    async fn captures_stderr() {
        let output = run(&argv(&["sh", "-c", "echo out; echo err >&2"]))
            .await
            .unwrap();

        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[tokio::test]
    async fn empty_command() {
        assert!(matches!(run(&[]).await, Err(SourceError::EmptyCommand)));
    }

    #[tokio::test]
    async fn missing_program() {
        let result = run(&argv(&["/nonexistent/ovs-appctl", "coverage/show"])).await;
        assert!(matches!(result, Err(SourceError::Spawn { .. })));
    }

    #[tokio::test]
    async fn failed_command() {
        let result = run(&argv(&["sh", "-c", "echo 'not running' >&2; exit 2"])).await;

        match result {
            Err(SourceError::Status { output, .. }) => assert_eq!(output, "not running"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_yields_empty_report() {
        let source = CommandSource::new(
            argv(&["sh", "-c", "echo 'idle cycles: 10 (99.00%)'"]),
            argv(&["sh", "-c", "exit 1"]),
        );

        let reports = source.fetch().await;

        assert_eq!(reports.get(Report::PmdStats), "idle cycles: 10 (99.00%)\n");
        assert_eq!(reports.get(Report::Coverage), "");
    }

    #[tokio::test]
    async fn static_source() {
        let source = StaticSource::new("a", "b");
        let reports = source.fetch().await;

        assert_eq!(reports.pmd_stats, "a");
        assert_eq!(reports.coverage, "b");
    }
}
