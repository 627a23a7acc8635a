use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::dispatch::read_package;
use crate::error::{Result, WorkoutError};
use crate::message::InfoMessage;
use crate::package::WorkoutPackage;
use crate::training::WorkoutSummary;

/// How each processed package is written out.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One info message line per workout
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Result of processing a single package.
#[derive(Debug)]
pub enum Outcome {
    Completed(WorkoutSummary),
    Unknown(String),
    Failed(WorkoutError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub completed: usize,
    pub unknown: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.completed + self.unknown + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Completed(_) => self.completed += 1,
            Outcome::Unknown(_) => self.unknown += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Dispatches a package and computes its summary.
pub fn compute(package: &WorkoutPackage) -> Result<WorkoutSummary> {
    read_package(&package.code, &package.values)?.summary()
}

/// Processes packages one at a time, writing a line for each to `out`.
///
/// A failing package never stops the ones after it.
pub struct Runner<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Runner<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn process(&mut self, package: &WorkoutPackage) -> Result<Outcome> {
        let outcome = match compute(package) {
            Ok(summary) => {
                self.write_summary(&summary)?;
                Outcome::Completed(summary)
            }
            Err(WorkoutError::UnknownActivity { code }) => {
                warn!(%package, "unknown workout type");
                self.write_unknown(&code)?;
                Outcome::Unknown(code)
            }
            Err(err) => {
                error!(%package, error = %err, "workout failed");
                Outcome::Failed(err)
            }
        };
        Ok(outcome)
    }

    pub fn run<'a, I>(&mut self, packages: I) -> Result<RunReport>
    where
        I: IntoIterator<Item = &'a WorkoutPackage>,
    {
        let mut report = RunReport::default();
        for package in packages {
            let outcome = self.process(package)?;
            report.record(&outcome);
        }
        self.out.flush()?;
        info!(
            completed = report.completed,
            unknown = report.unknown,
            failed = report.failed,
            "run finished"
        );
        Ok(report)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_summary(&mut self, summary: &WorkoutSummary) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", InfoMessage::from(*summary))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, summary)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn write_unknown(&mut self, code: &str) -> Result<()> {
        let notice = WorkoutError::UnknownActivity {
            code: code.to_string(),
        }
        .to_string();
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{notice}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &json!({ "notice": notice, "code": code }))?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}
