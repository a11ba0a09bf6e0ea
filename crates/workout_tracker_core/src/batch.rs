//! Ordered batch processing of (tag, readings) packages.

use crate::reading::classify;
use crate::{WorkoutError, WorkoutReport};

/// One line of batch output: a rendered report for a classified entry, or
/// a diagnostic for an entry that was skipped.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLine {
    Report(WorkoutReport),
    Diagnostic(WorkoutError),
}

impl std::fmt::Display for OutputLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputLine::Report(report) => report.fmt(f),
            OutputLine::Diagnostic(err) => write!(f, "Skipped entry: {err}"),
        }
    }
}

/// Process packages in input order, one output line per entry.
///
/// Entries that fail to classify produce a diagnostic line naming the
/// offending tag; the rest of the batch is unaffected.
pub fn process_packages(packages: &[(String, Vec<f64>)]) -> Vec<OutputLine> {
    packages
        .iter()
        .map(|(tag, values)| match classify(tag, values) {
            Ok(reading) => OutputLine::Report(reading.report()),
            Err(err) => {
                tracing::warn!(tag = %err.tag(), "skipping entry: {err}");
                OutputLine::Diagnostic(err)
            }
        })
        .collect()
}
