//! Reporter adapters for tests and quiet embedding.
//!
//! The production reporter lives in the CLI crate, where the console
//! styling machinery is; these two exist so the service can run without a
//! terminal.

use std::sync::{Arc, Mutex};

use plugsmith_core::application::ports::Reporter;

/// Reporter that records every line for later assertions.
///
/// Clones share the same buffers.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<ReportLine>>>,
}

/// One recorded report event, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Created(String),
    Warning(String),
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in order.
    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.lock().unwrap().clone()
    }

    /// Only the creation messages, in order.
    pub fn created_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                ReportLine::Created(msg) => Some(msg),
                ReportLine::Warning(_) => None,
            })
            .collect()
    }

    /// Only the warning messages, in order.
    pub fn warning_lines(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                ReportLine::Warning(msg) => Some(msg),
                ReportLine::Created(_) => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn created(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(ReportLine::Created(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(ReportLine::Warning(message.to_string()));
    }
}

/// Reporter that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn created(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_emission_order() {
        let reporter = RecordingReporter::new();
        reporter.created("a");
        reporter.warning("b");
        reporter.created("c");

        assert_eq!(
            reporter.lines(),
            vec![
                ReportLine::Created("a".into()),
                ReportLine::Warning("b".into()),
                ReportLine::Created("c".into()),
            ]
        );
        assert_eq!(reporter.created_lines(), vec!["a", "c"]);
        assert_eq!(reporter.warning_lines(), vec!["b"]);
    }
}
