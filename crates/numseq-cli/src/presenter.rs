//! Result presenters: human-readable text and JSON.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use console::style;
use serde::Serialize;

use crate::output::{format_duration, format_number, format_value};

/// Outcome of one command, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Operation name, e.g. `factorial`.
    pub operation: String,
    /// Rendered input arguments.
    pub input: String,
    /// Rendered result values in order.
    pub values: Vec<String>,
    /// Extra facts shown with `--details`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
    /// Wall time spent producing the values.
    #[serde(skip)]
    pub duration: Duration,
}

impl Report {
    /// Create a report with no details.
    #[must_use]
    pub fn new(
        operation: impl Into<String>,
        input: impl Into<String>,
        values: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            operation: operation.into(),
            input: input.into(),
            values,
            details: BTreeMap::new(),
            duration,
        }
    }

    /// Attach a detail line.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.details.insert(key.into(), value.to_string());
        self
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a report.
    fn present(&self, report: &Report, out: &mut dyn Write) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Text presenter for terminals.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    fn header(text: &str) -> String {
        if is_color_disabled() {
            format!("=== {text} ===")
        } else {
            style(format!("=== {text} ===")).bold().cyan().to_string()
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        if self.quiet {
            for value in &report.values {
                writeln!(out, "{value}")?;
            }
            return Ok(());
        }

        writeln!(out, "{}", Self::header(&report.operation))?;
        writeln!(out, "Input: {}", report.input)?;
        writeln!(out, "Duration: {}", format_duration(report.duration))?;

        if self.details {
            for (key, value) in &report.details {
                writeln!(out, "{key}: {value}")?;
            }
        }

        match report.values.as_slice() {
            [single] => writeln!(out, "Result: {}", format_value(single, self.verbose))?,
            values => {
                writeln!(out, "Terms: {}", format_number(values.len() as u64))?;
                for value in values {
                    writeln!(out, "  {}", format_value(value, self.verbose))?;
                }
            }
        }
        Ok(())
    }

    fn present_error(&self, error: &str) {
        if is_color_disabled() {
            eprintln!("[ERROR] {error}");
        } else {
            eprintln!("{} {error}", style("[ERROR]").red().bold());
        }
    }
}

/// JSON presenter, one document per report.
#[derive(Debug, Default)]
pub struct JsonPresenter;

impl ResultPresenter for JsonPresenter {
    fn present(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }

    fn present_error(&self, error: &str) {
        let doc = serde_json::json!({ "error": error });
        eprintln!("{doc}");
    }
}
