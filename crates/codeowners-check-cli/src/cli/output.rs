//! Output formatting for the CLI.
//!
//! Human-readable lines go to stdout on success and stderr on failure.
//! JSON reports always go to stdout.

use codeowners_check_core::{CheckError, CheckOutcome, CheckReport};
use colored::Colorize;
use std::io::{self, Write};

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes the success line.
    pub fn write_success(&mut self, outcome: &CheckOutcome) -> io::Result<()> {
        let message = outcome.to_string();
        if self.use_colors {
            writeln!(self.writer, "{}", message.green())
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Writes the failure message followed by its hint, if any.
    pub fn write_failure(&mut self, error: &CheckError) -> io::Result<()> {
        let message = error.to_string();
        if self.use_colors {
            writeln!(self.writer, "{}", message.red().bold())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }

        if let Some(hint) = error.hint() {
            writeln!(self.writer, "{}", hint)?;
        }
        Ok(())
    }
}

/// Writes a check result as human-readable lines.
pub fn write_human<O: Write, E: Write>(
    result: &Result<CheckOutcome, CheckError>,
    stdout: O,
    stderr: E,
    stdout_colors: bool,
    stderr_colors: bool,
) -> io::Result<()> {
    match result {
        Ok(outcome) => HumanOutput::new(stdout, stdout_colors).write_success(outcome),
        Err(error) => HumanOutput::new(stderr, stderr_colors).write_failure(error),
    }
}

/// Writes a check result as a pretty-printed JSON report.
pub fn write_json<W: Write>(
    result: &Result<CheckOutcome, CheckError>,
    writer: &mut W,
) -> io::Result<()> {
    let report = CheckReport::from_result(result);
    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    writeln!(writer, "{}", json)
}
