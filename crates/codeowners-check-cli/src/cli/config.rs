//! Configuration handling for the CLI.
//!
//! Converts CLI arguments into the library's configuration types and maps
//! check results onto process exit codes.

use crate::cli::Args;
use codeowners_check_core::{CheckConfig, CheckError, CheckOutcome};
use std::io::{self, IsTerminal};

/// Process exit codes understood by the scorecard runner.
///
/// Every failure kind shares the same code; only the message tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The repository has a populated CODEOWNERS file.
    Success = 0,
    /// The check failed, or its result could not be written.
    Failure = 1,
}

impl ExitCode {
    /// Returns the exit code for a check result.
    pub fn for_result(result: &Result<CheckOutcome, CheckError>) -> Self {
        match result {
            Ok(_) => ExitCode::Success,
            Err(_) => ExitCode::Failure,
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for running the check.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Configuration for the check itself.
    pub check_config: CheckConfig,
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to colourise the success line on stdout.
    pub stdout_colors: bool,
    /// Whether to colourise failure lines on stderr.
    pub stderr_colors: bool,
}

impl ValidatedConfig {
    /// Creates a configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            check_config: CheckConfig::new().with_repo_path(&args.repository_path),
            json_output: args.json,
            stdout_colors: !args.json && io::stdout().is_terminal(),
            stderr_colors: !args.json && io::stderr().is_terminal(),
        }
    }
}
