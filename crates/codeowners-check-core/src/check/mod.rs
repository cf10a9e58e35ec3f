//! The CODEOWNERS presence check.
//!
//! The check runs as a fixed sequence: locate the file among
//! [`CODEOWNERS_LOCATIONS`], read it leniently, count its ownership rules,
//! and fail when there are none.

mod error;
mod locate;
mod report;
mod source;

pub use error::{CheckError, FailureKind};
pub use locate::{CODEOWNERS_LOCATIONS, CodeownersLocation, expected_locations, find_codeowners_file};
pub use report::{CheckReport, CheckStatus, RuleEntry};
pub use source::{decode_lenient, read_lenient};

use crate::parse::{CodeownersFile, RuleRef, parse_codeowners};
use log::{debug, info};
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// Returns `word` for a count of exactly one and its plural otherwise.
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Configuration for a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// The repository root under inspection.
    pub repo_path: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
        }
    }
}

impl CheckConfig {
    /// Creates a configuration rooted at the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repository root.
    pub fn with_repo_path(mut self, repo_path: impl Into<PathBuf>) -> Self {
        self.repo_path = repo_path.into();
        self
    }
}

/// A passing check: the file that was found and its parsed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Where the CODEOWNERS file was found.
    pub location: CodeownersLocation,
    /// The parsed file.
    pub file: CodeownersFile,
}

impl CheckOutcome {
    /// Returns the number of ownership rules.
    pub fn rule_count(&self) -> usize {
        self.file.rule_count()
    }

    /// Returns an iterator over the ownership rules.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.file.rules()
    }
}

impl Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.rule_count();
        write!(
            f,
            "CODEOWNERS file found: {} ({} ownership {})",
            self.location,
            count,
            pluralize(count, "rule")
        )
    }
}

/// Checks that a repository has a CODEOWNERS file with at least one rule.
#[derive(Debug, Clone, Default)]
pub struct CodeownersCheck {
    config: CheckConfig,
}

impl CodeownersCheck {
    /// Creates a check with the given configuration.
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Returns the name of this check.
    pub fn name(&self) -> &'static str {
        "codeowners"
    }

    /// Returns the repository root this check inspects.
    pub fn repo_path(&self) -> &Path {
        &self.config.repo_path
    }

    /// Runs the check.
    pub fn run(&self) -> Result<CheckOutcome, CheckError> {
        let repo_path = self.repo_path();
        info!("Checking CODEOWNERS in {}", repo_path.display());

        let location = find_codeowners_file(repo_path).ok_or_else(|| CheckError::NotFound {
            repo_path: repo_path.to_path_buf(),
        })?;

        let content = read_lenient(&location.path).map_err(|source| CheckError::Read {
            path: location.relative,
            source,
        })?;

        let file = parse_codeowners(&content);
        debug!("{} has {} ownership rule(s)", location, file.rule_count());

        if file.is_empty() {
            return Err(CheckError::EmptyRules {
                path: location.relative,
            });
        }

        Ok(CheckOutcome { location, file })
    }
}
