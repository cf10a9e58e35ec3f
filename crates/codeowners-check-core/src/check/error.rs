//! Failure kinds of the CODEOWNERS check.

use super::locate::expected_locations;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why the check failed.
#[derive(Debug, Error)]
pub enum CheckError {
    /// None of the candidate locations holds a regular file.
    #[error("No CODEOWNERS file found")]
    NotFound {
        /// The repository root that was searched.
        repo_path: PathBuf,
    },

    /// A CODEOWNERS file exists but declares no ownership rules.
    #[error("CODEOWNERS file found at {path} but contains no ownership rules")]
    EmptyRules {
        /// The file path relative to the repository root.
        path: &'static str,
    },

    /// The CODEOWNERS file exists but could not be read.
    #[error("Failed to read CODEOWNERS file '{path}': {source}")]
    Read {
        /// The file path relative to the repository root.
        path: &'static str,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Machine-readable failure reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No CODEOWNERS file found.
    NotFound,
    /// CODEOWNERS file has zero rules.
    EmptyRules,
    /// CODEOWNERS file could not be read.
    ReadError,
}

impl CheckError {
    /// Returns the machine-readable kind of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::NotFound { .. } => FailureKind::NotFound,
            CheckError::EmptyRules { .. } => FailureKind::EmptyRules,
            CheckError::Read { .. } => FailureKind::ReadError,
        }
    }

    /// Returns the follow-up line telling the user how to fix the failure.
    pub fn hint(&self) -> Option<String> {
        match self {
            CheckError::NotFound { .. } => {
                Some(format!("Expected locations: {}", expected_locations()))
            }
            CheckError::EmptyRules { .. } => {
                Some("Add at least one ownership rule (e.g., '* @team-name')".to_string())
            }
            CheckError::Read { .. } => None,
        }
    }

    /// Returns the CODEOWNERS path involved, if one was found.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            CheckError::NotFound { .. } => None,
            CheckError::EmptyRules { path } | CheckError::Read { path, .. } => Some(*path),
        }
    }
}
