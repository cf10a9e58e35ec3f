//! CODEOWNERS Check Core
//!
//! A library for checking that a repository contains a populated CODEOWNERS
//! file, as one policy of a repository scorecard.
//!
//! # Features
//!
//! - **Location**: Probes `CODEOWNERS`, `.github/CODEOWNERS` and
//!   `docs/CODEOWNERS` in priority order
//! - **Lenient Reading**: Undecodable bytes are dropped instead of failing
//! - **Parser**: Classifies lines as blank, comment, or ownership rule, with
//!   span metadata
//! - **Reporting**: Exact human messages and a serializable report
//!
//! # Quick Start
//!
//! ```no_run
//! use codeowners_check_core::{CheckConfig, CodeownersCheck};
//!
//! let check = CodeownersCheck::new(CheckConfig::new().with_repo_path("/path/to/repo"));
//!
//! match check.run() {
//!     Ok(outcome) => println!("{}", outcome),
//!     Err(error) => {
//!         eprintln!("{}", error);
//!         if let Some(hint) = error.hint() {
//!             eprintln!("{}", hint);
//!         }
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for CODEOWNERS content
//! - [`check`]: Location, reading and the check itself

pub mod check;
pub mod parse;

// Re-export commonly used types at the crate root
pub use check::{
    CODEOWNERS_LOCATIONS, CheckConfig, CheckError, CheckOutcome, CheckReport, CheckStatus,
    CodeownersCheck, CodeownersLocation, FailureKind, find_codeowners_file, pluralize,
    read_lenient,
};
pub use parse::{CodeownersFile, count_rules, parse_codeowners};
