//! Resolution of the CODEOWNERS file among the standard locations.

use log::{debug, trace};
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// Candidate CODEOWNERS locations relative to the repository root, in
/// priority order.
pub const CODEOWNERS_LOCATIONS: [&str; 3] = ["CODEOWNERS", ".github/CODEOWNERS", "docs/CODEOWNERS"];

/// Returns the human-readable list of candidate locations,
/// e.g. `CODEOWNERS, .github/CODEOWNERS, or docs/CODEOWNERS`.
pub fn expected_locations() -> String {
    match CODEOWNERS_LOCATIONS.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
        None => String::new(),
    }
}

/// A resolved CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeownersLocation {
    /// The candidate that matched, relative to the repository root.
    pub relative: &'static str,
    /// The candidate joined onto the repository root.
    pub path: PathBuf,
}

impl Display for CodeownersLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative)
    }
}

/// Finds the CODEOWNERS file in a repository.
///
/// Searches in the following locations (in order):
/// 1. `CODEOWNERS`
/// 2. `.github/CODEOWNERS`
/// 3. `docs/CODEOWNERS`
///
/// The first candidate that is a regular file wins. Directories and dangling
/// symlinks are skipped. Returns `None` when no candidate matches.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use codeowners_check_core::find_codeowners_file;
///
/// let repo_path = Path::new("/path/to/repo");
/// if let Some(location) = find_codeowners_file(repo_path) {
///     println!("Found CODEOWNERS at: {}", location);
/// } else {
///     eprintln!("CODEOWNERS file not found");
/// }
/// ```
pub fn find_codeowners_file(repo_path: &Path) -> Option<CodeownersLocation> {
    debug!("Looking for CODEOWNERS in {}", repo_path.display());

    CODEOWNERS_LOCATIONS.into_iter().find_map(|relative| {
        let path = repo_path.join(relative);
        if path.is_file() {
            debug!("Found CODEOWNERS at {}", relative);
            Some(CodeownersLocation { relative, path })
        } else {
            trace!("No regular file at {}", path.display());
            None
        }
    })
}
