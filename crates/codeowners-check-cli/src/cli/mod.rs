//! CLI module for the CODEOWNERS check.
//!
//! Command-line argument parsing using Clap with environment variable
//! support. The scorecard runner invokes the check with no arguments and
//! passes the repository through `SCORECARD_REPO_PATH`.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// CODEOWNERS check - verifies a repository has a populated CODEOWNERS file.
///
/// Looks for CODEOWNERS, .github/CODEOWNERS or docs/CODEOWNERS (first match
/// wins) and passes when the file declares at least one ownership rule.
#[derive(Parser, Debug)]
#[command(name = "codeowners-check")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root.
    #[arg(long, env = "SCORECARD_REPO_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// Output the check result as JSON instead of human-readable lines.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_flag() {
        let args = Args::parse_from(["codeowners-check", "--json"]);
        assert!(args.json);

        let args = Args::parse_from(["codeowners-check", "-j"]);
        assert!(args.json);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["codeowners-check"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["codeowners-check", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_explicit_repository_path() {
        let args = Args::parse_from(["codeowners-check", "--repository-path", "/srv/repo"]);
        assert_eq!(args.repository_path, PathBuf::from("/srv/repo"));
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
