//! Serializable summary of a check run.

use super::{CheckError, CheckOutcome, FailureKind};
use serde::Serialize;

/// Pass/fail status of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The repository has a populated CODEOWNERS file.
    Pass,
    /// The repository does not.
    Fail,
}

/// One ownership rule in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    /// The line number (1-based).
    pub line: usize,
    /// The path pattern.
    pub pattern: String,
    /// The owners, exactly as written.
    pub owners: Vec<String>,
}

/// The result of a check run in a form suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The check name.
    pub check: &'static str,
    /// Pass or fail.
    pub status: CheckStatus,
    /// Why the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureKind>,
    /// The CODEOWNERS path relative to the repository root, if one was found.
    pub path: Option<&'static str>,
    /// Number of ownership rules.
    pub rule_count: usize,
    /// The human-readable outcome.
    pub message: String,
    /// How to fix a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// The ownership rules that were counted.
    pub rules: Vec<RuleEntry>,
}

impl CheckReport {
    /// Builds a report from the result of [`super::CodeownersCheck::run`].
    pub fn from_result(result: &Result<CheckOutcome, CheckError>) -> Self {
        match result {
            Ok(outcome) => Self::pass(outcome),
            Err(error) => Self::fail(error),
        }
    }

    fn pass(outcome: &CheckOutcome) -> Self {
        let rules = outcome
            .rules()
            .map(|rule| RuleEntry {
                line: rule.line,
                pattern: rule.pattern.text.clone(),
                owners: rule.owners.iter().map(|o| o.text.clone()).collect(),
            })
            .collect();

        Self {
            check: "codeowners",
            status: CheckStatus::Pass,
            reason: None,
            path: Some(outcome.location.relative),
            rule_count: outcome.rule_count(),
            message: outcome.to_string(),
            hint: None,
            rules,
        }
    }

    fn fail(error: &CheckError) -> Self {
        Self {
            check: "codeowners",
            status: CheckStatus::Fail,
            reason: Some(error.kind()),
            path: error.path(),
            rule_count: 0,
            message: error.to_string(),
            hint: error.hint(),
            rules: Vec::new(),
        }
    }

    /// Returns true if the check passed.
    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CodeownersLocation;
    use crate::parse::parse_codeowners;
    use std::path::PathBuf;

    fn outcome(content: &str) -> CheckOutcome {
        CheckOutcome {
            location: CodeownersLocation {
                relative: "docs/CODEOWNERS",
                path: PathBuf::from("/repo/docs/CODEOWNERS"),
            },
            file: parse_codeowners(content),
        }
    }

    #[test]
    fn pass_report() {
        let report = CheckReport::from_result(&Ok(outcome("# c\n*.py @alice\n\n*.go @bob @carol")));

        assert!(report.is_pass());
        assert_eq!(report.path, Some("docs/CODEOWNERS"));
        assert_eq!(report.rule_count, 2);
        assert_eq!(
            report.message,
            "CODEOWNERS file found: docs/CODEOWNERS (2 ownership rules)"
        );
        assert_eq!(
            report.rules[1],
            RuleEntry {
                line: 4,
                pattern: "*.go".to_string(),
                owners: vec!["@bob".to_string(), "@carol".to_string()],
            }
        );
    }

    #[test]
    fn fail_report() {
        let report = CheckReport::from_result(&Err(CheckError::EmptyRules { path: "CODEOWNERS" }));

        assert!(!report.is_pass());
        assert_eq!(report.reason, Some(FailureKind::EmptyRules));
        assert_eq!(report.path, Some("CODEOWNERS"));
        assert_eq!(report.rule_count, 0);
        assert!(report.hint.is_some());
    }

    #[test]
    fn json_shape() {
        let report = CheckReport::from_result(&Err(CheckError::NotFound {
            repo_path: PathBuf::from("."),
        }));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["check"], "codeowners");
        assert_eq!(json["status"], "fail");
        assert_eq!(json["reason"], "not_found");
        assert!(json["path"].is_null());
        assert!(json["rules"].as_array().unwrap().is_empty());

        let pass = serde_json::to_value(CheckReport::from_result(&Ok(outcome("* @a")))).unwrap();
        assert_eq!(pass["status"], "pass");
        assert!(pass.get("reason").is_none());
        assert!(pass.get("hint").is_none());
    }
}
