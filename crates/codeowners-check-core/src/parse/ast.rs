//! AST data structures for CODEOWNERS files.
//!
//! Only the shape of each line is recorded. Patterns and owners are kept as
//! the raw tokens found in the file and are not validated.

use super::span::Span;
use serde::Serialize;
use std::fmt::{self, Display};

/// A raw token (pattern or owner) with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The token text exactly as written.
    pub text: String,
    /// Location of the token in the decoded content.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The kind of a line in a CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// A line whose first non-whitespace character is `#`.
    Comment {
        /// The comment content (without the leading '#').
        content: String,
    },
    /// An ownership rule: any other line.
    Rule {
        /// The path pattern.
        pattern: Token,
        /// The owners following the pattern, possibly none.
        owners: Vec<Token>,
    },
}

/// A single line in a CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The kind/content of this line.
    pub kind: LineKind,
    /// Location of the entire line, excluding its terminator.
    pub span: Span,
}

impl Line {
    /// Creates a new line with the given kind and span.
    pub fn new(kind: LineKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a blank line.
    pub fn blank(span: Span) -> Self {
        Self::new(LineKind::Blank, span)
    }

    /// Creates a comment line.
    pub fn comment(content: impl Into<String>, span: Span) -> Self {
        Self::new(
            LineKind::Comment {
                content: content.into(),
            },
            span,
        )
    }

    /// Creates a rule line.
    pub fn rule(pattern: Token, owners: Vec<Token>, span: Span) -> Self {
        Self::new(LineKind::Rule { pattern, owners }, span)
    }

    /// Returns true if this is a rule line.
    pub fn is_rule(&self) -> bool {
        matches!(self.kind, LineKind::Rule { .. })
    }
}

/// A borrowed view of one ownership rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleRef<'a> {
    /// The line number (1-based).
    pub line: usize,
    /// The path pattern.
    pub pattern: &'a Token,
    /// The owners of the pattern.
    pub owners: &'a [Token],
}

/// The complete AST for a CODEOWNERS file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeownersFile {
    /// All lines in the file, in order.
    pub lines: Vec<Line>,
}

impl CodeownersFile {
    /// Creates a new CODEOWNERS file AST from the given lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Returns an iterator over all rule lines.
    pub fn rules(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.lines.iter().filter_map(|line| match &line.kind {
            LineKind::Rule { pattern, owners } => Some(RuleRef {
                line: line.span.line,
                pattern,
                owners,
            }),
            _ => None,
        })
    }

    /// Returns the number of ownership rules.
    pub fn rule_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_rule()).count()
    }

    /// Returns true if the file declares no ownership rules.
    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }
}
