//! Parser module for CODEOWNERS files.
//!
//! Splits decoded content into lines and classifies each one as blank,
//! comment, or ownership rule, keeping span metadata for reporting.
//!
//! # Example
//!
//! ```rust
//! use codeowners_check_core::parse::parse_codeowners;
//!
//! let input = "# CODEOWNERS file\n*.rs @rustacean\n\n/docs/ @docs-team\n";
//!
//! let file = parse_codeowners(input);
//! assert_eq!(file.rule_count(), 2);
//! for rule in file.rules() {
//!     println!("line {}: {}", rule.line, rule.pattern);
//! }
//! ```

mod ast;
mod lexer;
mod parser;
pub mod span;

pub use ast::{CodeownersFile, Line, LineKind, RuleRef, Token};
pub use lexer::{Lines, split_lines, trim_line};
pub use parser::{count_rules, parse_codeowners};
pub use span::Span;
