//! Lexer and token parsers for CODEOWNERS files.
//!
//! This module splits decoded content into lines and contains the nom-based
//! parsers for the tokens of a single trimmed line.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::rest,
};

/// Returns true for characters that are stripped from both ends of a line.
///
/// This is Unicode whitespace plus the ASCII information separators, which
/// are also treated as line boundaries by [`split_lines`].
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Returns true for characters that end a line.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Characters that can appear in a pattern or owner token.
fn is_token_char(c: char) -> bool {
    !is_line_space(c)
}

/// Iterator over the lines of a text, yielding each line with its byte offset.
///
/// `\r\n` counts as a single boundary. A boundary at the very end of the
/// input does not produce a trailing empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.input.is_empty() {
            return None;
        }

        let start = self.offset;
        let (line, consumed) = match self.input.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((idx, c)) => {
                let mut consumed = idx + c.len_utf8();
                if c == '\r' && self.input[consumed..].starts_with('\n') {
                    consumed += 1;
                }
                (&self.input[..idx], consumed)
            }
            None => (self.input, self.input.len()),
        };

        self.input = &self.input[consumed..];
        self.offset += consumed;
        Some((start, line))
    }
}

/// Splits text into lines.
pub fn split_lines(input: &str) -> Lines<'_> {
    Lines { input, offset: 0 }
}

/// Strips surrounding whitespace from a line.
///
/// Returns the number of leading bytes removed along with the trimmed text.
pub fn trim_line(line: &str) -> (usize, &str) {
    let start_trimmed = line.trim_start_matches(is_line_space);
    let leading = line.len() - start_trimmed.len();
    (leading, start_trimmed.trim_end_matches(is_line_space))
}

/// Parses a trimmed comment line, returning the text after the `#`.
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (char('#'), rest).map(|(_, content)| content).parse(input)
}

/// Result of tokenising a rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleComponents<'a> {
    /// The pattern text.
    pub pattern: &'a str,
    /// List of owner texts.
    pub owners: Vec<&'a str>,
    /// Byte offsets of each owner start within the trimmed line.
    pub owner_offsets: Vec<usize>,
}

/// Tokenises a trimmed rule line into a pattern and its owners.
///
/// The pattern starts at offset 0. Owners are the whitespace separated tokens
/// after it, up to a token starting with `#`. A rule may have no owners.
pub fn parse_rule_components(input: &str) -> IResult<&str, RuleComponents<'_>> {
    let (after_pattern, pattern) = take_while1(is_token_char)(input)?;

    let mut owners = Vec::new();
    let mut owner_offsets = Vec::new();
    let mut current = after_pattern;

    loop {
        let (after_ws, _) = take_while(is_line_space)(current)?;

        if after_ws.is_empty() {
            current = after_ws;
            break;
        }

        if let Ok((remaining, _)) = parse_comment_line(after_ws) {
            current = remaining;
            break;
        }

        let (after_owner, owner) = take_while1(is_token_char)(after_ws)?;
        owner_offsets.push(input.len() - after_ws.len());
        owners.push(owner);
        current = after_owner;
    }

    Ok((
        current,
        RuleComponents {
            pattern,
            owners,
            owner_offsets,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &str) -> Vec<&str> {
        split_lines(input).map(|(_, line)| line).collect()
    }

    #[test]
    fn split_lines_unix_and_windows_endings() {
        assert_eq!(lines("a\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_lines_lone_carriage_return() {
        assert_eq!(lines("a\rb"), vec!["a", "b"]);
    }

    #[test]
    fn split_lines_no_trailing_empty_line() {
        assert_eq!(lines("a\n"), vec!["a"]);
        assert_eq!(lines("a\n\n"), vec!["a", ""]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn split_lines_unicode_separators() {
        assert_eq!(lines("a\u{2028}b\u{85}c\u{0c}d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_lines_tracks_offsets() {
        let offsets: Vec<usize> = split_lines("ab\r\ncd\nef").map(|(o, _)| o).collect();
        assert_eq!(offsets, vec![0, 4, 7]);
    }

    #[test]
    fn trim_line_reports_leading_bytes() {
        assert_eq!(trim_line("  * @team  "), (2, "* @team"));
        assert_eq!(trim_line("\t\u{a0}x"), (3, "x"));
        assert_eq!(trim_line("   "), (3, ""));
    }

    #[test]
    fn comment_line() {
        let (_, content) = parse_comment_line("# owners").unwrap();
        assert_eq!(content, " owners");
        assert!(parse_comment_line("*.rs @owner").is_err());
    }

    #[test]
    fn rule_with_owners() {
        let (_, rule) = parse_rule_components("*.rs @rust @org/team").unwrap();
        assert_eq!(rule.pattern, "*.rs");
        assert_eq!(rule.owners, vec!["@rust", "@org/team"]);
        assert_eq!(rule.owner_offsets, vec![5, 11]);
    }

    #[test]
    fn rule_without_owners() {
        let (_, rule) = parse_rule_components("/docs/").unwrap();
        assert_eq!(rule.pattern, "/docs/");
        assert!(rule.owners.is_empty());
    }

    #[test]
    fn rule_with_trailing_comment() {
        let (_, rule) = parse_rule_components("*.go @bob # backend").unwrap();
        assert_eq!(rule.owners, vec!["@bob"]);
        assert_eq!(rule.owner_offsets, vec![5]);
    }

    #[test]
    fn rule_owners_separated_by_tabs() {
        let (_, rule) = parse_rule_components("*\t@a\t\t@b").unwrap();
        assert_eq!(rule.owners, vec!["@a", "@b"]);
        assert_eq!(rule.owner_offsets, vec![2, 6]);
    }
}
