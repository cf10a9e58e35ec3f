//! Line and file-level parsers for CODEOWNERS files.
//!
//! Every line classifies as blank, comment, or rule, so parsing cannot fail.

use super::ast::{CodeownersFile, Line, Token};
use super::lexer::{parse_comment_line, parse_rule_components, split_lines, trim_line};
use super::span::Span;
use log::{debug, trace};

/// Parses a single line of a CODEOWNERS file.
fn parse_line(line_text: &str, line_num: usize, line_offset: usize) -> Line {
    let line_span = Span::new(line_offset, line_num, 1, line_text.len());
    let (leading, trimmed) = trim_line(line_text);

    if trimmed.is_empty() {
        return Line::blank(line_span);
    }

    if let Ok((_, content)) = parse_comment_line(trimmed) {
        return Line::comment(content, line_span);
    }

    match parse_rule_components(trimmed) {
        Ok((_, components)) => {
            let pattern = Token::new(
                components.pattern,
                line_span.within(leading, components.pattern.len()),
            );
            let owners = components
                .owners
                .iter()
                .zip(components.owner_offsets.iter())
                .map(|(owner, &offset)| {
                    Token::new(*owner, line_span.within(leading + offset, owner.len()))
                })
                .collect();
            Line::rule(pattern, owners, line_span)
        }
        // A trimmed, non-comment line always starts with a token character,
        // but keep the whole text as the pattern rather than losing the rule.
        Err(_) => Line::rule(
            Token::new(trimmed, line_span.within(leading, trimmed.len())),
            Vec::new(),
            line_span,
        ),
    }
}

/// Parses CODEOWNERS content into its lines.
pub fn parse_codeowners(input: &str) -> CodeownersFile {
    debug!("Parsing CODEOWNERS content ({} bytes)", input.len());

    let lines: Vec<Line> = split_lines(input)
        .enumerate()
        .map(|(idx, (offset, text))| {
            let line = parse_line(text, idx + 1, offset);
            trace!("Line {}: {:?}", idx + 1, line.kind);
            line
        })
        .collect();

    let file = CodeownersFile::new(lines);
    debug!(
        "Parsing complete: {} lines, {} rules",
        file.lines.len(),
        file.rule_count()
    );
    file
}

/// Counts the ownership rules in CODEOWNERS content.
///
/// A rule is any line that is non-empty after trimming surrounding
/// whitespace and does not start with `#`.
pub fn count_rules(input: &str) -> usize {
    parse_codeowners(input).rule_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::LineKind;

    #[test]
    fn counts_rules_ignoring_blanks_and_comments() {
        let input = "# comment\n*.py @alice\n\n*.go @bob";
        assert_eq!(count_rules(input), 2);
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(count_rules("  * @team  "), 1);
        assert_eq!(count_rules("   "), 0);
        assert_eq!(count_rules("\t# indented comment\n"), 0);
    }

    #[test]
    fn only_comments_and_blanks() {
        assert_eq!(count_rules("# a\n\n   \n#b\n"), 0);
        assert_eq!(count_rules(""), 0);
    }

    #[test]
    fn rule_without_owners_still_counts() {
        assert_eq!(count_rules("/docs/\n"), 1);
    }

    #[test]
    fn hash_inside_token_is_a_rule() {
        assert_eq!(count_rules("foo#bar @x\n"), 1);
    }

    #[test]
    fn crlf_content() {
        assert_eq!(count_rules("# header\r\n* @a\r\n\r\n/src/ @b\r\n"), 2);
    }

    #[test]
    fn rule_tokens_have_positions() {
        let file = parse_codeowners("# header\n  *.rs  @rust @org/team # note\n");
        assert_eq!(file.lines.len(), 2);

        let line = &file.lines[1];
        assert_eq!(line.span.line, 2);
        assert_eq!(line.span.offset, 9);

        match &line.kind {
            LineKind::Rule { pattern, owners } => {
                assert_eq!(pattern.text, "*.rs");
                assert_eq!(pattern.span.column, 3);
                assert_eq!(pattern.span.offset, 11);
                let texts: Vec<&str> = owners.iter().map(|o| o.text.as_str()).collect();
                assert_eq!(texts, vec!["@rust", "@org/team"]);
                assert_eq!(owners[0].span.column, 9);
                assert_eq!(owners[1].span.column, 15);
            }
            other => panic!("Expected rule, got {:?}", other),
        }
    }

    #[test]
    fn comment_content_is_kept() {
        let file = parse_codeowners("   #  owned by platform");
        assert_eq!(
            file.lines[0].kind,
            LineKind::Comment {
                content: "  owned by platform".to_string()
            }
        );
    }
}
