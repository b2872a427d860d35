//! Comment scanning: line comments and nested block comments.
//!
//! `//` runs to the next line feed (which stays in the input so layout
//! separation still sees it) or to end of input. `/*` tracks a nesting
//! depth — `/* /* */ */` is a single token — and an unterminated block
//! comment runs to end of input without erroring. The end boundary is
//! re-marked at every closed delimiter so the emitted span is exact even
//! when the outermost `*/` is missing.

use lyn_scanner_core::{ExternalToken, ScanCursor};

/// Scan a comment at a `/`. Declines when the `/` is not followed by
/// another `/` or a `*`.
pub(crate) fn scan(cursor: &mut impl ScanCursor) -> Option<ExternalToken> {
    cursor.advance(); // the first '/'
    match cursor.lookahead() {
        Some('/') => {
            cursor.advance();
            line_comment(cursor)
        }
        Some('*') => {
            cursor.advance();
            block_comment(cursor)
        }
        _ => None,
    }
}

fn line_comment(cursor: &mut impl ScanCursor) -> Option<ExternalToken> {
    while let Some(c) = cursor.lookahead() {
        if c == '\n' {
            break;
        }
        cursor.advance();
    }
    cursor.mark_end();
    Some(ExternalToken::Comment)
}

fn block_comment(cursor: &mut impl ScanCursor) -> Option<ExternalToken> {
    let mut depth = 0u32;
    loop {
        match cursor.lookahead() {
            // Unterminated: the comment ends at end of input.
            None => {
                cursor.mark_end();
                break;
            }
            Some('*') => {
                cursor.advance();
                if cursor.lookahead() == Some('/') {
                    cursor.advance();
                    cursor.mark_end();
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
            }
            Some('/') => {
                cursor.advance();
                if cursor.lookahead() == Some('*') {
                    cursor.advance();
                    depth += 1;
                }
            }
            Some(_) => cursor.advance(),
        }
    }
    Some(ExternalToken::Comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyn_scanner_core::SourceCursor;
    use pretty_assertions::assert_eq;

    fn scan_str(source: &str) -> (Option<ExternalToken>, String) {
        let mut cursor = SourceCursor::new(source);
        let token = scan(&mut cursor);
        (token, cursor.token_text().to_owned())
    }

    // === Line comments ===

    #[test]
    fn line_comment_stops_before_the_line_feed() {
        let (token, text) = scan_str("// note\nnext");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "// note");
    }

    #[test]
    fn line_comment_runs_to_end_of_input() {
        let (token, text) = scan_str("// trailing");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "// trailing");
    }

    #[test]
    fn empty_line_comment() {
        let (token, text) = scan_str("//\nx");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "//");
    }

    #[test]
    fn line_comment_keeps_a_carriage_return() {
        // Only the line feed ends the comment; a CR before it is content.
        let (token, text) = scan_str("// note\r\nnext");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "// note\r");
    }

    // === Lone slash ===

    #[test]
    fn division_declines() {
        let (token, text) = scan_str("/ 2");
        assert_eq!(token, None);
        assert_eq!(text, "");
    }

    #[test]
    fn slash_at_end_of_input_declines() {
        let (token, _) = scan_str("/");
        assert_eq!(token, None);
    }

    // === Block comments ===

    #[test]
    fn simple_block_comment() {
        let (token, text) = scan_str("/* body */ after");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/* body */");
    }

    #[test]
    fn empty_block_comment() {
        let (token, text) = scan_str("/**/x");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/**/");
    }

    #[test]
    fn block_comment_spans_lines() {
        let (token, text) = scan_str("/* a\nb */c");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/* a\nb */");
    }

    #[test]
    fn nested_block_comment_is_one_token() {
        let (token, text) = scan_str("/* /* inner */ still inside */ after");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/* /* inner */ still inside */");
    }

    #[test]
    fn doubly_nested_block_comment() {
        let (token, text) = scan_str("/*a/*b/*c*/b*/a*/x");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/*a/*b/*c*/b*/a*/");
    }

    #[test]
    fn stray_stars_do_not_close() {
        let (token, text) = scan_str("/* ** * **/y");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/* ** * **/");
    }

    #[test]
    fn unterminated_block_comment_runs_to_end_of_input() {
        let (token, text) = scan_str("/* never closed");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/* never closed");
    }

    #[test]
    fn unterminated_nested_comment_spans_to_end_of_input() {
        // The inner comment closes; the outer one never does.
        let (token, text) = scan_str("/* /* inner */ tail");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/* /* inner */ tail");
    }

    #[test]
    fn slash_star_at_end_of_input() {
        let (token, text) = scan_str("/*");
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(text, "/*");
    }
}
