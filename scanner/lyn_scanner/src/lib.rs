//! Context-sensitive scanning engine for the Lyn grammar.
//!
//! Lyn's declarative grammar recognizes most tokens by pattern alone. Three
//! classes need stateful, order-dependent scanning and are routed here:
//!
//! - **Layout separators** — newline + indentation decides whether a logical
//!   statement ends, modulated by the next significant character.
//! - **String literals with nested interpolation** — plain, raw (`r`), and
//!   tagged (`c`) literals over either quote style, containing `$`-delimited
//!   embedded expressions that may themselves contain strings.
//! - **Comments** — line comments and `/* ... */` block comments with
//!   correct nesting (`/* /* */ */` is one token, not two).
//!
//! All three share one [`ContextStack`]: the scanner must know what it is
//! currently inside before any of them can be decided — a newline inside a
//! string is content, not a separator; a `/` inside a string never opens a
//! comment.
//!
//! # Protocol
//!
//! The host calls [`Scanner::scan`] once per token request with a cursor and
//! the set of currently acceptable kinds. The call either recognizes exactly
//! one token or declines (`None`), deferring to the grammar's ordinary
//! rules; there is no error channel. The stack is the only state that
//! survives between calls and can be serialized between incremental edits.

mod comment;
mod interpolation;
mod separator;
mod string;

pub use lyn_scanner_core::{
    Context, ContextStack, ExternalToken, QuoteKind, ScanCursor, SourceCursor, StateError,
    StringKind, ValidTokens, INTERPOLATION_SIGIL, MAX_DEPTH, RAW_PREFIX, SERIALIZED_MAX,
    TAGGED_PREFIX,
};

/// One scanning session: a context stack plus the dispatch logic.
///
/// The host owns the session (one per parse tree, reused across incremental
/// edits) and serializes calls — a session is used by exactly one in-flight
/// scan at a time.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    stack: ContextStack,
}

impl Scanner {
    /// Create a fresh session with an empty context stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the fresh-session state without reallocating.
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// The session's open-scope stack.
    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    /// Serialize the session state into `buf`, returning the byte count.
    /// See [`ContextStack::serialize`] for the layout; [`SERIALIZED_MAX`]
    /// bytes always suffice.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        self.stack.serialize(buf)
    }

    /// Restore session state from serialized bytes. Zero input bytes reset
    /// to the fresh empty state. The current state is untouched on error.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        self.stack = ContextStack::deserialize(bytes)?;
        tracing::debug!(depth = self.stack.depth(), "session state restored");
        Ok(())
    }

    /// Recognize at most one token at the cursor.
    ///
    /// Routes to exactly one sub-scanner based on the innermost open context
    /// and the acceptance set, or declines. A declined call commits no
    /// input: the host discards any lookahead the scan consumed.
    pub fn scan(
        &mut self,
        cursor: &mut impl ScanCursor,
        valid: ValidTokens,
    ) -> Option<ExternalToken> {
        let first = cursor.lookahead()?;
        let top = self.stack.top();
        tracing::trace!(?top, ?first, "scan");

        // Layout separators only exist at top level: inside a string a
        // newline is content, inside braces layout is insignificant.
        if self.stack.is_empty()
            && matches!(first, '\r' | '\n' | '\t')
            && valid.contains(ValidTokens::AUTOMATIC_SEPARATOR)
        {
            return separator::scan(cursor);
        }

        if self.stack.is_empty() || top == Some(Context::BracedInterpolation) {
            skip_insignificant(cursor);
        }

        let in_string = top.is_some_and(Context::is_string);
        if !in_string && cursor.lookahead() == Some('/') && valid.contains(ValidTokens::COMMENT)
        {
            return comment::scan(cursor);
        }

        let in_interpolation = top.is_some_and(Context::is_interpolation);
        if (self.stack.is_empty() || in_interpolation)
            && valid.intersects(ValidTokens::ANY_STRING_OPENING)
        {
            return string::scan_opening(&mut self.stack, cursor, valid);
        }

        skip_insignificant(cursor);
        if valid.intersects(ValidTokens::STRING_INNER) {
            let current = cursor.lookahead()?;
            if terminator_matches(top, current) {
                if valid.contains(ValidTokens::STRING_CLOSING) {
                    return string::scan_closing(&mut self.stack, cursor);
                }
                if valid.contains(ValidTokens::INTERPOLATION_CLOSING) {
                    return interpolation::scan_closing(&mut self.stack, cursor);
                }
            }
            if current == INTERPOLATION_SIGIL
                && valid.intersects(ValidTokens::ANY_INTERPOLATION_OPENING)
            {
                return interpolation::scan_opening(&mut self.stack, cursor, valid);
            }
            if valid.contains(ValidTokens::STRING_CONTENT) {
                return string::scan_content(&self.stack, cursor);
            }
        }
        None
    }
}

/// Does `current` close the innermost open scope?
///
/// The unbraced interpolation marker matches unconditionally: its closing
/// token is zero-width, the region's end being implied by grammar context.
fn terminator_matches(top: Option<Context>, current: char) -> bool {
    match top {
        Some(context) => context.terminator().map_or(true, |t| t == current),
        None => false,
    }
}

/// Skip a run of insignificant whitespace (space, tab, carriage return,
/// line feed). Skipped characters never enter a token span.
fn skip_insignificant(cursor: &mut impl ScanCursor) {
    while let Some(c) = cursor.lookahead() {
        if matches!(c, ' ' | '\t' | '\r' | '\n') {
            cursor.skip();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn string_context(quote: QuoteKind) -> Context {
        Context::String {
            kind: StringKind::Plain,
            quote,
        }
    }

    // === End of input ===

    #[test]
    fn declines_immediately_at_end_of_input() {
        let mut scanner = Scanner::new();
        let mut cursor = SourceCursor::new("");
        assert_eq!(cursor.lookahead(), None);
        assert_eq!(scanner.scan(&mut cursor, ValidTokens::all()), None);
    }

    // === Acceptance gating ===

    #[test]
    fn separator_requires_acceptance() {
        let mut scanner = Scanner::new();
        let mut cursor = SourceCursor::new("\nfoo");
        assert_eq!(scanner.scan(&mut cursor, ValidTokens::COMMENT), None);
    }

    #[test]
    fn comment_requires_acceptance() {
        let mut scanner = Scanner::new();
        let mut cursor = SourceCursor::new("// hi");
        assert_eq!(
            scanner.scan(&mut cursor, ValidTokens::AUTOMATIC_SEPARATOR),
            None
        );
    }

    #[test]
    fn never_emits_an_unaccepted_kind() {
        let inputs = ["\nx", "// c", "/* c */", "'s'", "r'x'", "${", "$x", "}"];
        for input in inputs {
            let mut scanner = Scanner::new();
            let mut cursor = SourceCursor::new(input);
            assert_eq!(
                scanner.scan(&mut cursor, ValidTokens::empty()),
                None,
                "emitted a token for {input:?} with nothing accepted"
            );
        }
    }

    // === Context-sensitive routing ===

    #[test]
    fn newline_inside_a_string_is_not_a_separator() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Double)));
        let mut cursor = SourceCursor::new("\nstill content\"");
        let token = scanner.scan(
            &mut cursor,
            ValidTokens::AUTOMATIC_SEPARATOR | ValidTokens::STRING_INNER,
        );
        assert_eq!(token, Some(ExternalToken::StringContent));
    }

    #[test]
    fn slash_inside_a_string_is_not_a_comment() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Single)));
        let mut cursor = SourceCursor::new("// not a comment'");
        let token = scanner.scan(
            &mut cursor,
            ValidTokens::COMMENT | ValidTokens::STRING_INNER,
        );
        assert_eq!(token, Some(ExternalToken::StringContent));
        assert_eq!(cursor.token_text(), "// not a comment");
    }

    #[test]
    fn comment_is_recognized_inside_braced_interpolation() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Double)));
        assert!(scanner.stack.push(Context::BracedInterpolation));
        let mut cursor = SourceCursor::new("  // trailing");
        let token = scanner.scan(&mut cursor, ValidTokens::COMMENT);
        assert_eq!(token, Some(ExternalToken::Comment));
        assert_eq!(cursor.token_text(), "// trailing");
    }

    #[test]
    fn string_opens_inside_braced_interpolation() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Double)));
        assert!(scanner.stack.push(Context::BracedInterpolation));
        let mut cursor = SourceCursor::new("'nested'");
        let token = scanner.scan(&mut cursor, ValidTokens::ANY_STRING_OPENING);
        assert_eq!(token, Some(ExternalToken::StringOpening));
        assert_eq!(scanner.stack().depth(), 3);
    }

    #[test]
    fn string_does_not_open_inside_a_string() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Double)));
        // A single quote inside a double-quoted string is plain content.
        let mut cursor = SourceCursor::new("'x");
        let token = scanner.scan(
            &mut cursor,
            ValidTokens::ANY_STRING_OPENING | ValidTokens::STRING_CONTENT,
        );
        assert_eq!(token, Some(ExternalToken::StringContent));
        assert_eq!(cursor.token_text(), "'x");
    }

    // === Closing preference ===

    #[test]
    fn closing_quote_prefers_string_closing() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Double)));
        let mut cursor = SourceCursor::new("\"");
        let token = scanner.scan(&mut cursor, ValidTokens::STRING_INNER);
        assert_eq!(token, Some(ExternalToken::StringClosing));
        assert!(scanner.stack().is_empty());
    }

    #[test]
    fn brace_closes_interpolation_when_string_closing_is_not_accepted() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Double)));
        assert!(scanner.stack.push(Context::BracedInterpolation));
        let mut cursor = SourceCursor::new("}");
        let token = scanner.scan(
            &mut cursor,
            ValidTokens::INTERPOLATION_CLOSING | ValidTokens::STRING_CONTENT,
        );
        assert_eq!(token, Some(ExternalToken::InterpolationClosing));
        assert_eq!(scanner.stack().top(), Some(string_context(QuoteKind::Double)));
    }

    // === Lifecycle ===

    #[test]
    fn reset_empties_the_stack() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(Context::BracedInterpolation));
        scanner.reset();
        assert!(scanner.stack().is_empty());
    }

    #[test]
    fn serialize_deserialize_preserves_the_session() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(string_context(QuoteKind::Single)));
        assert!(scanner.stack.push(Context::BracedInterpolation));

        let mut buf = [0u8; SERIALIZED_MAX];
        let written = scanner.serialize(&mut buf);

        let mut restored = Scanner::new();
        assert_eq!(restored.deserialize(&buf[..written]), Ok(()));
        assert_eq!(restored.stack(), scanner.stack());
    }

    #[test]
    fn deserialize_error_leaves_state_untouched() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(Context::BracedInterpolation));
        let before = scanner.stack().clone();
        assert!(scanner.deserialize(&[9, 9]).is_err());
        assert_eq!(scanner.stack(), &before);
    }

    #[test]
    fn deserialize_zero_bytes_resets() {
        let mut scanner = Scanner::new();
        assert!(scanner.stack.push(Context::BracedInterpolation));
        assert_eq!(scanner.deserialize(&[]), Ok(()));
        assert!(scanner.stack().is_empty());
    }
}
