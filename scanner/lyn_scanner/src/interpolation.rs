//! Interpolation scanning: `${ expr }` and `$identifier` inside strings.
//!
//! The sigil opens a braced region (pushed on the context stack, closed by
//! `}`) or an unbraced one (scoped to a single following identifier, no
//! stack tracking, closed zero-width). A sigil directly before the string's
//! closing quote is literal content. `$$`, `$%`, `$(`, and `$\` are
//! reserved and left unrecognized.

use lyn_scanner_core::{Context, ContextStack, ExternalToken, ScanCursor, ValidTokens};

/// Scan an interpolation opening at the sigil.
pub(crate) fn scan_opening(
    stack: &mut ContextStack,
    cursor: &mut impl ScanCursor,
    valid: ValidTokens,
) -> Option<ExternalToken> {
    cursor.advance(); // the sigil

    if let Some(Context::String { quote, .. }) = stack.top() {
        // A sigil immediately before the closing quote is content.
        if cursor.lookahead() == Some(quote.terminator()) {
            return None;
        }
    }

    match cursor.lookahead() {
        Some('{') if valid.contains(ValidTokens::BRACED_INTERPOLATION_OPENING) => {
            cursor.advance();
            cursor.mark_end();
            if !stack.push(Context::BracedInterpolation) {
                tracing::debug!("context stack at capacity; interpolation marker dropped");
            }
            Some(ExternalToken::BracedInterpolationOpening)
        }
        // The unbraced form spans only the sigil; the grammar consumes the
        // identifier, and the region needs no stack tracking.
        Some(c) if c.is_alphabetic()
            && valid.contains(ValidTokens::UNBRACED_INTERPOLATION_OPENING) =>
        {
            cursor.mark_end();
            Some(ExternalToken::UnbracedInterpolationOpening)
        }
        _ => None,
    }
}

/// Scan an interpolation closing.
///
/// The top marker is popped before the check: a braced marker closes by
/// consuming the `}`, an unbraced marker closes zero-width, and anything
/// else declines with the pop already done (see DESIGN.md, decision 1).
pub(crate) fn scan_closing(
    stack: &mut ContextStack,
    cursor: &mut impl ScanCursor,
) -> Option<ExternalToken> {
    match stack.pop() {
        Some(Context::BracedInterpolation) if cursor.lookahead() == Some('}') => {
            cursor.advance();
            cursor.mark_end();
            Some(ExternalToken::InterpolationClosing)
        }
        Some(Context::UnbracedInterpolation) => {
            cursor.mark_end();
            Some(ExternalToken::InterpolationClosing)
        }
        _ => None,
    }
}
