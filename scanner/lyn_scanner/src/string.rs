//! String literal scanning: opening, content runs, closing.
//!
//! An opening is an optional one-letter prefix (`r` raw, `c` tagged)
//! followed by a single or double quote; it pushes the composed marker so
//! every later call knows which terminator and escape rules apply. Content
//! is a maximal run of ordinary characters; the scanners for escapes,
//! interpolation, and the closing quote claim the positions a content run
//! stops at. Closing pops the marker first and validates after — a
//! mismatched closing leaves the stack popped rather than failing loudly.

use lyn_scanner_core::{
    Context, ContextStack, ExternalToken, QuoteKind, ScanCursor, StringKind, ValidTokens,
    INTERPOLATION_SIGIL, RAW_PREFIX, TAGGED_PREFIX,
};

/// Scan a string opening: `['r' | 'c'] ('\'' | '"')`.
///
/// A prefix letter is only consumed when the host accepts that specific
/// prefixed-opening kind; otherwise it is left for the grammar's identifier
/// rules. Declines when no quote follows.
pub(crate) fn scan_opening(
    stack: &mut ContextStack,
    cursor: &mut impl ScanCursor,
    valid: ValidTokens,
) -> Option<ExternalToken> {
    let mut kind = StringKind::Plain;
    let mut token = ExternalToken::StringOpening;
    match cursor.lookahead() {
        Some(RAW_PREFIX) if valid.contains(ValidTokens::RAW_STRING_OPENING) => {
            kind = StringKind::Raw;
            token = ExternalToken::RawStringOpening;
            cursor.advance();
        }
        Some(TAGGED_PREFIX) if valid.contains(ValidTokens::TAGGED_STRING_OPENING) => {
            kind = StringKind::Tagged;
            token = ExternalToken::TaggedStringOpening;
            cursor.advance();
        }
        _ => {}
    }

    let quote = match cursor.lookahead() {
        Some('\'') => QuoteKind::Single,
        Some('"') => QuoteKind::Double,
        _ => return None,
    };
    if kind == StringKind::Plain && !valid.contains(ValidTokens::STRING_OPENING) {
        return None;
    }

    cursor.advance();
    cursor.mark_end();
    let marker = Context::String { kind, quote };
    if !stack.push(marker) {
        tracing::debug!(?marker, "context stack at capacity; marker dropped");
    }
    Some(token)
}

/// Scan a maximal run of literal string content.
///
/// Stops at end of input, the current marker's terminating quote, and — for
/// non-raw strings — a backslash or the interpolation sigil. Declines on an
/// empty run so the opening/closing/interpolation scanners can claim the
/// position instead.
pub(crate) fn scan_content(
    stack: &ContextStack,
    cursor: &mut impl ScanCursor,
) -> Option<ExternalToken> {
    let Some(Context::String { kind, quote }) = stack.top() else {
        return None;
    };
    let terminator = quote.terminator();

    let mut scanned_any = false;
    while let Some(c) = cursor.lookahead() {
        if c == terminator {
            break;
        }
        if kind != StringKind::Raw && (c == '\\' || c == INTERPOLATION_SIGIL) {
            break;
        }
        cursor.advance();
        scanned_any = true;
    }

    if scanned_any {
        cursor.mark_end();
        Some(ExternalToken::StringContent)
    } else {
        None
    }
}

/// Scan a closing quote.
///
/// The top marker is popped before the terminator check: a mismatched
/// closing declines but leaves the stack popped, desynchronizing later
/// scans instead of erroring (see DESIGN.md, decision 1).
pub(crate) fn scan_closing(
    stack: &mut ContextStack,
    cursor: &mut impl ScanCursor,
) -> Option<ExternalToken> {
    let popped = stack.pop();
    let Some(Context::String { quote, .. }) = popped else {
        return None;
    };
    if cursor.lookahead() == Some(quote.terminator()) {
        cursor.advance();
        cursor.mark_end();
        Some(ExternalToken::StringClosing)
    } else {
        None
    }
}
