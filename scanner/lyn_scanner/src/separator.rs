//! Automatic statement separator detection.
//!
//! Lyn terminates logical statements by layout instead of semicolons. A
//! newline ends the current statement unless the next line is indented more
//! than one extra tab (a continuation), and that default is then overridden
//! by the first significant character after the whitespace run: some
//! characters can only begin a statement, others can only continue one.
//!
//! The whitespace run is counted into the token and the end boundary marked
//! before any follower is probed, so the emitted separator spans exactly the
//! run and probe characters are re-read by later scans.

use lyn_scanner_core::{ExternalToken, ScanCursor};

/// Scan a layout run and decide whether it separates statements.
///
/// Only called with a `\r`, `\n`, or `\t` under the cursor and the separator
/// kind acceptable.
pub(crate) fn scan(cursor: &mut impl ScanCursor) -> Option<ExternalToken> {
    let mut saw_newline = false;
    let mut tab_count = 0u32;
    let mut had_whitespace = false;

    while let Some(c) = cursor.lookahead() {
        match c {
            '\n' => saw_newline = true,
            '\t' => tab_count += 1,
            '\r' => {}
            _ => break,
        }
        had_whitespace = true;
        cursor.advance();
    }
    cursor.mark_end();

    // More than one tab of extra indentation marks a continuation line.
    let mut needs_separator = tab_count <= 1;

    if had_whitespace {
        needs_separator = follower_override(cursor, needs_separator);
    }

    if saw_newline && needs_separator {
        tracing::trace!(tab_count, "automatic separator");
        Some(ExternalToken::AutomaticSeparator)
    } else {
        None
    }
}

/// Inspect the character after the whitespace run and override the
/// tab-count default where the follower is unambiguous.
///
/// Everything consumed here is probe lookahead past the marked end and is
/// never part of the separator token.
fn follower_override(cursor: &mut impl ScanCursor, default: bool) -> bool {
    match cursor.lookahead() {
        // `||` / `&&` continue a logical expression; a lone `|` or `&`
        // followed by an identifier begins a statement.
        Some(sym @ ('|' | '&')) => {
            cursor.advance();
            match cursor.lookahead() {
                Some(next) if next == sym || !next.is_alphabetic() => false,
                None => false,
                Some(_) => true,
            }
        }
        // These begin statements, never continuations.
        Some('*' | '_' | '\'' | '"') => true,
        // A comment begins a new statement; a bare `/` continues a division.
        Some('/') => {
            cursor.advance();
            matches!(cursor.lookahead(), Some('/' | '*'))
        }
        Some(c) if c.is_alphabetic() => true,
        _ => default,
    }
}
