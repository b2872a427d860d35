//! Standalone primitives for the Lyn context-sensitive scanner.
//!
//! Lyn's grammar recognizes most tokens by pattern alone, but three classes
//! need stateful, order-dependent scanning: layout-driven statement
//! separators, string literals with nested `$` interpolation, and nested
//! block comments. This crate holds the data structures those scanners share:
//!
//! - [`ExternalToken`] / [`ValidTokens`] — the closed set of token kinds the
//!   scanning engine can emit, and the grammar's bit-set of currently
//!   acceptable kinds.
//! - [`Context`] / [`ContextStack`] — tagged markers for the lexical scopes
//!   currently open (string kind x quote kind, interpolation kind) and the
//!   bounded stack tracking them. The stack is the scanner's entire
//!   persistent state and serializes to a self-describing byte sequence so a
//!   session can be suspended between incremental edits and resumed later.
//! - [`ScanCursor`] / [`SourceCursor`] — the character-cursor seam the host
//!   lexer provides, plus an in-memory implementation over `&str`.
//!
//! The scanning engine itself lives in `lyn_scanner`; this crate has no
//! `lyn_*` dependencies so external tools (highlighter, playground) can use
//! the state types directly.

mod context;
mod cursor;
mod stack;
mod token;

pub use context::{
    Context, QuoteKind, StringKind, INTERPOLATION_SIGIL, RAW_PREFIX, TAGGED_PREFIX,
};
pub use cursor::{ScanCursor, SourceCursor};
pub use stack::{ContextStack, StateError, MAX_DEPTH, SERIALIZED_MAX};
pub use token::{ExternalToken, ValidTokens};
