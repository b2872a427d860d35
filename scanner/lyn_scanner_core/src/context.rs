//! Context markers for open string and interpolation scopes.
//!
//! A marker records one nested lexical context the scanner is currently
//! inside: a string literal (kind x quote) or an interpolation region. The
//! marker on top of the [`ContextStack`](crate::ContextStack) is the
//! innermost open scope and decides how the next character is read — a
//! newline inside a string is content, not a separator; a `/` inside a
//! string never opens a comment.
//!
//! Markers encode to single bytes for session serialization. The encoding is
//! an explicit table, not arithmetic over discriminants, so adding a variant
//! cannot silently shift the persisted format.

/// The character that introduces an embedded expression inside a string.
pub const INTERPOLATION_SIGIL: char = '$';

/// One-letter prefix opening a raw string literal (no escapes, no
/// interpolation).
pub const RAW_PREFIX: char = 'r';

/// One-letter prefix opening a tagged string literal.
pub const TAGGED_PREFIX: char = 'c';

/// String literal flavor, selected by the optional one-letter prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringKind {
    /// No prefix: escapes and interpolation are processed.
    Plain,
    /// `r` prefix: backslash and the sigil are ordinary content.
    Raw,
    /// `c` prefix: escapes and interpolation are processed.
    Tagged,
}

/// Quote style of a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// `'`-delimited.
    Single,
    /// `"`-delimited.
    Double,
}

impl QuoteKind {
    /// The quote character that terminates this style.
    pub fn terminator(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// One open lexical scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Context {
    /// Inside a string literal.
    String {
        /// Literal flavor from the opening prefix.
        kind: StringKind,
        /// Quote style the literal was opened with.
        quote: QuoteKind,
    },
    /// Inside a `${ ... }` embedded expression.
    BracedInterpolation,
    /// Inside a `$identifier` interpolation. Never pushed by the opening
    /// scanner (the region is lexically scoped to one identifier); present
    /// so deserialized sessions can restore it.
    UnbracedInterpolation,
}

impl Context {
    /// Returns `true` for string markers of any kind.
    pub fn is_string(self) -> bool {
        matches!(self, Self::String { .. })
    }

    /// Returns `true` for either interpolation marker.
    pub fn is_interpolation(self) -> bool {
        matches!(self, Self::BracedInterpolation | Self::UnbracedInterpolation)
    }

    /// The character expected to close this scope.
    ///
    /// `None` for [`Context::UnbracedInterpolation`], whose end is implied by
    /// grammar context rather than a terminator character.
    pub fn terminator(self) -> Option<char> {
        match self {
            Self::String { quote, .. } => Some(quote.terminator()),
            Self::BracedInterpolation => Some('}'),
            Self::UnbracedInterpolation => None,
        }
    }

    /// Serialized byte for this marker.
    pub fn encode(self) -> u8 {
        match self {
            Self::String { kind: StringKind::Plain, quote: QuoteKind::Single } => 0,
            Self::String { kind: StringKind::Plain, quote: QuoteKind::Double } => 1,
            Self::String { kind: StringKind::Raw, quote: QuoteKind::Single } => 2,
            Self::String { kind: StringKind::Raw, quote: QuoteKind::Double } => 3,
            Self::String { kind: StringKind::Tagged, quote: QuoteKind::Single } => 4,
            Self::String { kind: StringKind::Tagged, quote: QuoteKind::Double } => 5,
            Self::BracedInterpolation => 6,
            Self::UnbracedInterpolation => 7,
        }
    }

    /// Decode a serialized marker byte. `None` for bytes outside the table.
    pub fn decode(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::String { kind: StringKind::Plain, quote: QuoteKind::Single }),
            1 => Some(Self::String { kind: StringKind::Plain, quote: QuoteKind::Double }),
            2 => Some(Self::String { kind: StringKind::Raw, quote: QuoteKind::Single }),
            3 => Some(Self::String { kind: StringKind::Raw, quote: QuoteKind::Double }),
            4 => Some(Self::String { kind: StringKind::Tagged, quote: QuoteKind::Single }),
            5 => Some(Self::String { kind: StringKind::Tagged, quote: QuoteKind::Double }),
            6 => Some(Self::BracedInterpolation),
            7 => Some(Self::UnbracedInterpolation),
            _ => None,
        }
    }
}
