//! External token kinds and the grammar's acceptance set.
//!
//! [`ExternalToken`] is the closed set of tokens the scanning engine can
//! emit. [`ValidTokens`] mirrors the per-kind booleans the grammar hands the
//! scanner on every call: one flag per kind, plus composite sets the
//! dispatcher tests as a group. The engine must never return a kind whose
//! flag is absent.

use bitflags::bitflags;

/// A token kind recognized by the context-sensitive scanner.
///
/// Discriminants are stable: they identify token kinds across the grammar
/// boundary and are pinned by test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExternalToken {
    /// Layout-driven statement separator (newline + indentation).
    AutomaticSeparator = 0,
    /// `${` opening a braced embedded expression inside a string.
    BracedInterpolationOpening = 1,
    /// `$` opening an unbraced single-identifier interpolation.
    UnbracedInterpolationOpening = 2,
    /// End of an interpolation region (`}`, or zero-width for the
    /// unbraced form).
    InterpolationClosing = 3,
    /// Opening quote of a plain string literal.
    StringOpening = 4,
    /// `r` prefix plus opening quote of a raw string literal.
    RawStringOpening = 5,
    /// `c` prefix plus opening quote of a tagged string literal.
    TaggedStringOpening = 6,
    /// A maximal run of literal string content.
    StringContent = 7,
    /// Closing quote of a string literal.
    StringClosing = 8,
    /// Line comment or nested block comment.
    Comment = 9,
}

bitflags! {
    /// The set of token kinds the grammar currently accepts.
    ///
    /// Built fresh by the host for every scan call. The dispatcher consults
    /// it both to gate routing decisions and to guarantee it never emits an
    /// unacceptable kind.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ValidTokens: u16 {
        // === One flag per token kind ===

        /// Accepts [`ExternalToken::AutomaticSeparator`].
        const AUTOMATIC_SEPARATOR = 1 << 0;
        /// Accepts [`ExternalToken::BracedInterpolationOpening`].
        const BRACED_INTERPOLATION_OPENING = 1 << 1;
        /// Accepts [`ExternalToken::UnbracedInterpolationOpening`].
        const UNBRACED_INTERPOLATION_OPENING = 1 << 2;
        /// Accepts [`ExternalToken::InterpolationClosing`].
        const INTERPOLATION_CLOSING = 1 << 3;
        /// Accepts [`ExternalToken::StringOpening`].
        const STRING_OPENING = 1 << 4;
        /// Accepts [`ExternalToken::RawStringOpening`].
        const RAW_STRING_OPENING = 1 << 5;
        /// Accepts [`ExternalToken::TaggedStringOpening`].
        const TAGGED_STRING_OPENING = 1 << 6;
        /// Accepts [`ExternalToken::StringContent`].
        const STRING_CONTENT = 1 << 7;
        /// Accepts [`ExternalToken::StringClosing`].
        const STRING_CLOSING = 1 << 8;
        /// Accepts [`ExternalToken::Comment`].
        const COMMENT = 1 << 9;

        // === Composite sets tested by the dispatcher ===

        /// Any string-opening kind (plain, raw, or tagged).
        const ANY_STRING_OPENING = Self::STRING_OPENING.bits()
            | Self::RAW_STRING_OPENING.bits()
            | Self::TAGGED_STRING_OPENING.bits();
        /// Either interpolation-opening kind.
        const ANY_INTERPOLATION_OPENING = Self::BRACED_INTERPOLATION_OPENING.bits()
            | Self::UNBRACED_INTERPOLATION_OPENING.bits();
        /// Everything recognizable inside an open string region.
        const STRING_INNER = Self::STRING_CLOSING.bits()
            | Self::STRING_CONTENT.bits()
            | Self::ANY_INTERPOLATION_OPENING.bits()
            | Self::INTERPOLATION_CLOSING.bits();
    }
}

impl ValidTokens {
    /// The single flag corresponding to a token kind.
    pub fn from_token(token: ExternalToken) -> Self {
        match token {
            ExternalToken::AutomaticSeparator => Self::AUTOMATIC_SEPARATOR,
            ExternalToken::BracedInterpolationOpening => Self::BRACED_INTERPOLATION_OPENING,
            ExternalToken::UnbracedInterpolationOpening => Self::UNBRACED_INTERPOLATION_OPENING,
            ExternalToken::InterpolationClosing => Self::INTERPOLATION_CLOSING,
            ExternalToken::StringOpening => Self::STRING_OPENING,
            ExternalToken::RawStringOpening => Self::RAW_STRING_OPENING,
            ExternalToken::TaggedStringOpening => Self::TAGGED_STRING_OPENING,
            ExternalToken::StringContent => Self::STRING_CONTENT,
            ExternalToken::StringClosing => Self::STRING_CLOSING,
            ExternalToken::Comment => Self::COMMENT,
        }
    }

    /// Returns `true` if the given token kind is acceptable.
    pub fn accepts(self, token: ExternalToken) -> bool {
        self.contains(Self::from_token(token))
    }
}
