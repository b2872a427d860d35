//! Bounded stack of open lexical contexts, with a self-describing byte codec.
//!
//! The stack is the scanner's entire persistent state: one marker per open
//! scope, innermost on top, at most [`MAX_DEPTH`] deep. A push past capacity
//! drops the new marker and leaves the stack unchanged — saturation is the
//! defined overflow behavior, surfaced to callers through `push`'s return
//! value so tests can observe it.
//!
//! # Serialized layout
//!
//! ```text
//! [ top, capacity, marker_0, ..., marker_top ]
//!   ^     ^        ^
//!   |     |        exactly top + 1 marker bytes, bottom first
//!   |     always MAX_DEPTH (validated on restore)
//!   top index as i8: -1 = empty
//! ```
//!
//! Zero input bytes deserialize to a fresh empty stack. The encoding is
//! length-prefixed and self-describing so a suspended session can be
//! reconstructed without external context.

use smallvec::SmallVec;

use crate::context::Context;

/// Maximum number of simultaneously open contexts.
pub const MAX_DEPTH: usize = 10;

/// Largest possible serialized size: header plus a full stack.
pub const SERIALIZED_MAX: usize = MAX_DEPTH + 2;

/// Why a serialized stack could not be restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Input length does not match the depth the header declares.
    #[error("serialized stack is {found} bytes, expected {expected}")]
    Truncated {
        /// Byte count the header requires.
        expected: usize,
        /// Byte count actually supplied.
        found: usize,
    },
    /// The capacity byte disagrees with [`MAX_DEPTH`].
    #[error("serialized capacity {found} is not supported")]
    CapacityMismatch {
        /// Capacity byte found in the input.
        found: u8,
    },
    /// The top-index byte is outside `-1..=MAX_DEPTH - 1`.
    #[error("serialized top index {found} is out of range")]
    DepthOutOfRange {
        /// Top-index byte found in the input, as signed.
        found: i8,
    },
    /// A content byte is not a known marker encoding.
    #[error("unknown context marker byte {byte:#04x} at index {index}")]
    UnknownMarker {
        /// The unrecognized byte.
        byte: u8,
        /// Its position among the content bytes.
        index: usize,
    },
}

/// Ordered, bounded history of open scopes. Top is innermost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextStack {
    markers: SmallVec<[Context; MAX_DEPTH]>,
}

impl ContextStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a marker for a newly opened scope.
    ///
    /// Returns `false` when the stack is already at [`MAX_DEPTH`]: the
    /// marker is dropped and depth stays at capacity.
    pub fn push(&mut self, marker: Context) -> bool {
        if self.markers.len() == MAX_DEPTH {
            return false;
        }
        self.markers.push(marker);
        true
    }

    /// Pop the innermost marker. `None` on an empty stack — never an error.
    pub fn pop(&mut self) -> Option<Context> {
        self.markers.pop()
    }

    /// Peek at the innermost marker without removing it.
    pub fn top(&self) -> Option<Context> {
        self.markers.last().copied()
    }

    /// Returns `true` when no scope is open (top-level code).
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns `true` when a push would saturate.
    pub fn is_full(&self) -> bool {
        self.markers.len() == MAX_DEPTH
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Drop all markers, returning to the fresh-session state.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Write the serialized stack into `buf`, returning the byte count.
    ///
    /// `buf` must hold at least `depth() + 2` bytes; [`SERIALIZED_MAX`] is
    /// always sufficient.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "depth is bounded by MAX_DEPTH = 10"
    )]
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        let needed = self.markers.len() + 2;
        assert!(
            buf.len() >= needed,
            "serialization buffer too small: {} < {needed}",
            buf.len()
        );
        buf[0] = (self.markers.len() as i8 - 1) as u8;
        buf[1] = MAX_DEPTH as u8;
        for (i, marker) in self.markers.iter().enumerate() {
            buf[2 + i] = marker.encode();
        }
        needed
    }

    /// Reconstruct a stack from its serialized bytes.
    ///
    /// Zero input bytes are defined as a fresh empty stack. Anything else
    /// must be a complete, well-formed encoding.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "top index round-trips through i8 by design; MAX_DEPTH fits in i8"
    )]
    pub fn deserialize(bytes: &[u8]) -> Result<Self, StateError> {
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        if bytes.len() < 2 {
            return Err(StateError::Truncated {
                expected: 2,
                found: bytes.len(),
            });
        }
        let top = bytes[0] as i8;
        if bytes[1] as usize != MAX_DEPTH {
            return Err(StateError::CapacityMismatch { found: bytes[1] });
        }
        if !(-1..=(MAX_DEPTH as i8 - 1)).contains(&top) {
            return Err(StateError::DepthOutOfRange { found: top });
        }
        let depth = (top + 1) as usize;
        if bytes.len() != depth + 2 {
            return Err(StateError::Truncated {
                expected: depth + 2,
                found: bytes.len(),
            });
        }
        let mut stack = Self::new();
        for (index, &byte) in bytes[2..].iter().enumerate() {
            let marker =
                Context::decode(byte).ok_or(StateError::UnknownMarker { byte, index })?;
            stack.markers.push(marker);
        }
        Ok(stack)
    }
}
