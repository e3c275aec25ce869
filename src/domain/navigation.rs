// SPDX-License-Identifier: MPL-2.0
//! Wrap-around index arithmetic.
//!
//! Gallery images, carousel slides, and focus rings all cycle through a
//! fixed-length sequence. These helpers keep the wrap rules in one place.

/// Direction of a step through a cyclic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step forward (towards higher indices).
    Next,
    /// Step backward (towards lower indices).
    Previous,
}

/// Returns the index after `index`, wrapping to 0 past the end.
///
/// An empty sequence always yields 0.
#[must_use]
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Returns the index before `index`, wrapping to `len - 1` at 0.
///
/// An empty sequence always yields 0.
#[must_use]
pub fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

/// Steps `index` once in `direction`.
#[must_use]
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => wrap_next(index, len),
        Direction::Previous => wrap_previous(index, len),
    }
}
