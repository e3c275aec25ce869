// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.

/// Event buffer capacity bounds.
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 100;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 1000;
}

/// Number of events retained by the diagnostics buffer, within 100–10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Bound for the channel feeding the buffer.
    ///
    /// Events are drained every frame, so a quarter of the buffer is plenty.
    #[must_use]
    pub fn channel_bound(self) -> usize {
        self.0 / 4
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(BufferCapacity::new(2500).value(), 2500);
    }

    #[test]
    fn default_is_one_thousand() {
        assert_eq!(BufferCapacity::default().value(), 1000);
    }

    #[test]
    fn channel_bound_is_never_zero() {
        assert!(BufferCapacity::new(0).channel_bound() > 0);
        assert_eq!(BufferCapacity::default().channel_bound(), 250);
    }
}
