// SPDX-License-Identifier: MPL-2.0
//! Ordered focus targets with a wrapping cursor.

use crate::domain::navigation::{self, Direction};

/// An ordered list of focusable targets and the one currently focused.
///
/// A ring with no focused member represents "the container itself has
/// focus"; the first `advance` then lands on the first or last target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing<T> {
    targets: Vec<T>,
    position: Option<usize>,
}

impl<T: Copy + Eq> FocusRing<T> {
    #[must_use]
    pub fn new(targets: Vec<T>) -> Self {
        Self {
            targets,
            position: None,
        }
    }

    /// Replaces the targets, keeping focus if the focused target survives.
    pub fn set_targets(&mut self, targets: Vec<T>) {
        let focused = self.focused();
        self.targets = targets;
        self.position = focused.and_then(|target| self.index_of(target));
    }

    #[must_use]
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.targets.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.targets.last().copied()
    }

    #[must_use]
    pub fn focused(&self) -> Option<T> {
        self.position.and_then(|i| self.targets.get(i).copied())
    }

    #[must_use]
    pub fn contains(&self, target: T) -> bool {
        self.index_of(target).is_some()
    }

    /// Focuses `target` if it is a member. Returns false otherwise.
    pub fn focus(&mut self, target: T) -> bool {
        match self.index_of(target) {
            Some(index) => {
                self.position = Some(index);
                true
            }
            None => false,
        }
    }

    /// Moves focus back to the container.
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// True when focus sits on the member an `advance` in `direction` would
    /// wrap away from.
    #[must_use]
    pub fn is_at_edge(&self, direction: Direction) -> bool {
        let Some(position) = self.position else {
            return false;
        };
        match direction {
            Direction::Next => position + 1 == self.targets.len(),
            Direction::Previous => position == 0,
        }
    }

    /// Moves focus one step in `direction`, wrapping at both ends.
    ///
    /// From the container, `Next` lands on the first target and `Previous`
    /// on the last. Returns the newly focused target, or `None` when the
    /// ring is empty.
    pub fn advance(&mut self, direction: Direction) -> Option<T> {
        if self.targets.is_empty() {
            return None;
        }
        let len = self.targets.len();
        let next = match (self.position, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(position), direction) => navigation::step(position, len, direction),
        };
        self.position = Some(next);
        self.targets.get(next).copied()
    }

    fn index_of(&self, target: T) -> Option<usize> {
        self.targets.iter().position(|t| *t == target)
    }
}

impl<T> Default for FocusRing<T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Control {
        Close,
        Prev,
        Next,
    }

    fn ring() -> FocusRing<Control> {
        FocusRing::new(vec![Control::Close, Control::Prev, Control::Next])
    }

    #[test]
    fn advance_from_container_enters_at_ends() {
        let mut forward = ring();
        assert_eq!(forward.advance(Direction::Next), Some(Control::Close));

        let mut backward = ring();
        assert_eq!(backward.advance(Direction::Previous), Some(Control::Next));
    }

    #[test]
    fn advance_wraps() {
        let mut r = ring();
        r.focus(Control::Next);
        assert_eq!(r.advance(Direction::Next), Some(Control::Close));
        assert_eq!(r.advance(Direction::Previous), Some(Control::Next));
    }

    #[test]
    fn focus_rejects_non_members() {
        let mut r = FocusRing::new(vec![Control::Close]);
        assert!(!r.focus(Control::Next));
        assert_eq!(r.focused(), None);
        assert!(r.focus(Control::Close));
        assert_eq!(r.focused(), Some(Control::Close));
    }

    #[test]
    fn empty_ring_never_focuses() {
        let mut r: FocusRing<Control> = FocusRing::default();
        assert_eq!(r.advance(Direction::Next), None);
        assert_eq!(r.focused(), None);
        assert!(!r.is_at_edge(Direction::Next));
    }

    #[test]
    fn edges_are_detected() {
        let mut r = ring();
        assert!(!r.is_at_edge(Direction::Previous));
        r.focus(Control::Close);
        assert!(r.is_at_edge(Direction::Previous));
        assert!(!r.is_at_edge(Direction::Next));
        r.focus(Control::Next);
        assert!(r.is_at_edge(Direction::Next));
    }

    #[test]
    fn set_targets_keeps_surviving_focus() {
        let mut r = ring();
        r.focus(Control::Prev);
        r.set_targets(vec![Control::Prev, Control::Close]);
        assert_eq!(r.focused(), Some(Control::Prev));

        r.set_targets(vec![Control::Close]);
        assert_eq!(r.focused(), None);
    }

    #[test]
    fn clear_returns_focus_to_container() {
        let mut r = ring();
        r.focus(Control::Prev);
        r.clear();
        assert_eq!(r.focused(), None);
        assert_eq!(r.advance(Direction::Next), Some(Control::Close));
    }
}
