// SPDX-License-Identifier: MPL-2.0
//! Focus containment for overlays.
//!
//! A [`FocusTrap`] is engaged when an overlay opens and consumed by
//! [`FocusTrap::release`] when it closes. The restore target captured at
//! engage time can only be taken out once.

use super::ring::FocusRing;
use crate::domain::navigation::Direction;

/// What Tab does when focus is on the last (or Shift+Tab on the first) target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBehavior {
    /// Wrap around to the opposite end. Focus never leaves the trap.
    Wrap,
    /// Report [`TabOutcome::Released`] so the owner can close.
    Release,
}

/// Result of a Tab keypress inside a trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome<T> {
    Moved(T),
    /// Tab crossed an edge of a [`EdgeBehavior::Release`] trap.
    Released,
    /// The trap has no targets; focus stays on the container.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct FocusTrap<T, R> {
    ring: FocusRing<T>,
    restore_to: Option<R>,
    edge: EdgeBehavior,
}

impl<T: Copy + Eq, R> FocusTrap<T, R> {
    /// Starts containing focus within `targets`.
    ///
    /// `restore_to` is whatever held focus before the overlay opened.
    /// Focus starts on the container, not on a target.
    #[must_use]
    pub fn engage(restore_to: Option<R>, targets: Vec<T>, edge: EdgeBehavior) -> Self {
        Self {
            ring: FocusRing::new(targets),
            restore_to,
            edge,
        }
    }

    /// Handles Tab (`shift == false`) or Shift+Tab.
    pub fn handle_tab(&mut self, shift: bool) -> TabOutcome<T> {
        let direction = if shift {
            Direction::Previous
        } else {
            Direction::Next
        };
        if self.edge == EdgeBehavior::Release && self.ring.is_at_edge(direction) {
            return TabOutcome::Released;
        }
        match self.ring.advance(direction) {
            Some(target) => TabOutcome::Moved(target),
            None => TabOutcome::Unchanged,
        }
    }

    /// Moves focus with wrap-around regardless of the edge behavior.
    ///
    /// Used for arrow-key traversal of menus.
    pub fn cycle(&mut self, direction: Direction) -> Option<T> {
        self.ring.advance(direction)
    }

    pub fn focus(&mut self, target: T) -> bool {
        self.ring.focus(target)
    }

    /// Returns focus to the overlay container.
    pub fn focus_container(&mut self) {
        self.ring.clear();
    }

    #[must_use]
    pub fn focused(&self) -> Option<T> {
        self.ring.focused()
    }

    #[must_use]
    pub fn targets(&self) -> &[T] {
        self.ring.targets()
    }

    /// Swaps the contained targets while keeping the restore target.
    pub fn set_targets(&mut self, targets: Vec<T>) {
        self.ring.set_targets(targets);
    }

    #[must_use]
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    #[must_use]
    pub fn restore_target(&self) -> Option<&R> {
        self.restore_to.as_ref()
    }

    /// Ends containment and hands back the captured restore target.
    #[must_use]
    pub fn release(self) -> Option<R> {
        self.restore_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Target {
        A,
        B,
        C,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct HostCard(usize);

    fn wrap_trap() -> FocusTrap<Target, HostCard> {
        FocusTrap::engage(
            Some(HostCard(2)),
            vec![Target::A, Target::B, Target::C],
            EdgeBehavior::Wrap,
        )
    }

    #[test]
    fn tab_from_container_goes_to_first() {
        let mut trap = wrap_trap();
        assert_eq!(trap.handle_tab(false), TabOutcome::Moved(Target::A));
    }

    #[test]
    fn shift_tab_from_container_goes_to_last() {
        let mut trap = wrap_trap();
        assert_eq!(trap.handle_tab(true), TabOutcome::Moved(Target::C));
    }

    #[test]
    fn tab_from_last_wraps_to_first() {
        let mut trap = wrap_trap();
        trap.focus(Target::C);
        assert_eq!(trap.handle_tab(false), TabOutcome::Moved(Target::A));
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let mut trap = wrap_trap();
        trap.focus(Target::A);
        assert_eq!(trap.handle_tab(true), TabOutcome::Moved(Target::C));
    }

    #[test]
    fn release_edge_reports_release() {
        let mut trap: FocusTrap<Target, HostCard> =
            FocusTrap::engage(None, vec![Target::A, Target::B], EdgeBehavior::Release);
        trap.focus(Target::B);
        assert_eq!(trap.handle_tab(false), TabOutcome::Released);
        trap.focus(Target::A);
        assert_eq!(trap.handle_tab(true), TabOutcome::Released);
        assert_eq!(trap.handle_tab(false), TabOutcome::Moved(Target::B));
    }

    #[test]
    fn cycle_wraps_even_with_release_edge() {
        let mut trap: FocusTrap<Target, HostCard> =
            FocusTrap::engage(None, vec![Target::A, Target::B], EdgeBehavior::Release);
        assert_eq!(trap.cycle(Direction::Next), Some(Target::A));
        assert_eq!(trap.cycle(Direction::Next), Some(Target::B));
        assert_eq!(trap.cycle(Direction::Next), Some(Target::A));
        assert_eq!(trap.cycle(Direction::Previous), Some(Target::B));
    }

    #[test]
    fn empty_trap_keeps_container_focus() {
        let mut trap: FocusTrap<Target, HostCard> =
            FocusTrap::engage(None, Vec::new(), EdgeBehavior::Wrap);
        assert_eq!(trap.handle_tab(false), TabOutcome::Unchanged);
        assert_eq!(trap.focused(), None);
    }

    #[test]
    fn release_returns_captured_target() {
        let mut trap = wrap_trap();
        trap.handle_tab(false);
        trap.set_targets(vec![Target::A]);
        assert_eq!(trap.restore_target(), Some(&HostCard(2)));
        assert_eq!(trap.release(), Some(HostCard(2)));
    }

    #[test]
    fn focus_container_resets_entry_point() {
        let mut trap = wrap_trap();
        trap.focus(Target::B);
        trap.focus_container();
        assert_eq!(trap.focused(), None);
        assert_eq!(trap.handle_tab(true), TabOutcome::Moved(Target::C));
    }
}
