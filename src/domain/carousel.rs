// SPDX-License-Identifier: MPL-2.0
//! Auto-advancing slide rotation for the testimonials section.
//!
//! Time is passed in explicitly so the rotation rules can be tested
//! without a clock.

use crate::domain::navigation::{self, Direction};
use crate::domain::ui::newtypes::AutoAdvanceInterval;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current: usize,
    interval: AutoAdvanceInterval,
    last_advance: Instant,
    auto_advance: bool,
}

impl Carousel {
    /// Creates a carousel over `len` slides starting at the first one.
    ///
    /// Auto-advance is off when `reduced_motion` is set.
    #[must_use]
    pub fn new(len: usize, interval: AutoAdvanceInterval, reduced_motion: bool, now: Instant) -> Self {
        Self {
            len,
            current: 0,
            interval,
            last_advance: now,
            auto_advance: !reduced_motion,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn interval(&self) -> AutoAdvanceInterval {
        self.interval
    }

    /// True when the carousel should be ticked at all.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance && self.len > 1
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.step(Direction::Next, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        self.step(Direction::Previous, now)
    }

    /// Shows slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        self.last_advance = now;
        true
    }

    /// Advances once if the interval has elapsed since the last change.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_auto_advancing() {
            return false;
        }
        if now.saturating_duration_since(self.last_advance) < self.interval.as_duration() {
            return false;
        }
        self.step(Direction::Next, now)
    }

    fn step(&mut self, direction: Direction, now: Instant) -> bool {
        if self.len <= 1 {
            return false;
        }
        self.current = navigation::step(self.current, self.len, direction);
        self.last_advance = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn carousel(len: usize, reduced_motion: bool) -> (Carousel, Instant) {
        let now = Instant::now();
        (
            Carousel::new(len, AutoAdvanceInterval::default(), reduced_motion, now),
            now,
        )
    }

    #[test]
    fn next_and_previous_wrap() {
        let (mut c, now) = carousel(3, false);
        assert!(c.previous(now));
        assert_eq!(c.current(), 2);
        assert!(c.next(now));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let (mut c, now) = carousel(3, false);
        assert!(c.go_to(2, now));
        assert!(!c.go_to(3, now));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn tick_waits_for_interval() {
        let (mut c, start) = carousel(3, false);
        assert!(!c.tick(start + Duration::from_secs(4)));
        assert!(c.tick(start + Duration::from_secs(5)));
        assert_eq!(c.current(), 1);
        // timer restarted by the advance
        assert!(!c.tick(start + Duration::from_secs(9)));
        assert!(c.tick(start + Duration::from_secs(10)));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn manual_navigation_resets_timer() {
        let (mut c, start) = carousel(3, false);
        c.next(start + Duration::from_secs(4));
        assert!(!c.tick(start + Duration::from_secs(6)));
        assert!(c.tick(start + Duration::from_secs(9)));
    }

    #[test]
    fn reduced_motion_never_auto_advances() {
        let (mut c, start) = carousel(3, true);
        assert!(!c.is_auto_advancing());
        assert!(!c.tick(start + Duration::from_secs(3600)));
        assert_eq!(c.current(), 0);
        // manual navigation still works
        assert!(c.next(start));
    }

    #[test]
    fn single_slide_does_not_rotate() {
        let (mut c, start) = carousel(1, false);
        assert!(!c.is_auto_advancing());
        assert!(!c.next(start));
        assert!(!c.tick(start + Duration::from_secs(60)));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let (mut c, start) = carousel(0, false);
        assert!(c.is_empty());
        assert!(!c.next(start));
        assert!(!c.go_to(0, start));
    }
}
