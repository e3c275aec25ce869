// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection.

use crate::domain::navigation::Direction;
use crate::domain::ui::newtypes::SwipeThreshold;

/// Tracks one horizontal touch gesture.
///
/// Only the x coordinate matters. The tracker is reset after every
/// `finish` or `cancel`, whatever the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    last_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture at `x`, discarding any gesture in progress.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    /// Records the latest finger position. Ignored when no gesture started.
    pub fn track(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Ends the gesture and classifies it.
    ///
    /// `end_x` overrides the last tracked position when the platform reports
    /// one on lift. Travel to the left beyond the threshold means
    /// [`Direction::Next`]; to the right means [`Direction::Previous`].
    pub fn finish(&mut self, end_x: Option<f32>, threshold: SwipeThreshold) -> Option<Direction> {
        let start = self.start_x.take();
        let last = self.last_x.take();
        let start = start?;
        let end = end_x.or(last)?;

        let distance = start - end;
        if distance > threshold.value() {
            Some(Direction::Next)
        } else if distance < -threshold.value() {
            Some(Direction::Previous)
        } else {
            None
        }
    }

    /// Abandons the gesture (finger lost, overlay closed).
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f32, to: f32) -> Option<Direction> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(from);
        tracker.track(to);
        tracker.finish(None, SwipeThreshold::default())
    }

    #[test]
    fn left_swipe_is_next() {
        assert_eq!(swipe(300.0, 200.0), Some(Direction::Next));
    }

    #[test]
    fn right_swipe_is_previous() {
        assert_eq!(swipe(200.0, 300.0), Some(Direction::Previous));
    }

    #[test]
    fn short_travel_is_ignored() {
        assert_eq!(swipe(300.0, 280.0), None);
    }

    #[test]
    fn exactly_threshold_is_ignored() {
        assert_eq!(swipe(300.0, 250.0), None);
        assert_eq!(swipe(250.0, 300.0), None);
    }

    #[test]
    fn finish_position_overrides_last_tracked() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(290.0);
        let outcome = tracker.finish(Some(100.0), SwipeThreshold::default());
        assert_eq!(outcome, Some(Direction::Next));
    }

    #[test]
    fn tracker_resets_after_each_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(295.0);
        assert_eq!(tracker.finish(None, SwipeThreshold::default()), None);
        assert!(!tracker.is_tracking());

        // a stray move without a begin must not produce a swipe
        tracker.track(0.0);
        assert_eq!(tracker.finish(None, SwipeThreshold::default()), None);
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(100.0);
        tracker.cancel();
        assert_eq!(tracker.finish(None, SwipeThreshold::default()), None);
    }

    #[test]
    fn threshold_is_respected() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(200.0);
        assert_eq!(tracker.finish(None, SwipeThreshold::new(150.0)), None);
    }
}
