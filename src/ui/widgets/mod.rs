// SPDX-License-Identifier: MPL-2.0
pub mod swipe_area;

pub use swipe_area::{swipe_area, Gesture, SwipeArea};
