// SPDX-License-Identifier: MPL-2.0
//! Touch gesture recognition.

mod swipe;

pub use swipe::SwipeTracker;
