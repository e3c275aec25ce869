// SPDX-License-Identifier: MPL-2.0
//! UI value objects, independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{AutoAdvanceInterval, FocusDelay, SwipeThreshold};
