// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking with axis-lock hysteresis.
//!
//! ## Usage
//!
//! 1) Call [`GestureTracker::down`] with the pointer position when a gesture starts.
//! 2) On each move, call [`GestureTracker::update`]; it returns how far the pointer
//!    has travelled along the pager's axis since the gesture started.
//! 3) Consult [`GestureTracker::suppresses_scroll`] before scrolling the pager.
//! 4) End the gesture with [`GestureTracker::up`].
//!
//! While the pointer stays within [`AXIS_LOCK_THRESHOLD`] of its start position
//! the lock is provisional and follows the dominant direction of travel. Once
//! the threshold is crossed the lock is fixed for the rest of the gesture.
//!
//! ```
//! use kurbo::Point;
//! use understory_pager::{AxisLock, GestureTracker, PagerAxis};
//!
//! let mut gesture = GestureTracker::default();
//! gesture.down(Point::new(100.0, 100.0));
//!
//! // Mostly vertical travel on a horizontal pager locks to the secondary axis.
//! gesture.update(Point::new(104.0, 130.0), PagerAxis::Horizontal);
//! assert_eq!(gesture.lock(), AxisLock::Secondary);
//! assert!(gesture.suppresses_scroll());
//!
//! // The lock holds even if the gesture turns horizontal later.
//! gesture.update(Point::new(200.0, 130.0), PagerAxis::Horizontal);
//! assert_eq!(gesture.lock(), AxisLock::Secondary);
//! ```

use kurbo::Point;

use crate::options::PagerAxis;

/// Travel in pixels (along either axis) after which the axis lock is fixed.
pub const AXIS_LOCK_THRESHOLD: f64 = 10.0;

/// Which axis a gesture has been attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisLock {
    /// No movement seen yet.
    #[default]
    None,
    /// Movement along the pager's own axis; the pager follows the pointer.
    Primary,
    /// Movement across the pager's axis; the pager ignores the gesture.
    Secondary,
}

/// Tracks one pointer gesture from down to up.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    start_pos: Option<Point>,
    lock: AxisLock,
    lock_fixed: bool,
}

impl GestureTracker {
    /// Starts tracking a gesture at `pos`, discarding any previous one.
    pub fn down(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.lock = AxisLock::None;
        self.lock_fixed = false;
    }

    /// Updates the axis lock for a move to `pos` and returns the travel from
    /// the start position to `pos` along `axis`, measured start minus current.
    ///
    /// Returns `None` if no gesture is active.
    pub fn update(&mut self, pos: Point, axis: PagerAxis) -> Option<f64> {
        let start = self.start_pos?;
        let delta = pos - start;
        if !self.lock_fixed {
            let primary = libm::fabs(axis.primary(delta));
            let secondary = libm::fabs(axis.secondary(delta));
            self.lock = if primary >= secondary {
                AxisLock::Primary
            } else {
                AxisLock::Secondary
            };
            self.lock_fixed = primary > AXIS_LOCK_THRESHOLD || secondary > AXIS_LOCK_THRESHOLD;
        }
        Some(-axis.primary(delta))
    }

    /// Ends the gesture and resets all state.
    ///
    /// Returns `true` if a gesture was active.
    pub fn up(&mut self) -> bool {
        let was_down = self.is_down();
        *self = Self::default();
        was_down
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Position the active gesture started at.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.start_pos
    }

    /// Current axis lock.
    #[must_use]
    pub fn lock(&self) -> AxisLock {
        self.lock
    }

    /// Returns `true` once the lock can no longer change for this gesture.
    #[must_use]
    pub fn is_lock_fixed(&self) -> bool {
        self.lock_fixed
    }

    /// Returns `true` if the gesture runs across the pager's axis, in which
    /// case scrolling the pager must be suppressed.
    #[must_use]
    pub fn suppresses_scroll(&self) -> bool {
        self.lock == AxisLock::Secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle() {
        let gesture = GestureTracker::default();
        assert!(!gesture.is_down());
        assert_eq!(gesture.lock(), AxisLock::None);
        assert!(!gesture.suppresses_scroll());
    }

    #[test]
    fn update_without_down_is_ignored() {
        let mut gesture = GestureTracker::default();
        assert_eq!(gesture.update(Point::new(50.0, 0.0), PagerAxis::Horizontal), None);
        assert_eq!(gesture.lock(), AxisLock::None);
    }

    #[test]
    fn travel_is_start_minus_current_along_axis() {
        let mut gesture = GestureTracker::default();
        gesture.down(Point::new(500.0, 300.0));
        assert_eq!(
            gesture.update(Point::new(350.0, 302.0), PagerAxis::Horizontal),
            Some(150.0)
        );

        gesture.down(Point::new(500.0, 300.0));
        assert_eq!(
            gesture.update(Point::new(501.0, 340.0), PagerAxis::Vertical),
            Some(-40.0)
        );
    }

    #[test]
    fn lock_is_provisional_below_threshold() {
        let mut gesture = GestureTracker::default();
        gesture.down(Point::ZERO);

        gesture.update(Point::new(2.0, 5.0), PagerAxis::Horizontal);
        assert_eq!(gesture.lock(), AxisLock::Secondary);
        assert!(!gesture.is_lock_fixed());

        gesture.update(Point::new(8.0, 5.0), PagerAxis::Horizontal);
        assert_eq!(gesture.lock(), AxisLock::Primary);
        assert!(!gesture.is_lock_fixed());
    }

    #[test]
    fn lock_is_fixed_after_threshold() {
        let mut gesture = GestureTracker::default();
        gesture.down(Point::ZERO);

        gesture.update(Point::new(12.0, 3.0), PagerAxis::Horizontal);
        assert_eq!(gesture.lock(), AxisLock::Primary);
        assert!(gesture.is_lock_fixed());

        gesture.update(Point::new(12.0, 80.0), PagerAxis::Horizontal);
        assert_eq!(gesture.lock(), AxisLock::Primary);
        assert!(!gesture.suppresses_scroll());
    }

    #[test]
    fn ties_lock_to_primary_axis() {
        let mut gesture = GestureTracker::default();
        gesture.down(Point::ZERO);
        gesture.update(Point::new(20.0, 20.0), PagerAxis::Vertical);
        assert_eq!(gesture.lock(), AxisLock::Primary);
    }

    #[test]
    fn up_resets_everything() {
        let mut gesture = GestureTracker::default();
        gesture.down(Point::new(1.0, 1.0));
        gesture.update(Point::new(1.0, 40.0), PagerAxis::Horizontal);
        assert!(gesture.up(), "gesture was active");

        assert!(!gesture.is_down());
        assert_eq!(gesture.start_pos(), None);
        assert_eq!(gesture.lock(), AxisLock::None);
        assert!(!gesture.is_lock_fixed());
        assert!(!gesture.up(), "second up has nothing to end");
    }

    #[test]
    fn down_restarts_lock_decision() {
        let mut gesture = GestureTracker::default();
        gesture.down(Point::ZERO);
        gesture.update(Point::new(0.0, 30.0), PagerAxis::Horizontal);
        assert!(gesture.suppresses_scroll());

        gesture.down(Point::new(5.0, 5.0));
        assert_eq!(gesture.lock(), AxisLock::None);
        assert!(!gesture.is_lock_fixed());
    }
}
