// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: touch slop and scroll distances for a single contact.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragState::start`] when the contact touches down.
//! 2) On each move, call [`DragState::update`]. It returns `None` while the
//!    contact stays inside the touch slop, then the scroll distance since the
//!    last report (previous position minus current position).
//! 3) End tracking with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use photoview_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! // Inside an 8px slop: not a drag yet.
//! assert_eq!(drag.update(Point::new(13.0, 20.0), 8.0), None);
//!
//! // Leaving the slop reports the whole distance from the press.
//! assert_eq!(drag.update(Point::new(30.0, 20.0), 8.0), Some(Vec2::new(-20.0, 0.0)));
//! assert!(drag.is_scrolling());
//!
//! // Later moves report the distance since the previous report.
//! assert_eq!(drag.update(Point::new(25.0, 24.0), 8.0), Some(Vec2::new(5.0, -4.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one contact from press to release.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Press position.
    pub start_pos: Option<Point>,
    /// Position of the last reported drag, or the press position before the
    /// contact left the slop.
    pub last_pos: Option<Point>,
    /// `true` once the contact has left the touch slop.
    pub scrolling: bool,
}

impl DragState {
    /// Start tracking a contact pressed at `pos`.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.scrolling = false;
    }

    /// Update with a new position, returning the scroll distance once the
    /// contact has travelled further than `slop` from its press.
    pub fn update(&mut self, pos: Point, slop: f64) -> Option<Vec2> {
        let start = self.start_pos?;
        if !self.scrolling {
            if (pos - start).length() <= slop {
                return None;
            }
            self.scrolling = true;
        }
        let last = self.last_pos.unwrap_or(start);
        self.last_pos = Some(pos);
        Some(last - pos)
    }

    /// Stop tracking and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` once the tracked contact has left the touch slop.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: f64 = 8.0;

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(drag.start_pos.is_none());
        assert!(!drag.is_scrolling());
    }

    #[test]
    fn start_sets_dragging_state() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start);

        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert!(!drag.is_scrolling());
    }

    #[test]
    fn movement_inside_slop_is_swallowed() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 5.0), SLOP), None);
        assert_eq!(drag.update(Point::new(-4.0, 6.0), SLOP), None);
        assert!(!drag.is_scrolling());
        assert_eq!(drag.last_pos, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn first_report_includes_slop_distance() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0));

        let distance = drag.update(Point::new(112.0, 91.0), SLOP);

        assert_eq!(distance, Some(Vec2::new(-12.0, 9.0)));
        assert!(drag.is_scrolling());
    }

    #[test]
    fn multiple_updates_track_incremental_distances() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(
            drag.update(Point::new(10.0, 0.0), SLOP),
            Some(Vec2::new(-10.0, 0.0))
        );
        // Once scrolling, even tiny moves are reported.
        assert_eq!(
            drag.update(Point::new(11.0, 2.0), SLOP),
            Some(Vec2::new(-1.0, -2.0))
        );
        assert_eq!(
            drag.update(Point::new(8.0, 2.0), SLOP),
            Some(Vec2::new(3.0, 0.0))
        );
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(Point::new(15.0, 25.0), SLOP), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(45.0, 25.0), SLOP);

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert!(!drag.is_scrolling());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(30.0, 30.0), SLOP);

        let new_start = Point::new(50.0, 60.0);
        drag.start(new_start);

        assert_eq!(drag.start_pos, Some(new_start));
        assert!(!drag.is_scrolling());
        assert_eq!(drag.update(Point::new(52.0, 61.0), SLOP), None);
    }
}
