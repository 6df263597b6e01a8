// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap detection.
//!
//! A tap is a press and release that never left the touch slop. A second
//! press counts as a double-tap when it lands within a time window after the
//! first release and close enough to the first press.
//!
//! ```
//! use kurbo::Point;
//! use photoview_gesture::RecognizerConfig;
//! use photoview_gesture::tap::TapState;
//!
//! let config = RecognizerConfig::default();
//! let mut taps = TapState::default();
//!
//! assert!(!taps.on_down(Point::new(50.0, 50.0), 1000, &config));
//! taps.on_up(1080);
//! assert!(taps.on_down(Point::new(60.0, 55.0), 1200, &config));
//! ```

use kurbo::Point;

use crate::config::RecognizerConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    position: Point,
    up_time_ms: u64,
}

/// Remembers the previous tap so the next press can be matched against it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapState {
    pending: Option<Point>,
    last_tap: Option<Tap>,
}

impl TapState {
    /// Records a first-contact press. Returns `true` if it completes a
    /// double-tap.
    ///
    /// A completed double-tap is consumed: the press does not start a new
    /// candidate tap.
    pub fn on_down(&mut self, position: Point, time_ms: u64, config: &RecognizerConfig) -> bool {
        let is_double = self.last_tap.take().is_some_and(|tap| {
            let gap = time_ms.saturating_sub(tap.up_time_ms);
            gap >= config.double_tap_min_time_ms
                && gap <= config.double_tap_timeout_ms
                && (position - tap.position).length() <= config.double_tap_slop
        });
        self.pending = if is_double { None } else { Some(position) };
        is_double
    }

    /// Records the release of the pending press, turning it into a tap.
    pub fn on_up(&mut self, time_ms: u64) {
        if let Some(position) = self.pending.take() {
            self.last_tap = Some(Tap {
                position,
                up_time_ms: time_ms,
            });
        }
    }

    /// Forgets the pending press (it became a drag or a multi-touch gesture).
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Forgets everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a press could still become a tap.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::TapState;
    use crate::RecognizerConfig;

    fn tap(taps: &mut TapState, config: &RecognizerConfig, pos: Point, down: u64, up: u64) -> bool {
        let double = taps.on_down(pos, down, config);
        taps.on_up(up);
        double
    }

    #[test]
    fn second_tap_inside_window_is_double() {
        let config = RecognizerConfig::default();
        let mut taps = TapState::default();
        assert!(!tap(&mut taps, &config, Point::new(10.0, 10.0), 0, 50));
        assert!(tap(&mut taps, &config, Point::new(12.0, 9.0), 200, 250));
    }

    #[test]
    fn late_second_tap_is_single() {
        let config = RecognizerConfig::default();
        let mut taps = TapState::default();
        tap(&mut taps, &config, Point::new(10.0, 10.0), 0, 50);
        assert!(!tap(&mut taps, &config, Point::new(10.0, 10.0), 351, 400));
        // The late tap becomes the new first tap.
        assert!(tap(&mut taps, &config, Point::new(10.0, 10.0), 500, 550));
    }

    #[test]
    fn too_quick_second_tap_is_single() {
        let config = RecognizerConfig::default();
        let mut taps = TapState::default();
        tap(&mut taps, &config, Point::new(10.0, 10.0), 0, 50);
        assert!(!tap(&mut taps, &config, Point::new(10.0, 10.0), 60, 90));
    }

    #[test]
    fn distant_second_tap_is_single() {
        let config = RecognizerConfig::default();
        let mut taps = TapState::default();
        tap(&mut taps, &config, Point::new(10.0, 10.0), 0, 50);
        assert!(!tap(&mut taps, &config, Point::new(200.0, 10.0), 150, 200));
    }

    #[test]
    fn triple_tap_fires_once() {
        let config = RecognizerConfig::default();
        let mut taps = TapState::default();
        let p = Point::new(10.0, 10.0);
        assert!(!tap(&mut taps, &config, p, 0, 50));
        assert!(tap(&mut taps, &config, p, 150, 200));
        assert!(!tap(&mut taps, &config, p, 300, 350));
    }

    #[test]
    fn cancelled_press_is_not_a_tap() {
        let config = RecognizerConfig::default();
        let mut taps = TapState::default();
        let p = Point::new(10.0, 10.0);
        assert!(!taps.on_down(p, 0, &config));
        assert!(taps.has_pending());
        taps.cancel_pending();
        taps.on_up(50);
        assert!(!taps.on_down(p, 150, &config));
    }
}
