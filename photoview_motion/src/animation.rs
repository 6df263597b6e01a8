// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed interpolation of a scalar scale value.
//!
//! ## Usage
//!
//! 1) Create a [`ScaleAnimation`] with a start value, a target, a duration and
//!    an [`Easing`].
//! 2) On each display frame, call [`ScaleAnimation::step`] with the time since
//!    the previous frame and apply the returned value.
//! 3) Stop stepping once [`ScaleAnimation::is_finished`] returns `true`; the
//!    last returned value is exactly the target.
//!
//! ```
//! use core::time::Duration;
//! use photoview_motion::{Easing, ScaleAnimation};
//!
//! let mut anim = ScaleAnimation::new(0.5, 1.5, Duration::from_millis(300), Easing::Linear);
//! let v = anim.step(Duration::from_millis(150));
//! assert!((v - 1.0).abs() < 1e-9);
//! assert!(!anim.is_finished());
//!
//! assert_eq!(anim.step(Duration::from_millis(500)), 1.5);
//! assert!(anim.is_finished());
//! ```

use core::time::Duration;

use crate::easing::Easing;

/// A time-driven interpolation between two scale values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl ScaleAnimation {
    /// Creates an animation from `from` to `to` lasting `duration`.
    ///
    /// A zero duration reaches the target on the first step.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Start value.
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Target value.
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time stepped so far, never more than the duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` once the animation has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Value at the current elapsed time.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Advances by `dt` and returns the new value.
    pub fn step(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::ScaleAnimation;
    use crate::Easing;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn new_animation_sits_at_start() {
        let anim = ScaleAnimation::new(0.5, 1.5, Duration::from_millis(300), Easing::SmoothStep);
        assert_eq!(anim.value(), 0.5);
        assert!(!anim.is_finished());
        assert_eq!(anim.elapsed(), Duration::ZERO);
    }

    #[test]
    fn ends_exactly_on_target() {
        let mut anim =
            ScaleAnimation::new(0.5, 1.5, Duration::from_millis(300), Easing::SmoothStep);
        let mut frames = 0;
        let mut last = anim.value();
        while !anim.is_finished() {
            let v = anim.step(FRAME);
            assert!(v >= last, "zoom-in animation must not reverse");
            last = v;
            frames += 1;
            assert!(frames < 100, "animation never finished");
        }
        assert_eq!(last, 1.5);
        assert_eq!(frames, 19);
    }

    #[test]
    fn reverse_direction_decreases() {
        let mut anim =
            ScaleAnimation::new(1.5, 0.5, Duration::from_millis(300), Easing::SmoothStep);
        let mut last = anim.value();
        while !anim.is_finished() {
            let v = anim.step(FRAME);
            assert!(v <= last, "zoom-out animation must not reverse");
            last = v;
        }
        assert_eq!(last, 0.5);
    }

    #[test]
    fn zero_duration_finishes_on_first_step() {
        let mut anim = ScaleAnimation::new(0.5, 1.5, Duration::ZERO, Easing::Linear);
        assert!(anim.is_finished());
        assert_eq!(anim.step(Duration::ZERO), 1.5);
    }

    #[test]
    fn oversized_step_saturates() {
        let mut anim = ScaleAnimation::new(2.0, 1.0, Duration::from_millis(300), Easing::Linear);
        assert_eq!(anim.step(Duration::MAX), 1.0);
        assert_eq!(anim.elapsed(), anim.duration());
    }
}
