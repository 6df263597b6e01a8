// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial fling trajectories with hard bounds.
//!
//! A [`Fling`] starts from an offset and a release velocity and slows down at a
//! constant rate along the release direction until its velocity reaches zero.
//! Each axis is clamped to the supplied bounds: an axis that runs into its
//! bound stays pinned there, without overshoot or bounce.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Vec2};
//! use photoview_motion::Fling;
//!
//! let bounds = Rect::new(-100.0, -100.0, 100.0, 100.0);
//! let mut fling = Fling::new(Vec2::ZERO, Vec2::new(3000.0, 0.0), bounds, 5000.0);
//!
//! let mut step = fling.step(Duration::from_millis(16));
//! while !step.finished {
//!     step = fling.step(Duration::from_millis(16));
//! }
//! assert_eq!(step.offset, Vec2::new(100.0, 0.0));
//! ```

use core::time::Duration;

use kurbo::{Rect, Vec2};

/// Default deceleration in offset units per second squared.
pub const DEFAULT_FLING_DECELERATION: f64 = 5000.0;

/// Result of one [`Fling::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingStep {
    /// Offset after the step.
    pub offset: Vec2,
    /// `true` when the trajectory has come to rest; no further steps are needed.
    pub finished: bool,
}

/// A decaying-velocity offset trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    start: Vec2,
    direction: Vec2,
    speed: f64,
    deceleration: f64,
    bounds: Rect,
    duration: f64,
    elapsed: Duration,
    offset: Vec2,
    finished: bool,
}

impl Fling {
    /// Starts a fling at `start` with `velocity` (units per second).
    ///
    /// `start` is clamped into `bounds` first. A zero velocity or a
    /// non-positive deceleration yields a trajectory that is already finished.
    #[must_use]
    pub fn new(start: Vec2, velocity: Vec2, bounds: Rect, deceleration: f64) -> Self {
        let bounds = bounds.abs();
        let start = clamp_to(bounds, start);
        let speed = velocity.length();
        let moving = speed > 0.0 && speed.is_finite() && deceleration > 0.0;
        let (direction, speed, duration) = if moving {
            (velocity / speed, speed, speed / deceleration)
        } else {
            (Vec2::ZERO, 0.0, 0.0)
        };
        Self {
            start,
            direction,
            speed,
            deceleration,
            bounds,
            duration,
            elapsed: Duration::ZERO,
            offset: start,
            finished: !moving,
        }
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Bounds the trajectory is clamped to.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns `true` once the trajectory has come to rest.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Velocity at the current elapsed time, zero once finished.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        if self.finished {
            return Vec2::ZERO;
        }
        let t = self.elapsed.as_secs_f64().min(self.duration);
        self.direction * (self.speed - self.deceleration * t)
    }

    /// Time the unbounded trajectory needs to come to rest, saturating at
    /// [`Duration::MAX`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::MAX)
    }

    /// Where the trajectory comes to rest, bounds applied.
    #[must_use]
    pub fn rest_offset(&self) -> Vec2 {
        clamp_to(self.bounds, self.unbounded_at(self.duration))
    }

    /// Advances by `dt` and returns the new offset.
    pub fn step(&mut self, dt: Duration) -> FlingStep {
        if self.finished {
            return FlingStep {
                offset: self.offset,
                finished: true,
            };
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let t = self.elapsed.as_secs_f64().min(self.duration);
        let raw = self.unbounded_at(t);
        self.offset = clamp_to(self.bounds, raw);

        let x_done = self.direction.x == 0.0 || raw.x <= self.bounds.x0 || raw.x >= self.bounds.x1;
        let y_done = self.direction.y == 0.0 || raw.y <= self.bounds.y0 || raw.y >= self.bounds.y1;
        self.finished = t >= self.duration || (x_done && y_done);

        FlingStep {
            offset: self.offset,
            finished: self.finished,
        }
    }

    fn unbounded_at(&self, t: f64) -> Vec2 {
        let travel = self.speed * t - 0.5 * self.deceleration * t * t;
        self.start + self.direction * travel
    }
}

fn clamp_to(bounds: Rect, v: Vec2) -> Vec2 {
    Vec2::new(
        v.x.clamp(bounds.x0, bounds.x1),
        v.y.clamp(bounds.y0, bounds.y1),
    )
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Vec2};

    use super::{DEFAULT_FLING_DECELERATION, Fling};

    const FRAME: Duration = Duration::from_millis(16);

    fn run(fling: &mut Fling) -> (Vec2, usize) {
        let mut frames = 0;
        loop {
            let step = fling.step(FRAME);
            frames += 1;
            assert!(frames < 10_000, "fling never finished");
            if step.finished {
                return (step.offset, frames);
            }
        }
    }

    #[test]
    fn comes_to_rest_inside_wide_bounds() {
        let bounds = Rect::new(-10_000.0, -10_000.0, 10_000.0, 10_000.0);
        let mut fling = Fling::new(Vec2::ZERO, Vec2::new(1000.0, 0.0), bounds, 5000.0);
        // v² / 2a = 1_000_000 / 10_000.
        let (rest, _) = run(&mut fling);
        assert!((rest.x - 100.0).abs() < 1e-9);
        assert_eq!(rest.y, 0.0);
        assert_eq!(fling.velocity(), Vec2::ZERO);
        assert!((fling.rest_offset().x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn stops_exactly_at_bound_without_overshoot() {
        let bounds = Rect::new(-100.0, -50.0, 100.0, 50.0);
        let mut fling = Fling::new(
            Vec2::new(20.0, 0.0),
            Vec2::new(4000.0, 0.0),
            bounds,
            DEFAULT_FLING_DECELERATION,
        );
        loop {
            let step = fling.step(FRAME);
            assert!(step.offset.x <= 100.0, "overshot bound: {:?}", step.offset);
            if step.finished {
                assert_eq!(step.offset.x, 100.0);
                break;
            }
        }
    }

    #[test]
    fn pinned_axis_lets_other_axis_continue() {
        let bounds = Rect::new(-10.0, -1000.0, 10.0, 1000.0);
        let mut fling = Fling::new(Vec2::ZERO, Vec2::new(-1000.0, 1000.0), bounds, 5000.0);
        let first = fling.step(FRAME);
        assert!(!first.finished);

        let (rest, _) = run(&mut fling);
        assert_eq!(rest.x, -10.0);
        assert!(rest.y > 10.0);
        assert!(rest.y < 1000.0);
    }

    #[test]
    fn both_axes_pinned_finishes_early() {
        let bounds = Rect::new(-5.0, -5.0, 5.0, 5.0);
        let mut fling = Fling::new(Vec2::ZERO, Vec2::new(3000.0, -3000.0), bounds, 5000.0);
        let (rest, frames) = run(&mut fling);
        assert_eq!(rest, Vec2::new(5.0, -5.0));
        assert!(frames < 5);
        assert!(fling.duration() > Duration::from_millis(500));
    }

    #[test]
    fn zero_velocity_is_already_finished() {
        let bounds = Rect::new(-5.0, -5.0, 5.0, 5.0);
        let mut fling = Fling::new(Vec2::new(1.0, 2.0), Vec2::ZERO, bounds, 5000.0);
        assert!(fling.is_finished());
        let step = fling.step(FRAME);
        assert!(step.finished);
        assert_eq!(step.offset, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn tiny_deceleration_saturates_duration() {
        let bounds = Rect::new(-10.0, -10.0, 10.0, 10.0);
        let mut fling = Fling::new(Vec2::ZERO, Vec2::new(8000.0, 0.0), bounds, 1e-300);
        assert_eq!(fling.duration(), Duration::MAX);
        let step = fling.step(FRAME);
        assert_eq!(step.offset.y, 0.0);
        assert!(step.offset.x > 0.0);
    }

    #[test]
    fn start_outside_bounds_is_clamped() {
        let bounds = Rect::new(-5.0, -5.0, 5.0, 5.0);
        let fling = Fling::new(Vec2::new(40.0, -40.0), Vec2::new(-10.0, 0.0), bounds, 5000.0);
        assert_eq!(fling.offset(), Vec2::new(5.0, -5.0));
    }

    #[test]
    fn velocity_decays_monotonically() {
        let bounds = Rect::new(-1e6, -1e6, 1e6, 1e6);
        let mut fling = Fling::new(Vec2::ZERO, Vec2::new(0.0, 2500.0), bounds, 5000.0);
        let mut last = fling.velocity().length();
        while !fling.step(FRAME).finished {
            let v = fling.velocity().length();
            assert!(v < last, "velocity must decay");
            last = v;
        }
    }
}
