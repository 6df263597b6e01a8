// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity estimation from recent pointer samples.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    time_ms: u64,
    position: Point,
}

/// Keeps the samples of one contact that fall inside a sliding time window.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    window_ms: u64,
    samples: SmallVec<[Sample; 16]>,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(100)
    }
}

impl VelocityTracker {
    /// Creates a tracker keeping `window_ms` of history.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            samples: SmallVec::new(),
        }
    }

    /// Adds a sample and drops samples older than the window.
    ///
    /// A sample older than the newest one restarts the history.
    pub fn add(&mut self, time_ms: u64, position: Point) {
        if self.samples.last().is_some_and(|s| s.time_ms > time_ms) {
            self.samples.clear();
        }
        self.samples.push(Sample { time_ms, position });
        let cutoff = time_ms.saturating_sub(self.window_ms);
        let stale = self.samples.iter().take_while(|s| s.time_ms < cutoff).count();
        if stale > 0 {
            self.samples.drain(..stale);
        }
    }

    /// Drops all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Velocity in units per second between the oldest and newest sample,
    /// each axis clamped to `[-max, max]`.
    ///
    /// Returns zero with fewer than two samples or no elapsed time.
    #[must_use]
    pub fn estimate(&self, max: f64) -> Vec2 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return Vec2::ZERO;
        };
        let dt_ms = last.time_ms - first.time_ms;
        if dt_ms == 0 {
            return Vec2::ZERO;
        }
        let dt = dt_ms as f64 / 1000.0;
        let v = (last.position - first.position) / dt;
        Vec2::new(v.x.clamp(-max, max), v.y.clamp(-max, max))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::VelocityTracker;

    #[test]
    fn steady_motion_gives_constant_velocity() {
        let mut tracker = VelocityTracker::new(100);
        for i in 0..10_u32 {
            tracker.add(u64::from(i) * 10, Point::new(f64::from(i) * 20.0, 0.0));
        }
        let v = tracker.estimate(8000.0);
        assert!((v.x - 2000.0).abs() < 1e-9);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn old_samples_fall_out_of_window() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, Point::new(0.0, 0.0));
        tracker.add(10, Point::new(100.0, 0.0));
        // Finger rests, then lifts much later.
        tracker.add(500, Point::new(100.0, 0.0));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.estimate(8000.0), Vec2::ZERO);
    }

    #[test]
    fn estimate_is_clamped_per_axis() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(0, Point::new(0.0, 0.0));
        tracker.add(10, Point::new(1000.0, -5.0));
        let v = tracker.estimate(8000.0);
        assert_eq!(v.x, 8000.0);
        assert!((v.y + 500.0).abs() < 1e-9);
    }

    #[test]
    fn backwards_time_restarts_history() {
        let mut tracker = VelocityTracker::new(100);
        tracker.add(50, Point::new(0.0, 0.0));
        tracker.add(60, Point::new(10.0, 0.0));
        tracker.add(5, Point::new(20.0, 0.0));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.estimate(8000.0) == Vec2::ZERO);
    }

    #[test]
    fn high_rate_input_keeps_whole_window() {
        let mut tracker = VelocityTracker::new(100);
        // 1 ms samples: far more than the inline capacity.
        for i in 0..=60_u32 {
            tracker.add(u64::from(i), Point::new(f64::from(i) * 3.0, 0.0));
        }
        assert_eq!(tracker.len(), 61);
        let v = tracker.estimate(8000.0);
        assert!((v.x - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_tracker_is_still() {
        let tracker = VelocityTracker::default();
        assert!(tracker.is_empty());
        assert_eq!(tracker.estimate(8000.0), Vec2::ZERO);
    }
}
