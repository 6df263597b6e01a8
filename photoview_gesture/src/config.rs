// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used by [`crate::GestureRecognizer`].
///
/// Distances are in viewport units (typically logical pixels), velocities in
/// units per second, and times in milliseconds. The defaults match common
/// touch platform conventions at baseline density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// Distance a single contact must travel before it counts as a drag.
    pub touch_slop: f64,
    /// Largest distance between the two presses of a double-tap.
    pub double_tap_slop: f64,
    /// Longest gap between the first release and the second press of a
    /// double-tap.
    pub double_tap_timeout_ms: u64,
    /// Shortest gap between the first release and the second press of a
    /// double-tap. Filters out contact bounce.
    pub double_tap_min_time_ms: u64,
    /// Change in finger span needed before two contacts count as a pinch.
    pub pinch_span_slop: f64,
    /// Release speed (on either axis) needed for a fling.
    pub min_fling_velocity: f64,
    /// Release speed cap (per axis).
    pub max_fling_velocity: f64,
    /// How far back velocity samples are kept.
    pub velocity_window_ms: u64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            double_tap_slop: 100.0,
            double_tap_timeout_ms: 300,
            double_tap_min_time_ms: 40,
            pinch_span_slop: 16.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8000.0,
            velocity_window_ms: 100,
        }
    }
}

impl RecognizerConfig {
    /// Sets [`RecognizerConfig::touch_slop`].
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets [`RecognizerConfig::double_tap_slop`].
    #[must_use]
    pub fn with_double_tap_slop(mut self, double_tap_slop: f64) -> Self {
        self.double_tap_slop = double_tap_slop;
        self
    }

    /// Sets the double-tap window, `min_ms..=timeout_ms` after the first release.
    #[must_use]
    pub fn with_double_tap_window(mut self, min_ms: u64, timeout_ms: u64) -> Self {
        self.double_tap_min_time_ms = min_ms;
        self.double_tap_timeout_ms = timeout_ms;
        self
    }

    /// Sets [`RecognizerConfig::pinch_span_slop`].
    #[must_use]
    pub fn with_pinch_span_slop(mut self, pinch_span_slop: f64) -> Self {
        self.pinch_span_slop = pinch_span_slop;
        self
    }

    /// Sets the fling speed range.
    #[must_use]
    pub fn with_fling_velocity(mut self, min: f64, max: f64) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }
}
