// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! A pinch is *tracked* as soon as two contacts are down, but only *begins*
//! once the distance between them (the span) has changed by more than a slop.
//! From then on every update reports the cumulative factor
//! `span / span_at_begin`.
//!
//! ```
//! use photoview_gesture::pinch::{PinchState, PinchTransition};
//!
//! let mut pinch = PinchState::default();
//! pinch.track(100.0);
//!
//! assert_eq!(pinch.update(110.0, 16.0), None);
//! assert_eq!(pinch.update(120.0, 16.0), Some(PinchTransition::Begin));
//! assert_eq!(pinch.update(240.0, 16.0), Some(PinchTransition::Scale(2.0)));
//! assert!(pinch.end());
//! ```

/// What a span update did to the pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchTransition {
    /// The span left the slop; the pinch has begun.
    Begin,
    /// The pinch is in progress with this cumulative factor.
    Scale(f64),
}

/// Tracks the span of a two-contact gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    initial_span: Option<f64>,
    begin_span: Option<f64>,
    factor: f64,
}

impl Default for PinchState {
    fn default() -> Self {
        Self {
            initial_span: None,
            begin_span: None,
            factor: 1.0,
        }
    }
}

impl PinchState {
    /// Starts tracking two contacts whose current span is `span`.
    pub fn track(&mut self, span: f64) {
        *self = Self {
            initial_span: Some(span),
            ..Self::default()
        };
    }

    /// Feeds the current span.
    pub fn update(&mut self, span: f64, slop: f64) -> Option<PinchTransition> {
        if let Some(begin) = self.begin_span {
            if begin <= 0.0 {
                return None;
            }
            self.factor = span / begin;
            return Some(PinchTransition::Scale(self.factor));
        }
        let initial = self.initial_span?;
        if span > 0.0 && (span - initial).abs() > slop {
            self.begin_span = Some(span);
            self.factor = 1.0;
            Some(PinchTransition::Begin)
        } else {
            None
        }
    }

    /// Keeps the current factor continuous when the contacts defining the
    /// span change (for example a third finger takes over).
    pub fn rebase(&mut self, span: f64) {
        if self.begin_span.is_some() && self.factor > 0.0 {
            self.begin_span = Some(span / self.factor);
        } else {
            self.track(span);
        }
    }

    /// Stops tracking. Returns `true` if a pinch had begun.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::default();
        was_active
    }

    /// Returns `true` once the pinch has begun.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.begin_span.is_some()
    }

    /// Returns `true` while two contacts are being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.initial_span.is_some()
    }

    /// Last reported cumulative factor (`1.0` before the first update).
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::{PinchState, PinchTransition};

    #[test]
    fn untracked_pinch_ignores_updates() {
        let mut pinch = PinchState::default();
        assert_eq!(pinch.update(500.0, 16.0), None);
        assert!(!pinch.is_tracking());
        assert!(!pinch.end());
    }

    #[test]
    fn shrinking_span_begins_too() {
        let mut pinch = PinchState::default();
        pinch.track(200.0);
        assert_eq!(pinch.update(150.0, 16.0), Some(PinchTransition::Begin));
        assert_eq!(pinch.update(75.0, 16.0), Some(PinchTransition::Scale(0.5)));
    }

    #[test]
    fn factor_is_relative_to_span_at_begin() {
        let mut pinch = PinchState::default();
        pinch.track(100.0);
        assert_eq!(pinch.update(150.0, 16.0), Some(PinchTransition::Begin));
        // Not relative to the initial 100.
        assert_eq!(pinch.update(150.0, 16.0), Some(PinchTransition::Scale(1.0)));
        assert_eq!(pinch.update(300.0, 16.0), Some(PinchTransition::Scale(2.0)));
        assert_eq!(pinch.factor(), 2.0);
    }

    #[test]
    fn rebase_keeps_factor_continuous() {
        let mut pinch = PinchState::default();
        pinch.track(100.0);
        pinch.update(200.0, 16.0);
        pinch.update(400.0, 16.0);
        assert_eq!(pinch.factor(), 2.0);

        // A different pair of contacts is now 50 apart.
        pinch.rebase(50.0);
        assert_eq!(pinch.update(50.0, 16.0), Some(PinchTransition::Scale(2.0)));
        assert_eq!(pinch.update(100.0, 16.0), Some(PinchTransition::Scale(4.0)));
    }

    #[test]
    fn rebase_before_begin_restarts_tracking() {
        let mut pinch = PinchState::default();
        pinch.track(100.0);
        pinch.rebase(300.0);
        assert_eq!(pinch.update(310.0, 16.0), None);
        assert_eq!(pinch.update(100.0, 16.0), Some(PinchTransition::Begin));
    }

    #[test]
    fn end_resets() {
        let mut pinch = PinchState::default();
        pinch.track(100.0);
        pinch.update(200.0, 16.0);
        assert!(pinch.end());
        assert!(!pinch.is_active());
        assert!(!pinch.is_tracking());
        assert_eq!(pinch.factor(), 1.0);
    }
}
