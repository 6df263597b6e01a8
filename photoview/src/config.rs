// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use photoview_gesture::RecognizerConfig;
use photoview_motion::{DEFAULT_FLING_DECELERATION, Easing};
use photoview_view::{DEFAULT_ZOOM_FACTOR, PinchScaleMode};

/// Tuning for a [`crate::PhotoView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Multiple applied to the non-binding axis fit to get the zoomed-in scale.
    ///
    /// Must exceed `1.0`; otherwise the view never initializes.
    pub zoom_factor: f64,
    /// Length of the double-tap zoom animation.
    pub animation_duration: Duration,
    /// Curve of the double-tap zoom animation.
    pub easing: Easing,
    /// Fling deceleration in pixels per second squared.
    pub fling_deceleration: f64,
    /// Whether pinch scales are clamped to the fit range.
    pub pinch_scale: PinchScaleMode,
    /// Gesture recognition thresholds.
    pub recognizer: RecognizerConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            animation_duration: Duration::from_millis(300),
            easing: Easing::default(),
            fling_deceleration: DEFAULT_FLING_DECELERATION,
            pinch_scale: PinchScaleMode::default(),
            recognizer: RecognizerConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Sets [`ViewerConfig::zoom_factor`].
    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Sets [`ViewerConfig::animation_duration`].
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets [`ViewerConfig::easing`].
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets [`ViewerConfig::fling_deceleration`].
    #[must_use]
    pub fn with_fling_deceleration(mut self, deceleration: f64) -> Self {
        self.fling_deceleration = deceleration;
        self
    }

    /// Sets [`ViewerConfig::pinch_scale`].
    #[must_use]
    pub fn with_pinch_scale(mut self, mode: PinchScaleMode) -> Self {
        self.pinch_scale = mode;
        self
    }

    /// Sets [`ViewerConfig::recognizer`].
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: RecognizerConfig) -> Self {
        self.recognizer = recognizer;
        self
    }
}
