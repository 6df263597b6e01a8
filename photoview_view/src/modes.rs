// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The viewport axis that limits how large the content can be drawn while
/// still fitting entirely.
///
/// Reported by [`crate::FitScales::binding_axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitAxis {
    /// The content is relatively wider than the viewport, so its width fills
    /// the viewport width at the small fit scale.
    Width,
    /// The content is relatively taller than (or has the same aspect ratio as)
    /// the viewport, so its height fills the viewport height at the small fit
    /// scale.
    Height,
}

/// How scale writes coming from a pinch gesture are treated.
///
/// This mode is consulted by [`crate::ImageViewport::set_pinch_scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PinchScaleMode {
    /// Apply the pinch scale as-is, even outside the `[small, big]` fit range.
    ///
    /// Releasing the pinch leaves the scale where the fingers left it.
    #[default]
    Unclamped,
    /// Clamp the pinch scale into the `[small, big]` fit range.
    ClampToFit,
}
