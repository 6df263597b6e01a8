// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::modes::FitAxis;

/// Default multiple applied to the non-binding axis fit to get the big scale.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.5;

/// The two canonical zoom levels of an image inside a viewport.
///
/// - `small` draws the whole content inside the viewport, touching it on the
///   binding axis.
/// - `big` is the scale that makes the content fill the *other* axis,
///   multiplied by a zoom factor.
///
/// A `FitScales` value always satisfies `big > small > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitScales {
    small: f64,
    big: f64,
    axis: FitAxis,
}

impl FitScales {
    /// Computes the fit scales for `content` drawn inside `viewport`.
    ///
    /// Returns `None` when either size is empty or non-finite, or when
    /// `zoom_factor` does not leave `big` strictly above `small`.
    #[must_use]
    pub fn compute(viewport: Size, content: Size, zoom_factor: f64) -> Option<Self> {
        if !is_positive(viewport) || !is_positive(content) || !zoom_factor.is_finite() {
            return None;
        }

        let width_fit = viewport.width / content.width;
        let height_fit = viewport.height / content.height;
        let content_aspect = content.width / content.height;
        let viewport_aspect = viewport.width / viewport.height;

        let (small, big, axis) = if content_aspect > viewport_aspect {
            (width_fit, height_fit * zoom_factor, FitAxis::Width)
        } else {
            (height_fit, width_fit * zoom_factor, FitAxis::Height)
        };

        if small > 0.0 && big > small && big.is_finite() {
            Some(Self { small, big, axis })
        } else {
            None
        }
    }

    /// Scale at which the whole content fits the viewport.
    #[must_use]
    pub fn small(&self) -> f64 {
        self.small
    }

    /// Scale used as the zoomed-in target.
    #[must_use]
    pub fn big(&self) -> f64 {
        self.big
    }

    /// The axis that constrains the small fit.
    #[must_use]
    pub fn binding_axis(&self) -> FitAxis {
        self.axis
    }

    /// Returns where `scale` sits between `small` (0.0) and `big` (1.0).
    ///
    /// The result is not clamped: a pinch may push the scale past either fit
    /// level, which yields a progress below 0 or above 1.
    #[must_use]
    pub fn progress(&self, scale: f64) -> f64 {
        (scale - self.small) / (self.big - self.small)
    }

    /// Clamps `scale` into `[small, big]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.small, self.big)
    }

    /// Ratio between the big and small scales.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.big / self.small
    }

    /// Pan limits for `content` inside `viewport`, evaluated at the big scale.
    #[must_use]
    pub fn pan_bounds(&self, viewport: Size, content: Size) -> PanBounds {
        PanBounds::new(
            (content.width * self.big - viewport.width) / 2.0,
            (content.height * self.big - viewport.height) / 2.0,
        )
    }
}

/// Symmetric pan limits: offsets are legal in `[-max_x, max_x] × [-max_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PanBounds {
    /// Largest horizontal offset magnitude.
    pub max_x: f64,
    /// Largest vertical offset magnitude.
    pub max_y: f64,
}

impl PanBounds {
    /// Creates bounds from the two half extents. Negative values become zero.
    #[must_use]
    pub fn new(max_x: f64, max_y: f64) -> Self {
        Self {
            max_x: max_x.max(0.0),
            max_y: max_y.max(0.0),
        }
    }

    /// Applies a drag to `offset` and keeps the result inside the bounds.
    ///
    /// `distance` is the previous pointer position minus the current one, so
    /// the offset moves with the finger: a positive distance moves the offset
    /// towards `-max`, a negative one towards `+max`. Each axis is handled on
    /// its own: an axis with zero distance is left exactly as it was.
    #[must_use]
    pub fn clamp_drag(&self, offset: Vec2, distance: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, distance.x, self.max_x),
            clamp_axis(offset.y, distance.y, self.max_y),
        )
    }

    /// Returns the nearest offset inside the bounds.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.clamp(-self.max_x, self.max_x),
            offset.y.clamp(-self.max_y, self.max_y),
        )
    }

    /// Returns `true` if `offset` lies inside the bounds (edges included).
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        offset.x.abs() <= self.max_x && offset.y.abs() <= self.max_y
    }

    /// The bounds as a rectangle centered on the origin.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(-self.max_x, -self.max_y, self.max_x, self.max_y)
    }
}

fn clamp_axis(offset: f64, distance: f64, max: f64) -> f64 {
    // An axis the drag did not move keeps its offset, even out of bounds.
    if distance == 0.0 {
        return offset;
    }
    let moved = if distance > 0.0 {
        (offset - distance).max(-max)
    } else {
        (offset - distance).min(max)
    };
    // An offset that started outside the bounds (for example the focal anchor
    // set by a double-tap) is pulled back in on the first drag.
    moved.clamp(-max, max)
}

fn is_positive(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}
