// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::fit::{DEFAULT_ZOOM_FACTOR, FitScales, PanBounds};
use crate::modes::PinchScaleMode;

/// Scale and translation applied to the content for one frame.
///
/// `offset` is the *effective* offset: the stored pan offset multiplied by the
/// zoom progress, so it is zero whenever the scale sits at the small fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale, applied about the viewport center.
    pub scale: f64,
    /// Translation applied after scaling, in viewport coordinates.
    pub offset: Vec2,
}

impl ViewTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };
}

/// Geometry model of one image shown inside one viewport.
///
/// `ImageViewport` owns the viewport and content sizes, the fit scales derived
/// from them, and the live transform state (scale, pan offset, zoom flag).
/// It performs no animation and no input handling; controllers drive it
/// through the setters below and read [`ImageViewport::transform`] when
/// drawing.
///
/// Until both sizes are positive the viewport is *uninitialized*:
/// [`ImageViewport::fit_scales`] returns `None` and scale/offset writes are
/// ignored.
#[derive(Clone, Debug)]
pub struct ImageViewport {
    viewport: Size,
    content: Size,
    zoom_factor: f64,
    fit: Option<FitScales>,
    scale: f64,
    offset: Vec2,
    zoomed_in: bool,
    revision: u64,
}

impl ImageViewport {
    /// Creates a model for `content` with no viewport yet.
    ///
    /// The zoom factor defaults to [`DEFAULT_ZOOM_FACTOR`].
    #[must_use]
    pub fn new(content: Size) -> Self {
        Self {
            viewport: Size::ZERO,
            content,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            fit: None,
            scale: 1.0,
            offset: Vec2::ZERO,
            zoomed_in: false,
            revision: 0,
        }
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Returns the multiple used to derive the big fit scale.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Sets the viewport size and returns to the fitted view.
    ///
    /// Fit scales are recomputed, the scale resets to the small fit, the zoom
    /// flag clears, and the pan offset resets to zero. Setting the current
    /// size again is a no-op.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport == size {
            return;
        }
        self.viewport = size;
        self.refit();
    }

    /// Replaces the content size (a newly loaded image) and returns to the
    /// fitted view.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content == size {
            return;
        }
        self.content = size;
        self.refit();
    }

    /// Sets the multiple used for the big fit scale and returns to the fitted
    /// view.
    ///
    /// Factors that do not exceed `1.0` leave the viewport uninitialized.
    pub fn set_zoom_factor(&mut self, zoom_factor: f64) {
        if self.zoom_factor == zoom_factor {
            return;
        }
        self.zoom_factor = zoom_factor;
        self.refit();
    }

    /// Returns the fit scales, or `None` while uninitialized.
    #[must_use]
    pub fn fit_scales(&self) -> Option<FitScales> {
        self.fit
    }

    /// Returns `true` once both sizes produce valid fit scales.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.fit.is_some()
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale. Ignored while uninitialized.
    pub fn set_scale(&mut self, scale: f64) {
        if self.fit.is_none() || self.scale == scale {
            return;
        }
        self.scale = scale;
        self.bump_revision();
    }

    /// Sets the scale reached by a pinch gesture according to `mode`.
    pub fn set_pinch_scale(&mut self, scale: f64, mode: PinchScaleMode) {
        let Some(fit) = self.fit else {
            return;
        };
        let scale = match mode {
            PinchScaleMode::Unclamped => scale,
            PinchScaleMode::ClampToFit => fit.clamp(scale),
        };
        self.set_scale(scale);
    }

    /// Returns `true` while the view is in its enlarged state.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.zoomed_in
    }

    /// Sets the enlarged state. Ignored while uninitialized.
    pub fn set_zoomed_in(&mut self, zoomed_in: bool) {
        if self.fit.is_none() || self.zoomed_in == zoomed_in {
            return;
        }
        self.zoomed_in = zoomed_in;
        self.bump_revision();
    }

    /// Returns the stored pan offset.
    ///
    /// Use [`ImageViewport::effective_offset`] for the offset actually drawn.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the stored pan offset without clamping. Ignored while
    /// uninitialized.
    pub fn set_offset(&mut self, offset: Vec2) {
        if self.fit.is_none() || self.offset == offset {
            return;
        }
        self.offset = offset;
        self.bump_revision();
    }

    /// Pans by a drag `distance` (previous pointer position minus current).
    ///
    /// The result is clamped to [`ImageViewport::pan_bounds`]. Panning is a
    /// no-op while not zoomed in. Returns `true` if the offset changed.
    pub fn pan_by(&mut self, distance: Vec2) -> bool {
        if !self.zoomed_in {
            return false;
        }
        let Some(bounds) = self.pan_bounds() else {
            return false;
        };
        let before = self.revision;
        self.set_offset(bounds.clamp_drag(self.offset, distance));
        self.revision != before
    }

    /// Offset that keeps `focal` (in viewport coordinates) visually anchored
    /// when zooming from the small to the big fit scale.
    ///
    /// Returns `None` while uninitialized.
    #[must_use]
    pub fn focal_offset(&self, focal: Point) -> Option<Vec2> {
        let fit = self.fit?;
        let from_center = focal - self.viewport_center();
        Some(from_center - from_center * fit.ratio())
    }

    /// Returns the pan limits, or `None` while uninitialized.
    #[must_use]
    pub fn pan_bounds(&self) -> Option<PanBounds> {
        self.fit.map(|fit| fit.pan_bounds(self.viewport, self.content))
    }

    /// Normalized position of the scale between the small (0.0) and big (1.0)
    /// fit scales. Returns `0.0` while uninitialized.
    #[must_use]
    pub fn zoom_progress(&self) -> f64 {
        self.fit.map_or(0.0, |fit| fit.progress(self.scale))
    }

    /// The stored offset scaled by the zoom progress.
    #[must_use]
    pub fn effective_offset(&self) -> Vec2 {
        self.offset * self.zoom_progress()
    }

    /// Returns the scale and effective offset for drawing.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        if self.fit.is_none() {
            return ViewTransform::IDENTITY;
        }
        ViewTransform {
            scale: self.scale,
            offset: self.effective_offset(),
        }
    }

    /// Center of the viewport in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Unscaled position of the content's top-left corner that centers it in
    /// the viewport.
    #[must_use]
    pub fn content_origin(&self) -> Point {
        Point::new(
            (self.viewport.width - self.content.width) / 2.0,
            (self.viewport.height - self.content.height) / 2.0,
        )
    }

    /// Maps content pixel coordinates into viewport coordinates.
    ///
    /// The content is placed at [`ImageViewport::content_origin`], scaled about
    /// the viewport center, then translated by the effective offset.
    #[must_use]
    pub fn content_to_view(&self) -> Affine {
        let t = self.transform();
        let center = self.viewport_center().to_vec2();
        Affine::translate(t.offset)
            * Affine::translate(center)
            * Affine::scale(t.scale)
            * Affine::translate(-center)
            * Affine::translate(self.content_origin().to_vec2())
    }

    /// Converts a viewport point into content pixel coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.content_to_view().inverse() * pt
    }

    /// Returns the change counter.
    ///
    /// The revision is bumped only when a mutation actually changes the scale,
    /// offset, zoom flag, or fit scales. Observers can compare it across calls
    /// to decide whether a redraw is needed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageViewportDebugInfo {
        ImageViewportDebugInfo {
            viewport: self.viewport,
            content: self.content,
            zoom_factor: self.zoom_factor,
            fit: self.fit,
            pan_bounds: self.pan_bounds(),
            scale: self.scale,
            offset: self.offset,
            effective_offset: self.effective_offset(),
            zoom_progress: self.zoom_progress(),
            zoomed_in: self.zoomed_in,
            revision: self.revision,
        }
    }

    fn refit(&mut self) {
        self.fit = FitScales::compute(self.viewport, self.content, self.zoom_factor);
        self.scale = self.fit.map_or(1.0, |fit| fit.small());
        self.offset = Vec2::ZERO;
        self.zoomed_in = false;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Debug snapshot of an [`ImageViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ImageViewportDebugInfo {
    /// Viewport size.
    pub viewport: Size,
    /// Content size.
    pub content: Size,
    /// Multiple used for the big fit scale.
    pub zoom_factor: f64,
    /// Fit scales, if initialized.
    pub fit: Option<FitScales>,
    /// Pan limits, if initialized.
    pub pan_bounds: Option<PanBounds>,
    /// Current scale.
    pub scale: f64,
    /// Stored pan offset.
    pub offset: Vec2,
    /// Offset actually applied when drawing.
    pub effective_offset: Vec2,
    /// Position of the scale between the fit levels.
    pub zoom_progress: f64,
    /// Whether the view is enlarged.
    pub zoomed_in: bool,
    /// Change counter.
    pub revision: u64,
}
