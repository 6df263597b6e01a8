// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Size, Vec2};
use log::{debug, trace, warn};
use photoview_gesture::{Gesture, GestureRecognizer, PointerEvent};
use photoview_motion::{Fling, ScaleAnimation};
use photoview_view::{ImageViewport, ImageViewportDebugInfo, ViewTransform};

use crate::config::ViewerConfig;
use crate::phase::{GesturePhase, Response};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Touch {
    Idle,
    Dragging,
    Pinching { base_scale: f64 },
}

/// What the host draws with, compared across a call to decide on a redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Drawn {
    transform: ViewTransform,
    content_to_view: Affine,
}

/// A zoomable, pannable image view driven by touch input and display frames.
///
/// The host feeds pointer events through [`PhotoView::on_pointer_event`],
/// size changes through [`PhotoView::on_viewport_resized`], and frame ticks
/// through [`PhotoView::advance`]. Every call returns a [`Response`] telling
/// the host whether to redraw and whether another frame is wanted. Drawing
/// reads [`PhotoView::content_to_view`] (or [`PhotoView::current_transform`]).
///
/// At most one scale animation and one fling run at a time. Touching down
/// stops a running fling; starting a pinch stops both.
#[derive(Clone, Debug)]
pub struct PhotoView {
    config: ViewerConfig,
    viewport: ImageViewport,
    recognizer: GestureRecognizer,
    touch: Touch,
    animation: Option<ScaleAnimation>,
    fling: Option<Fling>,
}

impl PhotoView {
    /// Creates a view of content with intrinsic size `content`.
    ///
    /// The view stays uninitialized until [`PhotoView::on_viewport_resized`]
    /// provides a usable viewport size.
    #[must_use]
    pub fn new(content: Size, config: ViewerConfig) -> Self {
        let mut viewport = ImageViewport::new(content);
        viewport.set_zoom_factor(config.zoom_factor);
        Self {
            config,
            viewport,
            recognizer: GestureRecognizer::new(config.recognizer),
            touch: Touch::Idle,
            animation: None,
            fling: None,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Returns the underlying geometry.
    #[must_use]
    pub fn viewport(&self) -> &ImageViewport {
        &self.viewport
    }

    /// Returns `true` once the viewport and content sizes are usable.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.viewport.is_initialized()
    }

    /// Handles a change of the viewport size.
    ///
    /// A new size returns the view to the fitted, zoomed-out state and stops
    /// any animation or fling.
    pub fn on_viewport_resized(&mut self, size: Size) -> Response {
        let before = self.drawn();
        let revision = self.viewport.revision();
        self.viewport.set_viewport_size(size);
        if self.viewport.revision() != revision {
            self.reset_motion();
            if !self.viewport.is_initialized() {
                warn!("viewport {size:?} leaves the view uninitialized");
            }
        }
        self.respond(before, false)
    }

    /// Replaces the content size (for example after loading a new image).
    ///
    /// Like a resize, this returns to the fitted view.
    pub fn set_content_size(&mut self, size: Size) -> Response {
        let before = self.drawn();
        let revision = self.viewport.revision();
        self.viewport.set_content_size(size);
        if self.viewport.revision() != revision {
            self.reset_motion();
        }
        self.respond(before, false)
    }

    /// Feeds one pointer event.
    ///
    /// While uninitialized, events are not consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Response {
        if !self.viewport.is_initialized() {
            warn!("pointer event before initialization: {:?}", event.phase);
            return Response::default();
        }
        let before = self.drawn();
        if let Some(gesture) = self.recognizer.on_pointer_event(event) {
            trace!("gesture {gesture:?}");
            self.apply(gesture);
        }
        self.respond(before, true)
    }

    /// Advances the running animation and fling by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> Response {
        let before = self.drawn();
        if let Some(animation) = self.animation.as_mut() {
            let scale = animation.step(elapsed);
            let finished = animation.is_finished();
            self.viewport.set_scale(scale);
            trace!("scale animation frame: {scale}");
            if finished {
                debug!("scale animation finished at {scale}");
                self.animation = None;
            }
        }
        if let Some(fling) = self.fling.as_mut() {
            let step = fling.step(elapsed);
            self.viewport.set_offset(step.offset);
            trace!("fling frame: {:?}", step.offset);
            if step.finished {
                debug!("fling finished at {:?}", step.offset);
                self.fling = None;
            }
        }
        self.respond(before, false)
    }

    /// Toggles between the fitted and the enlarged view, anchoring `focal`
    /// (in viewport coordinates) when zooming in.
    ///
    /// Ignored while pinching or uninitialized. Returns `true` if a zoom
    /// animation started.
    pub fn toggle_zoom(&mut self, focal: Point) -> bool {
        let Some(fit) = self.viewport.fit_scales() else {
            return false;
        };
        if matches!(self.touch, Touch::Pinching { .. }) {
            return false;
        }
        self.stop_fling();
        self.set_touch(Touch::Idle);

        let zoom_in = !self.viewport.is_zoomed_in();
        self.viewport.set_zoomed_in(zoom_in);
        let target = if zoom_in {
            if let Some(offset) = self.viewport.focal_offset(focal) {
                self.viewport.set_offset(offset);
            }
            fit.big()
        } else {
            fit.small()
        };
        let from = self.viewport.scale();
        debug!("zoom {} from {from} to {target}", if zoom_in { "in" } else { "out" });
        self.animation = Some(ScaleAnimation::new(
            from,
            target,
            self.config.animation_duration,
            self.config.easing,
        ));
        true
    }

    /// Scale and effective offset to draw with.
    #[must_use]
    pub fn current_transform(&self) -> ViewTransform {
        self.viewport.transform()
    }

    /// Full content-to-viewport transform to draw with.
    #[must_use]
    pub fn content_to_view(&self) -> Affine {
        self.viewport.content_to_view()
    }

    /// What the controller is doing right now.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.touch {
            Touch::Pinching { .. } => GesturePhase::Pinching,
            Touch::Dragging => GesturePhase::Dragging,
            Touch::Idle if self.fling.is_some() => GesturePhase::Flinging,
            Touch::Idle if self.animation.is_some() => GesturePhase::Animating,
            Touch::Idle => GesturePhase::Idle,
        }
    }

    /// Returns `true` while an animation or fling wants display frames.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.animation.is_some() || self.fling.is_some()
    }

    /// Revision of the underlying geometry.
    ///
    /// Bumps on every model change, including ones that do not move any
    /// pixel yet (such as the zoom flag flipping before an animation frame).
    /// Use [`Response::redraw`] to decide when to draw.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.viewport.revision()
    }

    /// Snapshot for inspectors and tests.
    #[must_use]
    pub fn debug_info(&self) -> PhotoViewDebugInfo {
        PhotoViewDebugInfo {
            viewport: self.viewport.debug_info(),
            phase: self.phase(),
            contacts: self.recognizer.contact_count(),
            animation: self.animation,
            fling: self.fling,
        }
    }

    fn apply(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Down { .. } => self.stop_fling(),
            Gesture::Drag { distance, .. } => self.drag(distance),
            Gesture::DoubleTap { position } => {
                self.toggle_zoom(position);
            }
            Gesture::PinchBegin { .. } => self.pinch_begin(),
            Gesture::PinchUpdate { factor, .. } => self.pinch_update(factor),
            Gesture::PinchEnd => {
                if matches!(self.touch, Touch::Pinching { .. }) {
                    self.set_touch(Touch::Idle);
                }
            }
            Gesture::Fling { velocity } => self.start_fling(velocity),
            Gesture::Release => {
                if self.touch == Touch::Dragging {
                    self.set_touch(Touch::Idle);
                }
            }
        }
    }

    fn drag(&mut self, distance: Vec2) {
        if matches!(self.touch, Touch::Pinching { .. }) {
            return;
        }
        self.stop_fling();
        if !self.viewport.is_zoomed_in() {
            return;
        }
        self.set_touch(Touch::Dragging);
        self.viewport.pan_by(distance);
    }

    fn start_fling(&mut self, velocity: Vec2) {
        self.set_touch(Touch::Idle);
        if !self.viewport.is_zoomed_in() {
            return;
        }
        let Some(bounds) = self.viewport.pan_bounds() else {
            return;
        };
        let fling = Fling::new(
            self.viewport.offset(),
            velocity,
            bounds.to_rect(),
            self.config.fling_deceleration,
        );
        if fling.is_finished() {
            return;
        }
        debug!("fling from {:?} at {velocity:?}", fling.offset());
        self.fling = Some(fling);
    }

    fn pinch_begin(&mut self) {
        self.stop_fling();
        if self.animation.take().is_some() {
            debug!("scale animation interrupted by pinch");
        }
        self.set_touch(Touch::Pinching {
            base_scale: self.viewport.scale(),
        });
    }

    fn pinch_update(&mut self, factor: f64) {
        let Touch::Pinching { base_scale } = self.touch else {
            return;
        };
        self.viewport.set_zoomed_in(true);
        self.viewport
            .set_pinch_scale(base_scale * factor, self.config.pinch_scale);
    }

    fn stop_fling(&mut self) {
        if let Some(fling) = self.fling.take() {
            debug!("fling stopped at {:?}", fling.offset());
        }
    }

    fn reset_motion(&mut self) {
        self.stop_fling();
        self.animation = None;
        self.set_touch(Touch::Idle);
    }

    fn set_touch(&mut self, touch: Touch) {
        if self.touch != touch {
            debug!("touch {:?} -> {touch:?}", self.touch);
            self.touch = touch;
        }
    }

    fn drawn(&self) -> Drawn {
        Drawn {
            transform: self.viewport.transform(),
            content_to_view: self.viewport.content_to_view(),
        }
    }

    fn respond(&self, before: Drawn, consumed: bool) -> Response {
        Response {
            consumed,
            redraw: self.drawn() != before,
            needs_frame: self.needs_frame(),
        }
    }
}

/// Snapshot of a [`PhotoView`].
#[derive(Clone, Copy, Debug)]
pub struct PhotoViewDebugInfo {
    /// Geometry state.
    pub viewport: ImageViewportDebugInfo,
    /// Current phase.
    pub phase: GesturePhase,
    /// Contacts currently down.
    pub contacts: usize,
    /// Running scale animation, if any.
    pub animation: Option<ScaleAnimation>,
    /// Running fling, if any.
    pub fling: Option<Fling>,
}
