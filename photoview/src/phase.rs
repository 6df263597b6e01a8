// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What the controller is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Nothing in progress.
    #[default]
    Idle,
    /// A single finger is panning the zoomed-in content.
    Dragging,
    /// Two fingers are scaling the content.
    Pinching,
    /// The double-tap zoom animation is running.
    Animating,
    /// An inertial fling is moving the content.
    Flinging,
}

/// Outcome of one call into [`crate::PhotoView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[must_use]
pub struct Response {
    /// The pointer event was taken by the controller.
    pub consumed: bool,
    /// The transform to draw with ([`crate::PhotoView::current_transform`]
    /// or [`crate::PhotoView::content_to_view`]) changed during this call;
    /// the host should redraw once.
    pub redraw: bool,
    /// An animation or fling is active; the host should call
    /// [`crate::PhotoView::advance`] on the next display frame.
    pub needs_frame: bool,
}
