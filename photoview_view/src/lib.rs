// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photoview View: the geometry model of a zoomable image viewport.
//!
//! This crate provides a small, headless model of one fixed-size image shown
//! inside one fixed-size viewport. It focuses on:
//! - The two canonical zoom levels ([`FitScales`]): `small` fits the whole
//!   image, `big` is the zoomed-in target.
//! - Pan limits ([`PanBounds`]) and the drag clamp used while zoomed in.
//! - The live transform state (scale, pan offset, zoom flag) and the
//!   [`ViewTransform`] / [`kurbo::Affine`] used when drawing.
//!
//! It does **not** interpret input or run animations. Callers are expected
//! to:
//! - Feed viewport resizes into [`ImageViewport::set_viewport_size`].
//! - Drive [`ImageViewport::set_scale`], [`ImageViewport::pan_by`] and friends
//!   from a gesture layer (for example the `photoview` controller).
//! - Compare [`ImageViewport::revision`] across calls to decide when to redraw.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use photoview_view::ImageViewport;
//!
//! // A 2000x1000 image inside a 1000x1000 viewport.
//! let mut view = ImageViewport::new(Size::new(2000.0, 1000.0));
//! view.set_viewport_size(Size::new(1000.0, 1000.0));
//!
//! let fit = view.fit_scales().unwrap();
//! assert_eq!(fit.small(), 0.5);
//! assert_eq!(fit.big(), 1.5);
//!
//! // Panning does nothing until the view is enlarged.
//! assert!(!view.pan_by(Vec2::new(50.0, 0.0)));
//!
//! view.set_zoomed_in(true);
//! view.set_scale(fit.big());
//! assert!(view.pan_by(Vec2::new(50.0, 0.0)));
//! assert_eq!(view.transform().offset, Vec2::new(-50.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform and applied about the viewport center.
//! - The pan offset is stored unscaled and multiplied by the zoom progress
//!   when drawing, so it fades out as the scale returns to the small fit.
//! - Pan limits are always evaluated at the big fit scale.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod modes;
mod viewport;

pub use fit::{DEFAULT_ZOOM_FACTOR, FitScales, PanBounds};
pub use modes::{FitAxis, PinchScaleMode};
pub use viewport::{ImageViewport, ImageViewportDebugInfo, ViewTransform};
