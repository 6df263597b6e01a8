// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photoview: a touch-driven controller for viewing one image.
//!
//! [`PhotoView`] shows a fixed-size image inside a fixed-size viewport and
//! lets the user:
//! - double-tap to toggle between the fitted and an enlarged view, with the
//!   tapped point anchored while the scale animates,
//! - drag the enlarged image, clamped so it never leaves the viewport,
//! - fling it, coasting to a stop without passing the pan limits,
//! - pinch to scale it freely.
//!
//! It is headless: the host forwards pointer events, resizes and frame ticks,
//! and draws with [`PhotoView::content_to_view`] whenever a [`Response`] asks
//! for a redraw.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use photoview::{GesturePhase, PhotoView, PointerEvent, ViewerConfig};
//!
//! let mut view = PhotoView::new(Size::new(2000.0, 1000.0), ViewerConfig::default());
//! let resp = view.on_viewport_resized(Size::new(1000.0, 1000.0));
//! assert!(resp.redraw);
//! assert_eq!(view.current_transform().scale, 0.5);
//!
//! // Double-tap in the middle.
//! let _ = view.on_pointer_event(&PointerEvent::down(0, (500.0, 500.0), 0));
//! let _ = view.on_pointer_event(&PointerEvent::up(0, (500.0, 500.0), 50));
//! let resp = view.on_pointer_event(&PointerEvent::down(0, (500.0, 500.0), 150));
//! assert!(resp.needs_frame);
//! assert_eq!(view.phase(), GesturePhase::Animating);
//! let _ = view.on_pointer_event(&PointerEvent::up(0, (500.0, 500.0), 200));
//!
//! // Drive display frames until the animation settles.
//! while view.needs_frame() {
//!     let _ = view.advance(Duration::from_millis(16));
//! }
//! assert_eq!(view.current_transform().scale, 1.5);
//! assert!(view.viewport().is_zoomed_in());
//! ```
//!
//! The building blocks live in their own crates and are re-exported here:
//! geometry in `photoview_view`, gesture recognition in `photoview_gesture`,
//! and animation/fling trajectories in `photoview_motion`.
//!
//! Diagnostics go through the [`log`] facade: phase changes and motion
//! start/stop at `debug`, per-frame values at `trace`.
//!
//! This crate is `no_std` compatible.

#![no_std]

mod config;
mod controller;
mod phase;

pub use config::ViewerConfig;
pub use controller::{PhotoView, PhotoViewDebugInfo};
pub use phase::{GesturePhase, Response};

pub use photoview_gesture::{Gesture, PointerEvent, PointerId, PointerPhase, RecognizerConfig};
pub use photoview_motion::Easing;
pub use photoview_view::{ImageViewport, PinchScaleMode, ViewTransform};
