// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photoview Gesture: touch gesture recognition for a zoomable viewport.
//!
//! This crate turns a raw multi-touch stream ([`PointerEvent`]) into tagged
//! [`Gesture`] values. It is built from small state helpers, each usable on
//! its own:
//!
//! - [`drag`]: touch slop and per-move scroll distances for one contact
//! - [`pinch`]: span tracking and the cumulative pinch factor
//! - [`tap`]: double-tap matching across two presses
//! - [`velocity`]: release velocity from a sliding window of samples
//!
//! [`GestureRecognizer`] combines them with a fixed priority: pinch detection
//! sees every event first, and while two or more contacts are down no
//! single-finger gesture is recognized.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use photoview_gesture::{Gesture, GestureRecognizer, PointerEvent};
//!
//! let mut recognizer = GestureRecognizer::default();
//!
//! let down = recognizer.on_pointer_event(&PointerEvent::down(1, (100.0, 100.0), 0));
//! assert_eq!(down, Some(Gesture::Down { position: Point::new(100.0, 100.0) }));
//!
//! // Moving 30px right leaves the touch slop: a drag with distance
//! // "previous minus current".
//! let drag = recognizer.on_pointer_event(&PointerEvent::moved(1, (130.0, 100.0), 16));
//! assert_eq!(
//!     drag,
//!     Some(Gesture::Drag { position: Point::new(130.0, 100.0), distance: Vec2::new(-30.0, 0.0) })
//! );
//! ```
//!
//! The recognizer does not know about zoom levels or bounds; a controller
//! such as `photoview::PhotoView` decides what each gesture does.
//!
//! Timestamps are plain millisecond counters from any monotonic clock.
//!
//! This crate is `no_std`. Contacts and velocity samples live in inline
//! buffers (four contacts, sixteen samples); more than that spills to the
//! heap through `smallvec`, which then needs a global allocator.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
pub mod drag;
pub mod pinch;
mod pointer;
mod recognizer;
pub mod tap;
pub mod velocity;

pub use config::RecognizerConfig;
pub use pointer::{PointerEvent, PointerId, PointerPhase};
pub use recognizer::{Gesture, GestureRecognizer};
