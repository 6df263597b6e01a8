// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Photoview Motion: host-stepped motion primitives.
//!
//! This crate provides the two time-driven processes used by a zoomable image
//! viewport:
//!
//! - [`ScaleAnimation`]: a timed interpolation between two scale values,
//!   shaped by an [`Easing`] curve.
//! - [`Fling`]: an inertial offset trajectory that decelerates at a constant
//!   rate and stops hard at its bounds.
//!
//! Neither type owns a clock or schedules itself. Hosts call `step` once per
//! display frame with the elapsed time since the previous frame and stop when
//! the process reports it is finished. This keeps both processes
//! deterministic under test: a fake clock is just a sequence of
//! [`core::time::Duration`] values.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod easing;
mod fling;

pub use animation::ScaleAnimation;
pub use easing::Easing;
pub use fling::{DEFAULT_FLING_DECELERATION, Fling, FlingStep};
