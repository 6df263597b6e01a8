// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer input fed into the recognizer.

use kurbo::Point;

/// Identifies one contact (finger) for the lifetime of its press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// What happened to a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The contact touched down.
    Down,
    /// The contact moved.
    Move,
    /// The contact lifted.
    Up,
    /// The host aborted the whole touch stream (all contacts).
    Cancel,
}

/// One raw pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Contact the event belongs to.
    pub pointer: PointerId,
    /// Kind of event.
    pub phase: PointerPhase,
    /// Contact position in viewport coordinates.
    pub position: Point,
    /// Event timestamp in milliseconds, from any monotonic clock.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(pointer: PointerId, phase: PointerPhase, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            phase,
            position,
            time_ms,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(pointer: u64, position: impl Into<Point>, time_ms: u64) -> Self {
        Self::new(PointerId(pointer), PointerPhase::Down, position.into(), time_ms)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(pointer: u64, position: impl Into<Point>, time_ms: u64) -> Self {
        Self::new(PointerId(pointer), PointerPhase::Move, position.into(), time_ms)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(pointer: u64, position: impl Into<Point>, time_ms: u64) -> Self {
        Self::new(PointerId(pointer), PointerPhase::Up, position.into(), time_ms)
    }

    /// Shorthand for a [`PointerPhase::Cancel`] event.
    #[must_use]
    pub fn cancel(time_ms: u64) -> Self {
        Self::new(PointerId(0), PointerPhase::Cancel, Point::ORIGIN, time_ms)
    }
}
