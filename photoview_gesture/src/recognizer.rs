// Copyright 2025 the Photoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::RecognizerConfig;
use crate::drag::DragState;
use crate::pinch::{PinchState, PinchTransition};
use crate::pointer::{PointerEvent, PointerId, PointerPhase};
use crate::tap::TapState;
use crate::velocity::VelocityTracker;

/// A classified gesture, produced from one pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A first contact touched down (and did not complete a double-tap).
    Down {
        /// Press position.
        position: Point,
    },
    /// A single contact is dragging.
    Drag {
        /// Current contact position.
        position: Point,
        /// Previous reported position minus the current one.
        distance: Vec2,
    },
    /// A second press completed a double-tap.
    DoubleTap {
        /// Position of the second press.
        position: Point,
    },
    /// Two contacts changed their span enough to start a pinch.
    PinchBegin {
        /// Midpoint between the two contacts.
        focus: Point,
    },
    /// The pinch span changed.
    PinchUpdate {
        /// Midpoint between the two contacts.
        focus: Point,
        /// Current span divided by the span when the pinch began.
        factor: f64,
    },
    /// The pinch lost a contact or the stream was cancelled.
    PinchEnd,
    /// The last contact lifted quickly after a drag.
    Fling {
        /// Release velocity in units per second (finger direction).
        velocity: Vec2,
    },
    /// The last contact lifted without a fling.
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Contact {
    id: PointerId,
    position: Point,
}

/// Classifies a raw multi-touch stream into [`Gesture`]s.
///
/// Pinch detection is consulted first: while two or more contacts are down,
/// no single-finger gesture (drag, double-tap, fling) is recognized. Once a
/// pinch or double-tap has been recognized, single-finger recognition stays
/// off until every contact has lifted.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: RecognizerConfig,
    contacts: SmallVec<[Contact; 4]>,
    drag: DragState,
    pinch: PinchState,
    taps: TapState,
    velocity: VelocityTracker,
    suppressed: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

impl GestureRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            contacts: SmallVec::new(),
            drag: DragState::default(),
            pinch: PinchState::default(),
            taps: TapState::default(),
            velocity: VelocityTracker::new(config.velocity_window_ms),
            suppressed: false,
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Returns `true` while a single contact is dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_scrolling()
    }

    /// Feeds one event and returns the gesture it completes, if any.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<Gesture> {
        match event.phase {
            PointerPhase::Down => self.on_down(event),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Up => self.on_up(event),
            PointerPhase::Cancel => self.cancel(),
        }
    }

    /// Drops every contact and all in-progress recognition.
    ///
    /// Returns [`Gesture::PinchEnd`] if a pinch was active, otherwise
    /// [`Gesture::Release`] if any contact was down.
    pub fn cancel(&mut self) -> Option<Gesture> {
        let was_pinching = self.pinch.end();
        let had_contacts = !self.contacts.is_empty();
        self.contacts.clear();
        self.drag.end();
        self.taps.reset();
        self.velocity.clear();
        self.suppressed = false;
        if was_pinching {
            Some(Gesture::PinchEnd)
        } else if had_contacts {
            Some(Gesture::Release)
        } else {
            None
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> Option<Gesture> {
        if let Some(contact) = self.contact_mut(event.pointer) {
            contact.position = event.position;
            return None;
        }
        self.contacts.push(Contact {
            id: event.pointer,
            position: event.position,
        });

        match self.contacts.len() {
            1 => {
                self.suppressed = false;
                self.velocity.clear();
                self.velocity.add(event.time_ms, event.position);
                self.drag.start(event.position);
                if self.taps.on_down(event.position, event.time_ms, &self.config) {
                    self.suppressed = true;
                    self.drag.end();
                    Some(Gesture::DoubleTap {
                        position: event.position,
                    })
                } else {
                    Some(Gesture::Down {
                        position: event.position,
                    })
                }
            }
            2 => {
                self.drag.end();
                self.taps.cancel_pending();
                self.velocity.clear();
                let span = self.span();
                self.pinch.track(span);
                None
            }
            _ => None,
        }
    }

    fn on_move(&mut self, event: &PointerEvent) -> Option<Gesture> {
        let contact = self.contact_mut(event.pointer)?;
        contact.position = event.position;

        if self.contacts.len() >= 2 {
            let (span, focus) = (self.span(), self.focus());
            return match self.pinch.update(span, self.config.pinch_span_slop)? {
                PinchTransition::Begin => {
                    self.suppressed = true;
                    Some(Gesture::PinchBegin { focus })
                }
                PinchTransition::Scale(factor) => Some(Gesture::PinchUpdate { focus, factor }),
            };
        }
        if self.suppressed {
            return None;
        }

        self.velocity.add(event.time_ms, event.position);
        let distance = self.drag.update(event.position, self.config.touch_slop)?;
        self.taps.cancel_pending();
        Some(Gesture::Drag {
            position: event.position,
            distance,
        })
    }

    fn on_up(&mut self, event: &PointerEvent) -> Option<Gesture> {
        let index = self.contacts.iter().position(|c| c.id == event.pointer)?;
        self.contacts.remove(index);

        match self.contacts.len() {
            0 => self.on_last_up(event),
            1 => {
                self.suppressed = true;
                self.pinch.end().then_some(Gesture::PinchEnd)
            }
            _ => {
                let span = self.span();
                self.pinch.rebase(span);
                None
            }
        }
    }

    fn on_last_up(&mut self, event: &PointerEvent) -> Option<Gesture> {
        let suppressed = core::mem::replace(&mut self.suppressed, false);
        let scrolling = self.drag.is_scrolling();
        self.drag.end();

        if suppressed {
            self.taps.cancel_pending();
            self.velocity.clear();
            return Some(Gesture::Release);
        }
        if !scrolling {
            self.taps.on_up(event.time_ms);
            self.velocity.clear();
            return Some(Gesture::Release);
        }

        self.taps.cancel_pending();
        self.velocity.add(event.time_ms, event.position);
        let velocity = self.velocity.estimate(self.config.max_fling_velocity);
        self.velocity.clear();
        let min = self.config.min_fling_velocity;
        if velocity.x.abs() > min || velocity.y.abs() > min {
            Some(Gesture::Fling { velocity })
        } else {
            Some(Gesture::Release)
        }
    }

    fn contact_mut(&mut self, id: PointerId) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == id)
    }

    fn span(&self) -> f64 {
        match (self.contacts.first(), self.contacts.get(1)) {
            (Some(a), Some(b)) => a.position.distance(b.position),
            _ => 0.0,
        }
    }

    fn focus(&self) -> Point {
        match (self.contacts.first(), self.contacts.get(1)) {
            (Some(a), Some(b)) => a.position.midpoint(b.position),
            (Some(a), None) => a.position,
            _ => Point::ORIGIN,
        }
    }
}
