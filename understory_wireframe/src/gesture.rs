// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-or-select gesture recognition over raw pointer events.
//!
//! ## States
//!
//! - *Idle*: no button held. Moves are hover probes.
//! - *Armed*: button pressed, pointer not yet moved.
//! - *Dragging*: button pressed and the pointer has moved. There is no
//!   movement threshold; any move counts.
//!
//! A release returns to *Idle*, committing the pan if the pointer moved. The
//! click that a host delivers after the release selects only if the gesture
//! never moved.
//!
//! A gesture that never sees its release (for example focus loss) is left
//! as-is and abandoned by the next press.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_wireframe::{GestureAction, PanGesture, PointerEvent};
//!
//! let mut g = PanGesture::new();
//! assert_eq!(g.handle(PointerEvent::Down(Point::new(10.0, 10.0))), GestureAction::Arm);
//! assert_eq!(
//!     g.handle(PointerEvent::Move(Point::new(30.0, 10.0))),
//!     GestureAction::Pan(Vec2::new(20.0, 0.0))
//! );
//! assert_eq!(
//!     g.handle(PointerEvent::Up(Point::new(30.0, 10.0))),
//!     GestureAction::Release { commit: true }
//! );
//! // The click that follows a drag is swallowed.
//! assert_eq!(g.handle(PointerEvent::Click(Point::new(30.0, 10.0))), GestureAction::Ignore);
//! ```

use kurbo::{Point, Vec2};

/// A raw pointer event on the overlay surface.
///
/// Positions are in device-independent units relative to the surface origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down(Point),
    /// Pointer moved, with or without a button held.
    Move(Point),
    /// Primary button released.
    Up(Point),
    /// Press and release on the surface, delivered after [`PointerEvent::Up`].
    Click(Point),
}

/// Cursor the host should show over the overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Content can be dragged.
    #[default]
    Grab,
    /// Content is being dragged.
    Grabbing,
}

/// What a single pointer event means for the wireframe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureAction {
    /// A press started a gesture; show [`Cursor::Grabbing`] and drop any
    /// uncommitted pan from an abandoned gesture.
    Arm,
    /// Hover probe at this position against the committed transform.
    Hover(Point),
    /// Pan by this total offset from the press position.
    Pan(Vec2),
    /// The gesture ended; commit the pan if `commit` and show [`Cursor::Grab`].
    Release {
        /// Whether the pointer moved during the gesture.
        commit: bool,
    },
    /// Select whatever is at this position against the committed transform.
    Select(Point),
    /// Nothing to do.
    Ignore,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Armed {
        start: Point,
    },
    Dragging {
        start: Point,
    },
}

/// Classifies pointer events into pans and selections.
#[derive(Clone, Debug, Default)]
pub struct PanGesture {
    phase: Phase,
    /// Whether the most recent gesture moved; swallows the trailing click.
    moved: bool,
}

impl PanGesture {
    /// Creates an idle recognizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between a press and its release.
    pub fn is_pressed(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Returns `true` once a pressed pointer has moved.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Forgets any in-flight gesture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances the state machine by one event.
    pub fn handle(&mut self, event: PointerEvent) -> GestureAction {
        match event {
            PointerEvent::Down(pos) => {
                self.phase = Phase::Armed { start: pos };
                self.moved = false;
                GestureAction::Arm
            }
            PointerEvent::Move(pos) => match self.phase {
                Phase::Idle => GestureAction::Hover(pos),
                Phase::Armed { start } | Phase::Dragging { start } => {
                    self.phase = Phase::Dragging { start };
                    self.moved = true;
                    GestureAction::Pan(pos - start)
                }
            },
            PointerEvent::Up(_) => {
                let commit = self.is_dragging();
                self.phase = Phase::Idle;
                GestureAction::Release { commit }
            }
            PointerEvent::Click(pos) => {
                let moved = core::mem::take(&mut self.moved);
                if moved || self.is_pressed() {
                    GestureAction::Ignore
                } else {
                    GestureAction::Select(pos)
                }
            }
        }
    }
}
