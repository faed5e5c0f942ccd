// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture handling: turns touch and mouse streams into live track
//! offsets and snaps to the nearest slide on release.
//!
//! ## Lifecycle
//!
//! Each pointer kind runs `Idle -> Dragging -> Idle`:
//!
//! - **Down** starts a [`DragSession`]. Mouse drags show
//!   [`CursorAffordance::Grabbing`] and ask the host to suppress the platform's
//!   native drag.
//! - **Move** follows the pointer. The first touch move decides the axis; a
//!   vertical touch is left to native scrolling until it ends. Mouse drags are
//!   always horizontal. While following, the transition is disabled.
//! - **Up** (or **Leave**, which covers touch cancel, while active) restores the transition, resolves the
//!   nearest slide from the live offset, and moves there. A gesture that never
//!   moved horizontally is a tap and changes nothing.
//!
//! Only one gesture runs at a time. A **Down** while another gesture is active
//! is ignored, as are events from the other pointer kind.

use kurbo::Point;
use log::trace;
use slidetrack_event_state::drag::{AxisLock, DragSession};

use crate::carousel::Carousel;
use crate::error::CarouselError;
use crate::surface::{CursorAffordance, RenderSurface};

/// Pointer device that produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Touch contact.
    Touch,
    /// Mouse or pen with hover.
    Mouse,
}

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Touch start or mouse down.
    Down,
    /// Touch move or mouse move.
    Move,
    /// Touch end or mouse up.
    Up,
    /// Pointer left the track (or touch cancelled). Ends an active gesture.
    Leave,
}

/// A raw pointer event in track coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Device kind.
    pub kind: PointerKind,
    /// Event phase.
    pub phase: PointerPhase,
    /// Pointer position. Ignored for `Up` and `Leave`.
    pub position: Point,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(kind: PointerKind, phase: PointerPhase, position: Point) -> Self {
        Self {
            kind,
            phase,
            position,
        }
    }

    /// Touch start at `(x, y)`.
    #[must_use]
    pub fn touch_start(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Down, Point::new(x, y))
    }

    /// Touch move to `(x, y)`.
    #[must_use]
    pub fn touch_move(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Move, Point::new(x, y))
    }

    /// Touch end.
    #[must_use]
    pub fn touch_end() -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Up, Point::ZERO)
    }

    /// Mouse button down at `(x, y)`.
    #[must_use]
    pub fn mouse_down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Down, Point::new(x, y))
    }

    /// Mouse move to `(x, y)`.
    #[must_use]
    pub fn mouse_move(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Move, Point::new(x, y))
    }

    /// Mouse button up.
    #[must_use]
    pub fn mouse_up() -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Up, Point::ZERO)
    }

    /// Mouse left the track.
    #[must_use]
    pub fn mouse_leave() -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Leave, Point::ZERO)
    }

    /// Touch cancelled by the platform.
    #[must_use]
    pub fn touch_cancel() -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Leave, Point::ZERO)
    }
}

/// What the host should do with the platform event after handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Suppress the platform's default action (native drag, page scroll).
    pub prevent_default: bool,
}

impl Response {
    const PASS: Self = Self {
        prevent_default: false,
    };
    const PREVENT: Self = Self {
        prevent_default: true,
    };
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GestureState {
    active: Option<PointerKind>,
    pub(crate) session: DragSession,
}

impl GestureState {
    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    fn owns(&self, kind: PointerKind) -> bool {
        self.active == Some(kind)
    }

    /// Ends the gesture, returning the horizontal displacement if it ever
    /// dragged the track.
    fn end(&mut self) -> Option<f64> {
        self.active = None;
        self.session.end()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<T, S: RenderSurface<T>> Carousel<T, S> {
    /// Feeds one pointer event into the gesture state machine.
    ///
    /// Does nothing when the carousel is not draggable. Errors only come from
    /// change listeners notified when a release moves to a new slide.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<Response, CarouselError> {
        if !self.config.draggable {
            return Ok(Response::PASS);
        }
        match event.phase {
            PointerPhase::Down => Ok(self.pointer_down(event.kind, event.position)),
            PointerPhase::Move => Ok(self.pointer_move(event.kind, event.position)),
            PointerPhase::Up | PointerPhase::Leave => self.pointer_up(event.kind),
        }
    }

    fn pointer_down(&mut self, kind: PointerKind, pos: Point) -> Response {
        if let Some(active) = self.gesture.active {
            trace!("gesture: ignoring {kind:?} down, {active:?} gesture active");
            return Response::PASS;
        }
        self.gesture.active = Some(kind);
        self.gesture.session.start(pos, self.offset);
        trace!("gesture: {kind:?} down at ({}, {})", pos.x, pos.y);
        match kind {
            PointerKind::Touch => Response::PASS,
            PointerKind::Mouse => {
                self.gesture.session.force_axis(AxisLock::Horizontal);
                self.surface.apply_cursor(CursorAffordance::Grabbing);
                Response::PREVENT
            }
        }
    }

    fn pointer_move(&mut self, kind: PointerKind, pos: Point) -> Response {
        if !self.gesture.owns(kind) {
            return Response::PASS;
        }
        let was_undecided = self.gesture.session.axis() == AxisLock::Undecided;
        let first_live = self.gesture.session.displacement().is_none();
        let Some(displacement) = self.gesture.session.update(pos) else {
            if was_undecided {
                trace!("gesture: {kind:?} locked vertical");
            }
            return Response::PASS;
        };
        if was_undecided {
            trace!("gesture: {kind:?} locked horizontal");
        }
        let live = self.drag_base(kind) - displacement;
        if first_live {
            self.suppress_transition();
        }
        self.apply_offset(live);
        Response::PREVENT
    }

    fn pointer_up(&mut self, kind: PointerKind) -> Result<Response, CarouselError> {
        if !self.gesture.owns(kind) {
            return Ok(Response::PASS);
        }
        let base = self.drag_base(kind);
        let displacement = self.gesture.end();
        if kind == PointerKind::Mouse {
            self.surface.apply_cursor(CursorAffordance::Grab);
        }
        self.restore_transition();

        let Some(displacement) = displacement else {
            trace!("gesture: {kind:?} released without drag");
            return Ok(Response::PASS);
        };
        let live = base - displacement;
        let nearest = self.track.nearest_index(live);
        trace!("gesture: {kind:?} released at {live}, snapping to {nearest}");
        if !self.go_to(nearest)? {
            self.slide_to_current();
        }
        Ok(Response::PASS)
    }

    /// Offset a drag displacement is measured from: the unclamped rest offset
    /// of the current slide for touch, the offset at mouse down for mouse.
    fn drag_base(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Touch => self.track.offset_for(self.current, false),
            PointerKind::Mouse => self.gesture.session.starting_offset,
        }
    }
}
