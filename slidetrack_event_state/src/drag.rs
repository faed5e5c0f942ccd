// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: axis lock, horizontal displacement, and starting offset.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`], passing the pointer position
//!    and the track offset at that moment.
//! 2) Mouse drags have no axis ambiguity; call [`DragSession::force_axis`] with
//!    [`AxisLock::Horizontal`] right after starting.
//! 3) On each move, call [`DragSession::update`]. The first move of a touch
//!    gesture decides the axis; vertical gestures are ignored from then on.
//! 4) Finish with [`DragSession::end`], which returns the final displacement if
//!    the pointer ever moved horizontally, and resets the session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use slidetrack_event_state::drag::{AxisLock, DragSession};
//!
//! let mut drag = DragSession::default();
//! drag.start(Point::new(10.0, 20.0), 0.0);
//! assert!(drag.is_dragging());
//!
//! // Mostly vertical: the gesture becomes a scroll-through.
//! assert_eq!(drag.update(Point::new(12.0, 60.0)), None);
//! assert_eq!(drag.axis(), AxisLock::Vertical);
//!
//! // A tap or a scroll-through ends without a displacement.
//! assert_eq!(drag.end(), None);
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Axis decision for the current gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    /// No move has been seen yet.
    #[default]
    Undecided,
    /// The gesture drags the track.
    Horizontal,
    /// The gesture scrolls through; the track ignores it until it ends.
    Vertical,
}

impl AxisLock {
    /// Decides the axis from a displacement: horizontal only when the
    /// horizontal component strictly dominates.
    #[must_use]
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Tracks one drag gesture over a horizontal track.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragSession {
    /// Start position of the gesture.
    pub start_pos: Option<Point>,
    /// Last horizontal pointer position recorded while dragging horizontally.
    pub current_x: Option<f64>,
    /// Axis decision for this gesture.
    pub axis: AxisLock,
    /// Track offset at the moment the gesture started.
    pub starting_offset: f64,
}

impl DragSession {
    /// Start tracking a new gesture from the given position.
    ///
    /// Any previous session state is discarded.
    pub fn start(&mut self, pos: Point, starting_offset: f64) {
        *self = Self {
            start_pos: Some(pos),
            current_x: None,
            axis: AxisLock::Undecided,
            starting_offset,
        };
    }

    /// Fixes the axis decision without waiting for a move.
    ///
    /// Has no effect when no gesture is active.
    pub fn force_axis(&mut self, axis: AxisLock) {
        if self.is_dragging() {
            self.axis = axis;
        }
    }

    /// Record a new pointer position.
    ///
    /// Decides the axis on the first call of an undecided gesture. Returns the
    /// horizontal displacement `start.x - pos.x` while the gesture is
    /// horizontal, or `None` when idle or locked vertical.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        let start = self.start_pos?;
        if self.axis == AxisLock::Undecided {
            self.axis = AxisLock::from_delta(pos - start);
        }
        match self.axis {
            AxisLock::Horizontal => {
                self.current_x = Some(pos.x);
                Some(start.x - pos.x)
            }
            AxisLock::Undecided | AxisLock::Vertical => None,
        }
    }

    /// Horizontal displacement since the start, if a horizontal move was recorded.
    ///
    /// Positive when the pointer moved left.
    #[must_use]
    pub fn displacement(&self) -> Option<f64> {
        match (self.start_pos, self.current_x) {
            (Some(start), Some(x)) => Some(start.x - x),
            _ => None,
        }
    }

    /// End the gesture and reset state, returning the final displacement if any.
    pub fn end(&mut self) -> Option<f64> {
        let displacement = self.displacement();
        *self = Self::default();
        displacement
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns the axis decision for the current gesture.
    #[must_use]
    pub fn axis(&self) -> AxisLock {
        self.axis
    }
}
