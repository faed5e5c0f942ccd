// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slidetrack_event_state --heading-base-level=0

//! Slidetrack Event State: drag session state for horizontal slide tracks.
//!
//! This crate provides a small state record for pointer drags that move a
//! horizontal track. It answers three questions across a stream of pointer
//! positions:
//!
//! - Where did the drag start, and what was the track offset at that moment?
//! - Is this gesture a horizontal drag or a vertical scroll-through
//!   ([`drag::AxisLock`])?
//! - How far has the pointer travelled horizontally since the start?
//!
//! It does not know about items, widths, or snapping. Those live in
//! `slidetrack_carousel`, which feeds pointer positions into a
//! [`drag::DragSession`] and turns the displacement into a track offset.
//!
//! ## Drag Sessions
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use slidetrack_event_state::drag::{AxisLock, DragSession};
//!
//! let mut drag = DragSession::default();
//!
//! // Touch down at (100, 50) while the track sits at offset -20.
//! drag.start(Point::new(100.0, 50.0), -20.0);
//!
//! // First move is mostly horizontal, so the gesture locks horizontal.
//! let displacement = drag.update(Point::new(70.0, 52.0)).unwrap();
//! assert_eq!(drag.axis(), AxisLock::Horizontal);
//! assert_eq!(displacement, 30.0);
//!
//! // The track follows the pointer from the starting offset.
//! assert_eq!(drag.starting_offset - displacement, -50.0);
//! # }
//! # #[cfg(feature = "drag")]
//! # example();
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag session tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
