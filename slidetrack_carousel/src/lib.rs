// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slidetrack_carousel --heading-base-level=0

//! Slidetrack Carousel: a headless carousel engine.
//!
//! This crate owns the part of a carousel that has real state: which slide is
//! current, where the sliding frame sits, and how pointer drags move it. It is
//! renderer-agnostic. Host frameworks are responsible for:
//!
//! - Building the visual containers and measuring them, via [`RenderSurface`].
//! - Resolving a mount point from a selector, via [`Mount`].
//! - Forwarding raw pointer events to [`Carousel::handle_pointer`] and honoring
//!   the returned [`Response`].
//! - Calling [`Carousel::resize`] when layout changes.
//!
//! The core pieces are:
//!
//! - [`Track`] and [`offset_for_index`]: pure geometry. The offset that centers
//!   an item is `container / 2 - prefix - width / 2`, optionally clamped so no
//!   empty space shows past either end.
//! - [`Carousel`]: the slide position controller. It clamps navigation
//!   ([`Carousel::go_to`], [`Carousel::next`], [`Carousel::prev`],
//!   [`Carousel::move_by`]), keeps the current slide stable across
//!   [`Carousel::insert`] and [`Carousel::remove`], and publishes index changes
//!   to listeners registered with [`Carousel::on_change`].
//! - The gesture state machine in [`gesture`]: touch drags lock to an axis on
//!   their first move, mouse drags are always horizontal, and a release snaps
//!   to the nearest slide.
//!
//! ## Minimal example
//!
//! ```rust
//! use slidetrack_carousel::{Carousel, CarouselConfig, CursorAffordance, RenderSurface};
//!
//! /// A surface where every item is 50px wide inside a 200px container.
//! #[derive(Default)]
//! struct Fixed {
//!     count: usize,
//!     offset: f64,
//! }
//!
//! impl RenderSurface<&'static str> for Fixed {
//!     fn container_width(&self) -> f64 { 200.0 }
//!     fn frame_width(&self) -> f64 { 50.0 * self.count as f64 }
//!     fn measure_item_widths(&self, out: &mut Vec<f64>) {
//!         out.extend(std::iter::repeat_n(50.0, self.count));
//!     }
//!     fn apply_offset(&mut self, offset: f64) { self.offset = offset; }
//!     fn apply_transition(&mut self, _duration_ms: u32, _easing: &str) {}
//!     fn apply_cursor(&mut self, _cursor: CursorAffordance) {}
//!     fn rebuild_frame(&mut self, items: &[&'static str]) { self.count = items.len(); }
//! }
//!
//! let items = vec!["a", "b", "c", "d"];
//! let mut carousel = Carousel::new(Fixed::default(), items, CarouselConfig::default());
//! assert_eq!(carousel.current_slide(), 0);
//!
//! carousel.next(1).unwrap();
//! assert_eq!(carousel.current_slide(), 1);
//!
//! // Navigation clamps instead of failing.
//! carousel.move_by(-5).unwrap();
//! assert_eq!(carousel.current_slide(), 0);
//! ```
//!
//! ## Logging
//!
//! Index and structural changes are logged at `debug` level and gesture
//! transitions at `trace` level through the [`log`] facade. No logger is
//! installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
pub mod gesture;
mod surface;
mod track;

pub use carousel::Carousel;
pub use config::{
    CarouselConfig, DEFAULT_DURATION_MS, DEFAULT_EASING, DEFAULT_SELECTOR, IndexBound,
};
pub use error::{CarouselError, ListenerError};
pub use gesture::{PointerEvent, PointerKind, PointerPhase, Response};
pub use slidetrack_event_state::drag::AxisLock;
pub use slidetrack_signal::Subscription;
pub use surface::{CursorAffordance, Mount, RenderSurface};
pub use track::{Track, offset_for_index};
