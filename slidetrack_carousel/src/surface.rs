// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator seams: the render surface the carousel drives and the mount
//! lookup it is created from.

use alloc::vec::Vec;

/// Cursor affordance shown over the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorAffordance {
    /// The track can be grabbed.
    Grab,
    /// A mouse drag is in progress.
    Grabbing,
    /// Platform default; used when dragging is disabled or after teardown.
    #[default]
    Auto,
}

/// Render and layout collaborator driven by a [`Carousel`](crate::Carousel).
///
/// Implementations own the visual containers. Measurements must reflect the
/// current layout synchronously; the carousel calls them right after
/// [`rebuild_frame`](Self::rebuild_frame) and on resize.
pub trait RenderSurface<T> {
    /// Width of the visible container.
    fn container_width(&self) -> f64;

    /// Total width of the sliding frame.
    fn frame_width(&self) -> f64;

    /// Appends the width of every item, in item order, to `out`.
    ///
    /// `out` is empty on entry.
    fn measure_item_widths(&self, out: &mut Vec<f64>);

    /// Applies a horizontal translation to the sliding frame.
    fn apply_offset(&mut self, offset: f64);

    /// Configures the animated transition. A `duration_ms` of `0` disables it.
    ///
    /// `easing` is passed through verbatim.
    fn apply_transition(&mut self, duration_ms: u32, easing: &str);

    /// Shows a cursor affordance over the track.
    fn apply_cursor(&mut self, cursor: CursorAffordance);

    /// Regenerates per-item wrappers after a structural change.
    fn rebuild_frame(&mut self, items: &[T]);

    /// Detaches platform gesture listeners. Called once on teardown.
    fn detach_listeners(&mut self) {}

    /// Unwraps the visual containers, leaving the original item markup.
    fn restore_markup(&mut self, items: &[T]) {
        let _ = items;
    }
}

/// Resolves a selector to a render surface and its initial items.
pub trait Mount<T> {
    /// Surface type produced for a resolved mount point.
    type Surface: RenderSurface<T>;

    /// Looks up `selector`. Returns `None` when nothing matches.
    fn resolve(&mut self, selector: &str) -> Option<(Self::Surface, Vec<T>)>;
}
