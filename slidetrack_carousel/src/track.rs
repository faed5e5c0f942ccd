// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide geometry: centering offsets, edge clamping, and nearest-slide resolution.

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::surface::RenderSurface;

/// Measured geometry of a slide track.
///
/// A `Track` is a snapshot of what the render surface reported: the visible
/// container width, the total frame width, and one width per item. It is
/// re-measured on construction, resize, and every structural change; it is
/// never patched in place.
///
/// Widths that are negative or not finite are stored as `0.0`, so every query
/// returns a finite offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    container_width: f64,
    frame_width: f64,
    widths: Vec<f64>,
}

impl Track {
    /// Creates a track from measured container, frame, and item widths.
    #[must_use]
    pub fn new(container_width: f64, frame_width: f64, widths: Vec<f64>) -> Self {
        let mut track = Self {
            container_width: sanitize(container_width),
            frame_width: sanitize(frame_width),
            widths,
        };
        track.widths.iter_mut().for_each(|w| *w = sanitize(*w));
        track
    }

    /// Creates a track whose frame width is the sum of the item widths.
    #[must_use]
    pub fn from_widths(container_width: f64, widths: Vec<f64>) -> Self {
        let mut track = Self::new(container_width, 0.0, widths);
        track.frame_width = track.widths.iter().sum();
        track
    }

    /// Number of measured items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Returns `true` if no items were measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Visible container width.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Total frame width used for edge clamping.
    #[must_use]
    pub fn frame_width(&self) -> f64 {
        self.frame_width
    }

    /// Measured item widths in item order.
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Range that offsets are clamped into when sticking to edges.
    ///
    /// The upper bound is always `0.0` (first item flush with the container's
    /// leading edge). The lower bound reveals the last item flush with the
    /// trailing edge, or `0.0` when the frame fits inside the container.
    #[must_use]
    pub fn edge_range(&self) -> RangeInclusive<f64> {
        edge_range(self.container_width, self.frame_width)
    }

    /// Offset that centers item `index` in the container.
    ///
    /// See [`offset_for_index`]; this variant clamps against the measured frame
    /// width rather than the sum of item widths.
    #[must_use]
    pub fn offset_for(&self, index: usize, stick_to_edges: bool) -> f64 {
        centered_offset(
            index,
            self.container_width,
            &self.widths,
            self.frame_width,
            stick_to_edges,
        )
    }

    /// Index of the item whose unclamped rest offset is closest to `live_offset`.
    ///
    /// Ties go to the lower index. Returns `0` for an empty track.
    #[must_use]
    pub fn nearest_index(&self, live_offset: f64) -> usize {
        if self.widths.is_empty() || self.container_width <= 0.0 {
            return 0;
        }
        let half_container = self.container_width * 0.5;
        let mut prefix = 0.0;
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, width) in self.widths.iter().enumerate() {
            let rest = half_container - prefix - width * 0.5;
            let distance = (rest - live_offset).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
            prefix += width;
        }
        best
    }

    /// Replaces this snapshot with fresh measurements from `surface`.
    ///
    /// The width buffer is reused.
    pub fn remeasure<T, S: RenderSurface<T> + ?Sized>(&mut self, surface: &S) {
        self.container_width = sanitize(surface.container_width());
        self.frame_width = sanitize(surface.frame_width());
        self.widths.clear();
        surface.measure_item_widths(&mut self.widths);
        self.widths.iter_mut().for_each(|w| *w = sanitize(*w));
    }
}

/// Offset that centers item `index` inside a container of `container_width`.
///
/// The offset is `container_width / 2 - prefix - width / 2`, where `prefix` is
/// the summed width of the items before `index`. An `index` at or past the end
/// centers a zero-width slot after the last item.
///
/// With `stick_to_edges`, the result is clamped into
/// `[min(0, container_width - total), 0]`, where `total` is the summed width.
/// Without it, the result is unclamped so drags can overscroll.
///
/// An empty `widths` slice or a non-positive container width yields `0.0`.
///
/// ```
/// use slidetrack_carousel::offset_for_index;
///
/// let widths = [100.0, 100.0, 100.0];
/// assert_eq!(offset_for_index(0, 100.0, &widths, false), 0.0);
/// assert_eq!(offset_for_index(2, 100.0, &widths, false), -200.0);
/// // Clamped so the last item sits flush with the trailing edge.
/// assert_eq!(offset_for_index(2, 150.0, &widths, true), -150.0);
/// ```
#[must_use]
pub fn offset_for_index(
    index: usize,
    container_width: f64,
    widths: &[f64],
    stick_to_edges: bool,
) -> f64 {
    let total: f64 = widths.iter().copied().map(sanitize).sum();
    centered_offset(index, sanitize(container_width), widths, total, stick_to_edges)
}

fn centered_offset(
    index: usize,
    container_width: f64,
    widths: &[f64],
    frame_width: f64,
    stick_to_edges: bool,
) -> f64 {
    if widths.is_empty() || container_width <= 0.0 {
        return 0.0;
    }
    let end = index.min(widths.len());
    let prefix: f64 = widths[..end].iter().copied().map(sanitize).sum();
    let width = widths.get(index).copied().map_or(0.0, sanitize);
    let offset = container_width * 0.5 - prefix - width * 0.5;
    if stick_to_edges {
        let range = edge_range(container_width, frame_width);
        offset.clamp(*range.start(), *range.end())
    } else {
        offset
    }
}

fn edge_range(container_width: f64, frame_width: f64) -> RangeInclusive<f64> {
    (container_width - frame_width).min(0.0)..=0.0
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn empty_widths_yield_zero() {
        assert_eq!(offset_for_index(0, 300.0, &[], true), 0.0);
        assert_eq!(offset_for_index(3, 300.0, &[], false), 0.0);
        assert_eq!(Track::from_widths(300.0, vec![]).nearest_index(-50.0), 0);
    }

    #[test]
    fn zero_width_container_yields_zero() {
        let widths = [50.0, 50.0];
        assert_eq!(offset_for_index(1, 0.0, &widths, true), 0.0);
        assert_eq!(offset_for_index(1, 0.0, &widths, false), 0.0);
    }

    #[test]
    fn symmetric_layout_unclamped() {
        let widths = [100.0, 100.0, 100.0];
        assert_eq!(offset_for_index(0, 300.0, &widths, false), 100.0);
        assert_eq!(offset_for_index(1, 300.0, &widths, false), 0.0);
        assert_eq!(offset_for_index(2, 300.0, &widths, false), -100.0);
    }

    #[test]
    fn symmetric_layout_clamped_when_frame_fills_container() {
        // Frame exactly fills the container, so the clamp range is [0, 0].
        let widths = [100.0, 100.0, 100.0];
        for index in 0..3 {
            assert_eq!(offset_for_index(index, 300.0, &widths, true), 0.0);
        }
    }

    #[test]
    fn clamp_keeps_edges_flush() {
        let track = Track::from_widths(100.0, vec![100.0, 100.0, 100.0, 100.0]);
        assert_eq!(track.edge_range(), -300.0..=0.0);

        assert_eq!(track.offset_for(0, true), 0.0);
        assert_eq!(track.offset_for(1, true), -100.0);
        assert_eq!(track.offset_for(3, true), -300.0);

        let wide = Track::from_widths(250.0, vec![100.0, 100.0, 100.0, 100.0]);
        // Raw offset for index 0 would reveal empty space on the left.
        assert_eq!(wide.offset_for(0, false), 75.0);
        assert_eq!(wide.offset_for(0, true), 0.0);
        // Raw offset for the last item would reveal space on the right.
        assert_eq!(wide.offset_for(3, false), -225.0);
        assert_eq!(wide.offset_for(3, true), -150.0);
    }

    #[test]
    fn frame_narrower_than_container_pins_to_zero() {
        let track = Track::from_widths(500.0, vec![50.0, 50.0]);
        assert_eq!(track.edge_range(), 0.0..=0.0);
        assert_eq!(track.offset_for(1, true), 0.0);
        assert_eq!(track.offset_for(1, false), 175.0);
    }

    #[test]
    fn one_past_last_uses_zero_width() {
        let widths = [50.0, 50.0, 50.0, 50.0];
        assert_eq!(offset_for_index(4, 200.0, &widths, false), -100.0);
        // Indices further out saturate at the same slot.
        assert_eq!(offset_for_index(9, 200.0, &widths, false), -100.0);
    }

    #[test]
    fn uneven_widths() {
        let widths = [40.0, 120.0, 60.0];
        // 100 - 40 - 60
        assert_eq!(offset_for_index(1, 200.0, &widths, false), 0.0);
        // 100 - 160 - 30
        assert_eq!(offset_for_index(2, 200.0, &widths, false), -90.0);
    }

    #[test]
    fn measured_frame_width_drives_clamp() {
        // The surface may report a frame wider than the items (gaps, padding).
        let track = Track::new(100.0, 400.0, vec![100.0, 100.0]);
        assert_eq!(track.edge_range(), -300.0..=0.0);
        assert_eq!(track.offset_for(1, true), -100.0);
    }

    #[test]
    fn degenerate_widths_are_sanitized() {
        let track = Track::new(f64::NAN, -5.0, vec![f64::INFINITY, -10.0, 20.0]);
        assert_eq!(track.container_width(), 0.0);
        assert_eq!(track.frame_width(), 0.0);
        assert_eq!(track.widths(), &[0.0, 0.0, 20.0]);
        assert_eq!(track.offset_for(2, true), 0.0);
        assert!(offset_for_index(1, 100.0, &[f64::NAN, 10.0], false).is_finite());
    }

    #[test]
    fn nearest_picks_exact_match() {
        let track = Track::from_widths(100.0, vec![100.0, 100.0, 100.0]);
        for index in 0..3 {
            let rest = track.offset_for(index, false);
            assert_eq!(track.nearest_index(rest), index);
        }
    }

    #[test]
    fn nearest_picks_closest() {
        let track = Track::from_widths(100.0, vec![100.0, 100.0, 100.0]);
        assert_eq!(track.nearest_index(-120.0), 1);
        assert_eq!(track.nearest_index(-180.0), 2);
        // Overscroll beyond either end resolves to the end items.
        assert_eq!(track.nearest_index(400.0), 0);
        assert_eq!(track.nearest_index(-900.0), 2);
    }

    #[test]
    fn nearest_tie_goes_to_lower_index() {
        let track = Track::from_widths(100.0, vec![100.0, 100.0, 100.0]);
        assert_eq!(track.nearest_index(-50.0), 0);
        assert_eq!(track.nearest_index(-150.0), 1);
    }
}
