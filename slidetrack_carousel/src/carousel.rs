// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use log::{debug, trace};
use slidetrack_event_state::drag::AxisLock;
use slidetrack_signal::{Signal, Subscription};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, ListenerError};
use crate::gesture::GestureState;
use crate::surface::{CursorAffordance, Mount, RenderSurface};
use crate::track::Track;

/// Slide position controller.
///
/// A `Carousel` owns the items, the authoritative current index, and the
/// measured [`Track`]. Every index change recomputes the translation offset,
/// pushes it to the [`RenderSurface`], and notifies change listeners.
///
/// `T` is the item handle type; equality (`PartialEq`) is used as item
/// identity when inserting.
#[derive(Debug)]
pub struct Carousel<T, S> {
    pub(crate) config: CarouselConfig,
    pub(crate) surface: S,
    pub(crate) items: Vec<T>,
    pub(crate) track: Track,
    pub(crate) current: usize,
    pub(crate) offset: f64,
    pub(crate) gesture: GestureState,
    changes: Signal<usize, ListenerError>,
}

impl<T, S: RenderSurface<T>> Carousel<T, S> {
    /// Builds a carousel over `items` rendered by `surface`.
    ///
    /// The frame is built, the configured transition and cursor are applied,
    /// geometry is measured, and the track slides to `config.start_index`
    /// (clamped). No change notification is published.
    pub fn new(surface: S, items: Vec<T>, config: CarouselConfig) -> Self {
        let mut carousel = Self {
            config,
            surface,
            items,
            track: Track::default(),
            current: 0,
            offset: 0.0,
            gesture: GestureState::default(),
            changes: Signal::new(),
        };
        carousel.surface.rebuild_frame(&carousel.items);
        carousel.restore_transition();
        let cursor = if carousel.config.draggable {
            CursorAffordance::Grab
        } else {
            CursorAffordance::Auto
        };
        carousel.surface.apply_cursor(cursor);
        carousel.reset_geometry();
        carousel.current = carousel.clamp_index(carousel.config.start_index);
        carousel.slide_to_current();
        debug!(
            "carousel: mounted {} items at index {}",
            carousel.items.len(),
            carousel.current
        );
        carousel
    }

    /// Resolves `config.selector` through `mount` and builds a carousel there.
    ///
    /// Fails with [`CarouselError::SelectorNotFound`] when nothing matches.
    pub fn mount<M>(mount: &mut M, config: CarouselConfig) -> Result<Self, CarouselError>
    where
        M: Mount<T, Surface = S>,
    {
        let Some((surface, items)) = mount.resolve(&config.selector) else {
            return Err(CarouselError::SelectorNotFound {
                selector: config.selector,
            });
        };
        Ok(Self::new(surface, items, config))
    }

    /// Current slide index.
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current
    }

    /// Offset last applied to the surface.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the carousel has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Geometry measured at the last reset.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Configuration the carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    ///
    /// Layout changes made through this handle take effect on the next
    /// [`resize`](Self::resize) or structural change.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Axis decision of the active gesture.
    #[must_use]
    pub fn drag_axis(&self) -> AxisLock {
        self.gesture.session.axis()
    }

    /// Registers a change listener.
    ///
    /// If an index was already published, the listener receives it before this
    /// returns. Listeners run in registration order; a failing listener stops
    /// delivery to the ones after it and its error is returned by the operation
    /// that triggered the change.
    pub fn on_change<F>(&self, callback: F) -> Result<Subscription, CarouselError>
    where
        F: Fn(usize) -> Result<(), ListenerError> + 'static,
    {
        self.changes
            .subscribe(move |index: &usize| callback(*index))
            .map_err(|source| CarouselError::Listener { source })
    }

    /// Moves to `index`, clamped into the configured bound.
    ///
    /// Returns `true` if the current index changed. When it does not, nothing
    /// is recomputed, applied, or published.
    pub fn go_to(&mut self, index: usize) -> Result<bool, CarouselError> {
        let target = self.clamp_index(index);
        if target == self.current {
            return Ok(false);
        }
        debug!("carousel: go_to {} -> {}", self.current, target);
        self.current = target;
        self.slide_to_current();
        self.publish_current()?;
        Ok(true)
    }

    /// Moves forward by `n` slides.
    pub fn next(&mut self, n: usize) -> Result<bool, CarouselError> {
        self.go_to(self.current.saturating_add(n))
    }

    /// Moves backward by `n` slides, stopping at the first.
    pub fn prev(&mut self, n: usize) -> Result<bool, CarouselError> {
        self.go_to(self.current.saturating_sub(n))
    }

    /// Moves by a signed number of slides.
    pub fn move_by(&mut self, delta: isize) -> Result<bool, CarouselError> {
        if delta >= 0 {
            self.next(delta.unsigned_abs())
        } else {
            self.prev(delta.unsigned_abs())
        }
    }

    /// Removes the item at `index` and returns it.
    ///
    /// Accepts `0..len`. The current index steps back when the removed item is
    /// at or before it, so the same visual item stays current where possible.
    pub fn remove(&mut self, index: usize) -> Result<T, CarouselError> {
        let len = self.items.len();
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }
        let previous = self.current;
        if index <= self.current {
            self.current = self.current.saturating_sub(1);
        }
        let item = self.items.remove(index);
        self.current = self.clamp_index(self.current);
        debug!("carousel: removed item {index}, {} left", self.items.len());
        self.rebuild();
        self.publish_if_moved(previous)?;
        Ok(item)
    }

    /// Re-measures geometry and re-applies the current offset.
    pub fn resize(&mut self) {
        self.reset_geometry();
        self.slide_to_current();
    }

    /// Applies the offset of the current index using the last measured geometry.
    pub fn slide_to_current(&mut self) {
        let offset = self
            .track
            .offset_for(self.current, self.config.stick_to_edges);
        self.apply_offset(offset);
    }

    /// Tears the carousel down and returns its surface.
    ///
    /// Gesture listeners are detached, the cursor is reset, and change
    /// listeners are dropped. With `restore_markup`, the surface is asked to
    /// unwrap its containers.
    pub fn destroy(mut self, restore_markup: bool) -> S {
        self.gesture.reset();
        self.surface.detach_listeners();
        self.surface.apply_cursor(CursorAffordance::Auto);
        if restore_markup {
            self.surface.restore_markup(&self.items);
        }
        self.changes.clear();
        debug!("carousel: destroyed (restore_markup: {restore_markup})");
        self.surface
    }

    pub(crate) fn apply_offset(&mut self, offset: f64) {
        trace!("carousel: offset {offset}");
        self.offset = offset;
        self.surface.apply_offset(offset);
    }

    pub(crate) fn restore_transition(&mut self) {
        self.surface
            .apply_transition(self.config.duration, &self.config.easing);
    }

    pub(crate) fn suppress_transition(&mut self) {
        self.surface.apply_transition(0, &self.config.easing);
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.config.index_bound.max_index(self.items.len()))
    }

    fn reset_geometry(&mut self) {
        self.track.remeasure::<T, S>(&self.surface);
        debug!(
            "carousel: measured {} items, container {}, frame {}",
            self.track.len(),
            self.track.container_width(),
            self.track.frame_width()
        );
    }

    fn rebuild(&mut self) {
        self.surface.rebuild_frame(&self.items);
        self.reset_geometry();
        self.slide_to_current();
    }

    fn publish_if_moved(&self, previous: usize) -> Result<(), CarouselError> {
        if previous == self.current {
            return Ok(());
        }
        self.publish_current()
    }

    fn publish_current(&self) -> Result<(), CarouselError> {
        self.changes
            .publish(self.current)
            .map_err(|err| CarouselError::Listener {
                source: err.into_inner(),
            })
    }
}

impl<T: PartialEq, S: RenderSurface<T>> Carousel<T, S> {
    /// Inserts `item` at `index`.
    ///
    /// Accepts `0..=len`; `len` appends. Fails with
    /// [`CarouselError::DuplicateItem`] if an equal item is already present.
    /// The current index steps forward when `index` is at or before it.
    pub fn insert(&mut self, item: T, index: usize) -> Result<(), CarouselError> {
        let len = self.items.len();
        if index > len {
            return Err(CarouselError::OutOfRange { index, len });
        }
        if let Some(existing) = self.items.iter().position(|i| *i == item) {
            return Err(CarouselError::DuplicateItem { index: existing });
        }
        let previous = self.current;
        if index <= self.current {
            self.current += 1;
        }
        self.items.insert(index, item);
        self.current = self.clamp_index(self.current);
        debug!("carousel: inserted item at {index}, {} total", self.items.len());
        self.rebuild();
        self.publish_if_moved(previous)
    }

    /// Inserts `item` after the last item.
    pub fn append(&mut self, item: T) -> Result<(), CarouselError> {
        self.insert(item, self.items.len())
    }

    /// Inserts `item` before the first item.
    pub fn prepend(&mut self, item: T) -> Result<(), CarouselError> {
        self.insert(item, 0)
    }
}
