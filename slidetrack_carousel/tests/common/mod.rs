// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test double: a surface that lays items out side by side and records
//! every call the carousel makes.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use slidetrack_carousel::{CursorAffordance, Mount, RenderSurface};

/// Item handle: identity is the id, the width is what the surface renders.
#[derive(Clone, Copy, Debug)]
pub struct Slide {
    pub id: u32,
    pub width: f64,
}

impl PartialEq for Slide {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

pub fn slides(widths: &[f64]) -> Vec<Slide> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| Slide {
            id: u32::try_from(i).unwrap(),
            width,
        })
        .collect()
}

pub fn ids(items: &[Slide]) -> Vec<u32> {
    items.iter().map(|s| s.id).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Offset(f64),
    Transition(u32, String),
    Cursor(CursorAffordance),
    Rebuild(usize),
    Detach,
    Restore(usize),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub container: f64,
    pub frame: Vec<Slide>,
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new(container: f64) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    pub fn offsets(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Offset(o) => Some(*o),
                _ => None,
            })
            .collect()
    }

    pub fn last_offset(&self) -> Option<f64> {
        self.offsets().last().copied()
    }

    pub fn last_cursor(&self) -> Option<CursorAffordance> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Cursor(cursor) => Some(*cursor),
            _ => None,
        })
    }

    pub fn last_transition(&self) -> Option<(u32, String)> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Transition(d, e) => Some((*d, e.clone())),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface<Slide> for RecordingSurface {
    fn container_width(&self) -> f64 {
        self.container
    }

    fn frame_width(&self) -> f64 {
        self.frame.iter().map(|s| s.width).sum()
    }

    fn measure_item_widths(&self, out: &mut Vec<f64>) {
        out.extend(self.frame.iter().map(|s| s.width));
    }

    fn apply_offset(&mut self, offset: f64) {
        self.calls.push(Call::Offset(offset));
    }

    fn apply_transition(&mut self, duration_ms: u32, easing: &str) {
        self.calls
            .push(Call::Transition(duration_ms, easing.to_string()));
    }

    fn apply_cursor(&mut self, cursor: CursorAffordance) {
        self.calls.push(Call::Cursor(cursor));
    }

    fn rebuild_frame(&mut self, items: &[Slide]) {
        self.frame = items.to_vec();
        self.calls.push(Call::Rebuild(items.len()));
    }

    fn detach_listeners(&mut self) {
        self.calls.push(Call::Detach);
    }

    fn restore_markup(&mut self, items: &[Slide]) {
        self.calls.push(Call::Restore(items.len()));
    }
}

/// Resolves exactly one selector.
pub struct OneMount {
    pub selector: &'static str,
    pub container: f64,
    pub widths: Vec<f64>,
}

impl Mount<Slide> for OneMount {
    type Surface = RecordingSurface;

    fn resolve(&mut self, selector: &str) -> Option<(RecordingSurface, Vec<Slide>)> {
        (selector == self.selector)
            .then(|| (RecordingSurface::new(self.container), slides(&self.widths)))
    }
}
