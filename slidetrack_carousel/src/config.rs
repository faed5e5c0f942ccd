// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// Default transition duration in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 200;

/// Default transition easing.
pub const DEFAULT_EASING: &str = "ease-out";

/// Default mount selector.
pub const DEFAULT_SELECTOR: &str = ".carousel";

/// Upper bound used when clamping the current index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBound {
    /// Clamp into `0..=len`. The slot one past the last item is reachable and
    /// centers an empty position after the last item.
    #[default]
    Permissive,
    /// Clamp into `0..len` (`0` for an empty carousel).
    Strict,
}

impl IndexBound {
    /// Largest reachable index for a carousel of `len` items.
    #[must_use]
    pub fn max_index(self, len: usize) -> usize {
        match self {
            Self::Permissive => len,
            Self::Strict => len.saturating_sub(1),
        }
    }
}

/// Construction options for a [`Carousel`](crate::Carousel).
///
/// Deserialization fills unset fields with their defaults and ignores unknown
/// fields. Both `snake_case` and `camelCase` field names are accepted.
///
/// ```
/// use slidetrack_carousel::CarouselConfig;
///
/// let config = CarouselConfig::default().with_duration(350).with_draggable(false);
/// assert_eq!(config.duration, 350);
/// assert_eq!(config.easing, "ease-out");
/// assert!(config.stick_to_edges);
/// assert!(!config.draggable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Selector used by [`Carousel::mount`](crate::Carousel::mount).
    pub selector: String,
    /// Transition duration in milliseconds.
    pub duration: u32,
    /// Transition easing, passed through to the surface.
    pub easing: String,
    /// Keep the frame from revealing empty space past either end.
    #[serde(alias = "stickToEdges")]
    pub stick_to_edges: bool,
    /// Whether pointer and touch drags move the track.
    pub draggable: bool,
    /// Index shown after construction, clamped into range.
    #[serde(alias = "startIndex")]
    pub start_index: usize,
    /// Upper bound policy for the current index.
    #[serde(alias = "indexBound")]
    pub index_bound: IndexBound,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            selector: String::from(DEFAULT_SELECTOR),
            duration: DEFAULT_DURATION_MS,
            easing: String::from(DEFAULT_EASING),
            stick_to_edges: true,
            draggable: true,
            start_index: 0,
            index_bound: IndexBound::default(),
        }
    }
}

impl CarouselConfig {
    /// Sets the mount selector.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Sets the transition duration in milliseconds.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration = duration_ms;
        self
    }

    /// Sets the transition easing.
    #[must_use]
    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Sets whether offsets are clamped to the frame edges.
    #[must_use]
    pub fn with_stick_to_edges(mut self, stick: bool) -> Self {
        self.stick_to_edges = stick;
        self
    }

    /// Sets whether drags move the track.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Sets the index shown after construction.
    #[must_use]
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Sets the index bound policy.
    #[must_use]
    pub fn with_index_bound(mut self, bound: IndexBound) -> Self {
        self.index_bound = bound;
        self
    }
}
