// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;

/// Error type returned by change listeners registered with
/// [`Carousel::on_change`](crate::Carousel::on_change).
pub type ListenerError = Box<dyn core::error::Error + Send + Sync>;

/// Errors surfaced by [`Carousel`](crate::Carousel) operations.
///
/// Every variant except [`Listener`](Self::Listener) leaves the carousel
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// No mount point matched the configured selector.
    #[error("no mount point matches selector `{selector}`")]
    SelectorNotFound {
        /// The selector that was looked up.
        selector: String,
    },
    /// An insert or remove index was outside the allowed range.
    #[error("index {index} is out of range for {len} items")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Item count at the time of the call.
        len: usize,
    },
    /// The item to insert is already present.
    #[error("item is already present at index {index}")]
    DuplicateItem {
        /// Where the existing item sits.
        index: usize,
    },
    /// A change listener failed. The state change that triggered the
    /// notification has been applied; later listeners were not notified.
    #[error("change listener failed: {source}")]
    Listener {
        /// The listener's error.
        #[source]
        source: ListenerError,
    },
}
