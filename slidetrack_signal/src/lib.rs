// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slidetrack_signal --heading-base-level=0

//! Slidetrack Signal: a single-value notification channel with replay.
//!
//! [`Signal`] is a small, synchronous pub/sub primitive. It remembers the most
//! recently published payload and hands it to every subscriber that joins
//! afterwards, so a late subscriber immediately learns the current state.
//!
//! - [`Signal::subscribe`] registers a callback and replays the cached payload.
//! - [`Signal::publish`] caches a payload and delivers it to every subscriber in
//!   subscription order.
//! - [`Subscription::unsubscribe`] removes a callback; calling it again is a no-op.
//!
//! Delivery is in-line: a callback that returns `Err` stops the remaining
//! deliveries for that publish and the error surfaces to the publisher.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::RefCell;
//! use core::convert::Infallible;
//! use std::rc::Rc;
//!
//! use slidetrack_signal::Signal;
//!
//! let signal: Signal<usize, Infallible> = Signal::new();
//! signal.publish(3).unwrap();
//!
//! // A late subscriber sees the cached value straight away.
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let sub = signal
//!     .subscribe(move |v: &usize| {
//!         sink.borrow_mut().push(*v);
//!         Ok(())
//!     })
//!     .unwrap();
//! assert_eq!(*seen.borrow(), vec![3]);
//!
//! signal.publish(4).unwrap();
//! assert_eq!(*seen.borrow(), vec![3, 4]);
//!
//! assert!(sub.unsubscribe());
//! assert!(!sub.unsubscribe());
//! signal.publish(5).unwrap();
//! assert_eq!(*seen.borrow(), vec![3, 4]);
//! ```
//!
//! Signals are single-threaded (`!Send`); they share their state through `Rc`.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod signal;

pub use signal::{Callback, Signal, SignalError, Subscription};
