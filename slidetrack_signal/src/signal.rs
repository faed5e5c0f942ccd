// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

/// Shared callback type stored by a [`Signal`].
pub type Callback<T, E> = Rc<dyn Fn(&T) -> Result<(), E>>;

struct Entry<T, E> {
    id: u64,
    callback: Callback<T, E>,
}

struct Inner<T, E> {
    next_id: u64,
    entries: SmallVec<[Entry<T, E>; 4]>,
    latest: Option<T>,
}

impl<T, E> Inner<T, E> {
    fn snapshot(&self) -> SmallVec<[Callback<T, E>; 4]> {
        self.entries.iter().map(|e| e.callback.clone()).collect()
    }
}

/// Type-erased removal hook held by a [`Subscription`].
trait Detach {
    fn detach(&self, id: u64) -> bool;
    fn contains(&self, id: u64) -> bool;
}

impl<T, E> Detach for RefCell<Inner<T, E>> {
    fn detach(&self, id: u64) -> bool {
        let mut inner = self.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id != id);
        inner.entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.borrow().entries.iter().any(|e| e.id == id)
    }
}

/// Error returned by [`Signal::publish`] when a subscriber fails.
///
/// Subscribers after the failing one did not receive the payload.
#[derive(Clone, PartialEq, Eq)]
pub struct SignalError<E> {
    /// Position of the failing subscriber in delivery order.
    pub position: usize,
    /// The error returned by the subscriber.
    pub error: E,
}

impl<E> SignalError<E> {
    /// Discards the position and returns the subscriber's error.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: fmt::Debug> fmt::Debug for SignalError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignalError {{ position: {:?}, error: {:?} }}",
            self.position, self.error
        )
    }
}

impl<E: fmt::Display> fmt::Display for SignalError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber {} failed: {}", self.position, self.error)
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for SignalError<E> {}

/// Single-value notification channel that replays its latest payload.
///
/// Cloning a `Signal` yields another handle to the same subscriber list and
/// cached payload.
pub struct Signal<T, E> {
    inner: Rc<RefCell<Inner<T, E>>>,
}

impl<T: Clone + 'static, E: 'static> Signal<T, E> {
    /// Creates a signal with no subscribers and no cached payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                entries: SmallVec::new(),
                latest: None,
            })),
        }
    }

    /// Registers `callback`, replaying the cached payload to it first if one exists.
    ///
    /// If the replay fails the callback is not registered and its error is
    /// returned.
    pub fn subscribe<F>(&self, callback: F) -> Result<Subscription, E>
    where
        F: Fn(&T) -> Result<(), E> + 'static,
    {
        let latest = self.inner.borrow().latest.clone();
        if let Some(payload) = latest {
            callback(&payload)?;
        }

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push(Entry {
                id,
                callback: Rc::new(callback),
            });
            id
        };

        let rc: Rc<dyn Detach> = self.inner.clone();
        Ok(Subscription {
            target: Rc::downgrade(&rc),
            id,
        })
    }

    /// Caches `payload` and delivers it to every subscriber in subscription order.
    ///
    /// Delivery walks a snapshot of the subscriber list taken before the first
    /// callback runs, so callbacks may subscribe or unsubscribe freely. The
    /// first failing callback stops delivery.
    pub fn publish(&self, payload: T) -> Result<(), SignalError<E>> {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = Some(payload.clone());
            inner.snapshot()
        };
        for (position, callback) in callbacks.iter().enumerate() {
            callback(&payload).map_err(|error| SignalError { position, error })?;
        }
        Ok(())
    }

    /// Returns a copy of the most recently published payload.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.inner.borrow().latest.clone()
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Drops every subscriber. The cached payload is kept.
    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }
}

impl<T: Clone + 'static, E: 'static> Default for Signal<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Signal<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Signal<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("subscribers", &inner.entries.len())
            .field("latest", &inner.latest)
            .finish_non_exhaustive()
    }
}

/// Handle returned by [`Signal::subscribe`].
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
pub struct Subscription {
    target: Weak<dyn Detach>,
    id: u64,
}

impl Subscription {
    /// Removes the callback from its signal.
    ///
    /// Returns `true` if this call removed it. Repeated calls, or calls after
    /// the signal is gone, return `false`.
    pub fn unsubscribe(&self) -> bool {
        self.target
            .upgrade()
            .is_some_and(|target| target.detach(self.id))
    }

    /// Returns `true` while the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.target
            .upgrade()
            .is_some_and(|target| target.contains(self.id))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
