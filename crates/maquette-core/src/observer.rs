//! Explicit observer lists.
//!
//! The presentation layer re-expresses toolkit multicast events as plain
//! observer lists with register/unregister and an explicit notify call.
//! Callbacks are `FnMut` with no `Send` bound: the list lives on the owning
//! UI thread and notification happens synchronously inside the handler that
//! caused the change.

use std::fmt;

/// Token returned by [`ObserverList::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// An ordered list of observers for one event surface.
pub struct ObserverList<E> {
    observers: Vec<(Subscription, Box<dyn FnMut(&E)>)>,
    next_id: u64,
}

impl<E> ObserverList<E> {
    /// Create an empty observer list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(&E) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if the subscription was not (or no longer) present.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    /// Notify every observer with the given event.
    ///
    /// Observers must not re-enter the component that owns the list.
    pub fn notify(&mut self, event: &E) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<E> Default for ObserverList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ObserverList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}
