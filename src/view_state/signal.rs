//! Single-writer broadcast values.
//!
//! An [`Observable`] is owned by exactly one writer (a monitor). Readers get
//! [`ReadSignal`] clones that can only read, and subscribers register
//! callbacks that run synchronously, in registration order, on every write.
//! Registration returns a [`Subscription`] guard; dropping it unsubscribes.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<Box<dyn FnMut(&T)>>>;

struct Shared<T> {
    value: T,
    version: u64,
    next_subscriber: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

impl<T> Shared<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.iter().any(|(sub, _)| *sub == id)
    }
}

/// Writable side of a broadcast value.
pub struct Observable<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T: Clone + 'static> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                value,
                version: 0,
                next_subscriber: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    /// Replace the value and notify every subscriber synchronously.
    ///
    /// Subscribers may read any signal (including this one) and may drop
    /// their own subscription while being notified.
    pub fn set(&self, value: T) {
        let snapshot: Vec<(u64, Callback<T>)> = {
            let mut shared = self.shared.borrow_mut();
            shared.value = value.clone();
            shared.version += 1;
            shared.subscribers.clone()
        };

        for (id, callback) in snapshot {
            if !self.shared.borrow().is_subscribed(id) {
                continue;
            }
            // A callback that writes back into this observable would re-enter
            // itself; skip rather than panic on the nested borrow.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(&value);
            }
        }
    }

    /// Hand out a read-only view of this value.
    pub fn reader(&self) -> ReadSignal<T> {
        ReadSignal {
            shared: Rc::clone(&self.shared),
        }
    }

    /// Register a callback run on every write.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut shared = self.shared.borrow_mut();
            let id = shared.next_subscriber;
            shared.next_subscriber += 1;
            let callback: Box<dyn FnMut(&T)> = Box::new(callback);
            shared.subscribers.push((id, Rc::new(RefCell::new(callback))));
            id
        };

        let weak: Weak<RefCell<Shared<T>>> = Rc::downgrade(&self.shared);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    if let Ok(mut shared) = shared.try_borrow_mut() {
                        shared.subscribers.retain(|(sub, _)| *sub != id);
                    }
                }
            })),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.shared.borrow().subscribers.len()
    }
}

impl<T> fmt::Debug for Observable<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Observable")
            .field("value", &shared.value)
            .field("version", &shared.version)
            .field("subscribers", &shared.subscribers.len())
            .finish()
    }
}

/// Read-only view of an [`Observable`].
pub struct ReadSignal<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T: Clone> ReadSignal<T> {
    /// Current value.
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    /// Number of writes since creation. Lets readers detect staleness cheaply.
    pub fn version(&self) -> u64 {
        self.shared.borrow().version
    }
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for ReadSignal<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadSignal")
            .field(&self.shared.borrow().value)
            .finish()
    }
}

/// Subscription guard. Unsubscribes when dropped.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping the guard.
    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn reader_sees_writes() {
        let observable = Observable::new(1);
        let reader = observable.reader();

        observable.set(2);

        assert_eq!(reader.get(), 2);
        assert_eq!(reader.version(), 1);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let observable = Observable::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let _first = observable.subscribe(move |v| first_log.borrow_mut().push(("first", *v)));
        let second_log = Rc::clone(&log);
        let _second = observable.subscribe(move |v| second_log.borrow_mut().push(("second", *v)));

        observable.set(7);

        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let observable = Observable::new(0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let subscription = observable.subscribe(move |_| counter.set(counter.get() + 1));

        observable.set(1);
        drop(subscription);
        observable.set(2);

        assert_eq!(hits.get(), 1);
        assert_eq!(observable.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_read_the_signal_it_observes() {
        let observable = Observable::new(0);
        let reader = observable.reader();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _sub = observable.subscribe(move |_| sink.set(reader.get()));

        observable.set(42);

        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn subscription_outliving_observable_drops_quietly() {
        let subscription = {
            let observable = Observable::new(0);
            observable.subscribe(|_| {})
        };
        subscription.unsubscribe();
    }
}
