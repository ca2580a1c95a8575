//! In-process notification between independently initialized components.
//!
//! The filter emitter publishes [`FilterChange`]s; the listing controller (or
//! the client-side filter) subscribes. Handles are cheap clones sharing one
//! registry, which stays on the thread that created it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::filter::FilterChange;

type Subscriber = Box<dyn FnMut(&FilterChange)>;

#[derive(Clone, Default)]
pub struct FilterBus {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl FilterBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: impl FnMut(&FilterChange) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Delivers `change` to every subscriber in registration order.
    ///
    /// Subscribers must not publish on the same bus from inside the callback.
    pub fn publish(&self, change: &FilterChange) {
        log::debug!(
            "filters changed: country={:?} search={:?}",
            change.country,
            change.search
        );
        for subscriber in self.subscribers.borrow_mut().iter_mut() {
            subscriber(change);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl std::fmt::Debug for FilterBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
