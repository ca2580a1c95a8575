//! Filter inputs: debounced search box and country selector.
//!
//! Time is always passed in by the host, which keeps the debounce
//! deterministic under test.

use std::time::{Duration, Instant};

use crate::domain::filter::FilterChange;
use crate::events::FilterBus;
use crate::models::config::DEFAULT_DEBOUNCE_MS;

/// Cancellable one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)arms the timer to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires at most once per schedule: returns `true` and disarms when the
    /// deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

/// Turns raw input events into filter-changed notifications on a bus.
#[derive(Debug)]
pub struct FilterEmitter {
    bus: FilterBus,
    debouncer: Debouncer,
    country: String,
    search: String,
}

impl FilterEmitter {
    pub fn new(bus: FilterBus, debounce: Duration) -> Self {
        Self {
            bus,
            debouncer: Debouncer::new(debounce),
            country: String::new(),
            search: String::new(),
        }
    }

    /// Seeds the current input values without emitting.
    #[must_use]
    pub fn with_values(mut self, country: &str, search: &str) -> Self {
        self.country = country.to_string();
        self.search = search.to_string();
        self
    }

    /// Selector changes are emitted right away.
    pub fn country_changed(&mut self, value: &str) {
        self.country = value.to_string();
        self.emit();
    }

    /// Typing only arms the debounce; [`FilterEmitter::tick`] emits.
    pub fn search_input(&mut self, value: &str, now: Instant) {
        self.search = value.to_string();
        self.debouncer.schedule(now);
    }

    /// Enter bypasses the debounce.
    pub fn search_submitted(&mut self, value: &str) {
        self.search = value.to_string();
        self.emit();
    }

    /// Emits when the debounce is due. Returns whether it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debouncer.fire_if_due(now) {
            self.emit();
            true
        } else {
            false
        }
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn current(&self) -> FilterChange {
        FilterChange::new(&self.country, &self.search)
    }

    fn emit(&mut self) {
        self.debouncer.cancel();
        self.bus.publish(&self.current());
    }
}
