//! Global click listeners with scoped registration.
//!
//! [`ClickListeners::subscribe`] hands back a [`Subscription`]; the handler
//! stays registered exactly as long as the subscription is alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chrono::NaiveDate;

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A day cell of the grid.
    Day(NaiveDate),
    /// Anywhere inside the expanded detail panel.
    DetailPanel,
    /// Anywhere else: header, padding cells, outside the calendar.
    Outside,
}

type Handler = Rc<dyn Fn(&ClickTarget)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Registry of document-level click handlers. Cloning shares the registry.
#[derive(Clone, Default)]
pub struct ClickListeners {
    registry: Rc<RefCell<Registry>>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(&ClickTarget) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let handler: Handler = Rc::new(handler);
        registry.handlers.push((id, handler));

        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver a click to every live handler, in registration order.
    pub fn dispatch(&self, target: ClickTarget) {
        // Snapshot so handlers may subscribe or unsubscribe while running.
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            handler(&target);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a click handler registered until dropped.
#[must_use = "dropping a Subscription immediately removes the handler"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_live_handlers() {
        let listeners = ClickListeners::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let _sub = listeners.subscribe(move |_| counter.set(counter.get() + 1));

        listeners.dispatch(ClickTarget::Outside);
        listeners.dispatch(ClickTarget::DetailPanel);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_drop_deregisters() {
        let listeners = ClickListeners::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let sub = listeners.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(listeners.len(), 1);

        drop(sub);
        assert!(listeners.is_empty());

        listeners.dispatch(ClickTarget::Outside);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_only_dropped_handler_is_removed() {
        let listeners = ClickListeners::new();
        let first = listeners.subscribe(|_| {});
        let _second = listeners.subscribe(|_| {});

        drop(first);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_repeated_mounts_do_not_leak() {
        let listeners = ClickListeners::new();
        for _ in 0..10 {
            let _sub = listeners.subscribe(|_| {});
        }
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_subscription_outliving_registry() {
        let listeners = ClickListeners::new();
        let sub = listeners.subscribe(|_| {});
        drop(listeners);
        drop(sub);
    }

    #[test]
    fn test_handler_sees_target() {
        let listeners = ClickListeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        let _sub = listeners.subscribe(move |target| log.borrow_mut().push(*target));

        let day = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
        listeners.dispatch(ClickTarget::Day(day));
        listeners.dispatch(ClickTarget::Outside);

        assert_eq!(*seen.borrow(), vec![ClickTarget::Day(day), ClickTarget::Outside]);
    }
}
