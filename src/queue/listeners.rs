// SPDX-License-Identifier: MPL-2.0
//! Observer registry for visible-set changes.

use super::toast::Toast;
use std::fmt;

/// Token returned by [`ToastQueue::subscribe`](super::ToastQueue::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&[Toast<T>])>;

/// Registered listeners, notified in subscription order.
pub(crate) struct Listeners<T> {
    entries: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn add(&mut self, listener: Listener<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns `true` if the listener was registered.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() < before
    }

    pub(crate) fn notify(&mut self, visible: &[Toast<T>]) {
        for (_, listener) in &mut self.entries {
            listener(visible);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_calls_listeners_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<()> = Listeners::new();

        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            listeners.add(Box::new(move |_: &[Toast<()>]| calls.borrow_mut().push(tag)));
        }
        listeners.notify(&[]);

        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut listeners: Listeners<()> = Listeners::new();
        let id = listeners.add(Box::new(|_: &[Toast<()>]| {}));

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut listeners: Listeners<()> = Listeners::new();
        let first = listeners.add(Box::new(|_: &[Toast<()>]| {}));
        listeners.remove(first);
        let second = listeners.add(Box::new(|_: &[Toast<()>]| {}));

        assert_ne!(first, second);
    }
}
