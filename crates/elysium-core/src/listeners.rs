//! Listener registry and unsubscribe handles for session-change pushes.

use std::cell::RefCell;
use std::rc::Rc;
use elysium_types::session::Session;
use crate::ports::SessionListener;

/// Unregisters a listener when dropped.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A handle with nothing to release
    pub fn detached() -> Self {
        Self { unsubscribe: None }
    }

    /// Unregister now instead of at drop
    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

type Entry = (u64, Rc<dyn Fn(Option<Session>)>);

/// Shared set of session listeners: clone-cheap via Rc.
///
/// Identity adapters keep one of these and call [`notify`](Self::notify)
/// whenever their session changes.
#[derive(Clone, Default)]
pub struct SessionListeners {
    inner: Rc<RefCell<ListenerTable>>,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<Entry>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the returned
    /// subscription is dropped.
    pub fn subscribe(&self, listener: SessionListener) -> Subscription {
        let id = {
            let mut table = self.inner.borrow_mut();
            table.next_id += 1;
            let id = table.next_id;
            table.entries.push((id, Rc::from(listener)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(table) = weak.upgrade() {
                table.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Deliver `session` to every registered listener.
    pub fn notify(&self, session: Option<Session>) {
        // Snapshot first: a listener may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<Rc<dyn Fn(Option<Session>)>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(session.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
