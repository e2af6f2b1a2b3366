//! Simple event bus for decoupled communication between controllers and UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered and drained by the UI on each frame.
//! Timer and provider callbacks emit outside of a frame, so the bus can carry
//! a notifier the app uses to request a repaint.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use elysium_types::event::AppEvent;

/// Shared event bus: clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<AppEvent>>>,
    notifier: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
            notifier: Rc::new(RefCell::new(None)),
        }
    }

    /// Install a hook run after every emit (e.g. `ctx.request_repaint()`).
    pub fn set_notifier(&self, notifier: impl Fn() + 'static) {
        *self.notifier.borrow_mut() = Some(Rc::new(notifier));
    }

    /// Publish an event. Called by the controllers.
    pub fn emit(&self, event: AppEvent) {
        log::debug!("event: {:?}", event);
        self.inner.borrow_mut().push_back(event);
        let notifier = self.notifier.borrow().clone();
        if let Some(notify) = notifier {
            notify();
        }
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
