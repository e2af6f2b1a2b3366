//! Single-slot success banner with auto-dismiss.
//!
//! At most one dismiss timer is alive at any time. Re-activating replaces
//! both the message and the timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use elysium_types::{event::AppEvent, notification::Notification};
use crate::event_bus::EventBus;
use crate::ports::{TimerHandle, TimerPort};

/// Shared notification slot: clone-cheap via Rc.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Rc<RefCell<NotificationSlot>>,
}

struct NotificationSlot {
    current: Notification,
    pending: Option<TimerHandle>,
    dismiss_after_ms: u32,
    timers: Rc<dyn TimerPort>,
    event_bus: EventBus,
}

impl NotificationCenter {
    pub fn new(timers: Rc<dyn TimerPort>, dismiss_after_ms: u32, event_bus: EventBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NotificationSlot {
                current: Notification::default(),
                pending: None,
                dismiss_after_ms,
                timers,
                event_bus,
            })),
        }
    }

    /// Show `message` and (re)start the dismiss window.
    pub fn activate(&self, message: impl Into<String>) {
        let message = message.into();
        let weak = Rc::downgrade(&self.inner);

        let event_bus = {
            let mut slot = self.inner.borrow_mut();
            if let Some(previous) = slot.pending.take() {
                slot.timers.cancel(previous);
            }
            slot.current = Notification::shown(message.clone());
            let handle = slot
                .timers
                .schedule(slot.dismiss_after_ms, Box::new(move || expire(weak)));
            slot.pending = Some(handle);
            slot.event_bus.clone()
        };

        log::info!("Notification shown: {}", message);
        event_bus.emit(AppEvent::NotificationShown { message });
    }

    /// Hide the banner now and drop any pending timer.
    pub fn dismiss(&self) {
        let (was_visible, event_bus) = {
            let mut slot = self.inner.borrow_mut();
            if let Some(handle) = slot.pending.take() {
                slot.timers.cancel(handle);
            }
            let was_visible = slot.current.visible;
            slot.current.visible = false;
            (was_visible, slot.event_bus.clone())
        };
        if was_visible {
            event_bus.emit(AppEvent::NotificationDismissed);
        }
    }

    /// Snapshot of the slot
    pub fn current(&self) -> Notification {
        self.inner.borrow().current.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().current.visible
    }

    /// Whether a dismiss timer is outstanding
    pub fn has_pending_timer(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }
}

/// Timer callback. Holds only a weak reference so a fired timer never
/// touches a released slot.
fn expire(slot: Weak<RefCell<NotificationSlot>>) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let event_bus = {
        let mut slot = slot.borrow_mut();
        slot.pending = None;
        slot.current.visible = false;
        slot.event_bus.clone()
    };
    log::debug!("Notification auto-dismissed");
    event_bus.emit(AppEvent::NotificationDismissed);
}

impl Drop for NotificationSlot {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
    }
}
