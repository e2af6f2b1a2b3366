//! Timer adapter: one-shot callbacks on the browser event loop.
//!
//! Each scheduled callback is a `spawn_local` task awaiting a
//! `gloo_timers` timeout, wrapped in `Abortable` so it can be cancelled
//! by handle. Dropping the adapter aborts everything still pending.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;

use elysium_core::ports::{TimerHandle, TimerPort};

pub struct GlooTimers {
    next_id: Cell<u64>,
    pending: Rc<RefCell<HashMap<u64, AbortHandle>>>,
}

impl GlooTimers {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Number of callbacks that have neither fired nor been cancelled
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Default for GlooTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for GlooTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let (abort, registration) = AbortHandle::new_pair();
        self.pending.borrow_mut().insert(id, abort);

        let pending = Rc::downgrade(&self.pending);
        let timeout = Abortable::new(TimeoutFuture::new(delay_ms), registration);
        wasm_bindgen_futures::spawn_local(async move {
            if timeout.await.is_err() {
                return;
            }
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().remove(&id);
            }
            callback();
        });

        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let abort = self.pending.borrow_mut().remove(&handle.0);
        if let Some(abort) = abort {
            abort.abort();
        }
    }
}

impl Drop for GlooTimers {
    fn drop(&mut self) {
        for (_, abort) in self.pending.borrow_mut().drain() {
            abort.abort();
        }
    }
}
