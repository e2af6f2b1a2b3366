//! Ordered chat transcript with a simulated assistant.
//!
//! Each accepted `send` appends the user message immediately and schedules
//! its own reply timer, keyed by a monotonic request id. Replies never
//! cancel or merge with each other; they land in timer-completion order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use elysium_types::{event::AppEvent, message::Message};
use crate::event_bus::EventBus;
use crate::ports::{TimerHandle, TimerPort};

/// Shared transcript: clone-cheap via Rc.
#[derive(Clone)]
pub struct ConversationStore {
    inner: Rc<RefCell<Transcript>>,
}

struct Transcript {
    messages: Vec<Message>,
    pending: HashMap<u64, TimerHandle>,
    next_request_id: u64,
    reply_text: String,
    reply_delay_ms: u32,
    timers: Rc<dyn TimerPort>,
    event_bus: EventBus,
}

impl ConversationStore {
    pub fn new(
        timers: Rc<dyn TimerPort>,
        reply_text: impl Into<String>,
        reply_delay_ms: u32,
        event_bus: EventBus,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Transcript {
                messages: Vec::new(),
                pending: HashMap::new(),
                next_request_id: 0,
                reply_text: reply_text.into(),
                reply_delay_ms,
                timers,
                event_bus,
            })),
        }
    }

    /// Append a user message and schedule its canned reply.
    ///
    /// Blank input is ignored and returns `None`; otherwise returns the
    /// request id shared by the user message and its reply.
    pub fn send(&self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let weak = Rc::downgrade(&self.inner);
        let (request_id, message, event_bus) = {
            let mut transcript = self.inner.borrow_mut();
            transcript.next_request_id += 1;
            let request_id = transcript.next_request_id;

            let message = Message::user(request_id, text);
            transcript.messages.push(message.clone());

            let handle = transcript.timers.schedule(
                transcript.reply_delay_ms,
                Box::new(move || deliver_reply(weak, request_id)),
            );
            transcript.pending.insert(request_id, handle);
            (request_id, message, transcript.event_bus.clone())
        };

        log::debug!("Request {} queued, reply pending", request_id);
        event_bus.emit(AppEvent::MessageAppended { message });
        Some(request_id)
    }

    /// Snapshot of the transcript in append order
    pub fn messages(&self) -> Vec<Message> {
        self.inner.borrow().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().messages.is_empty()
    }

    /// Number of replies still waiting on their timer
    pub fn pending_replies(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

fn deliver_reply(transcript: Weak<RefCell<Transcript>>, request_id: u64) {
    let Some(transcript) = transcript.upgrade() else {
        return;
    };
    let (message, event_bus) = {
        let mut transcript = transcript.borrow_mut();
        if transcript.pending.remove(&request_id).is_none() {
            return;
        }
        let message = Message::assistant(request_id, transcript.reply_text.clone());
        transcript.messages.push(message.clone());
        (message, transcript.event_bus.clone())
    };
    event_bus.emit(AppEvent::MessageAppended { message });
}

impl Drop for Transcript {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            self.timers.cancel(handle);
        }
    }
}
