use parking_lot::Mutex;
use std::sync::Arc;

use crate::events::{RawKeyEvent, RawPointerEvent};

/// Receives discrete key/text events from the host.
pub trait KeyEventSink: Send + Sync {
    /// Returns true when the event was consumed and the host must not act on it.
    fn on_key_event(&self, ev: &RawKeyEvent) -> bool;
}

/// Receives hardware cursor and wheel events from the host.
pub trait PointerEventSink: Send + Sync {
    fn on_pointer_event(&self, ev: &RawPointerEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host raw-event source.
pub trait InputSource: Send + Sync {
    fn add_key_sink(&self, sink: Arc<dyn KeyEventSink>) -> ListenerId;
    fn add_pointer_sink(&self, sink: Arc<dyn PointerEventSink>) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    keys: Vec<(ListenerId, Arc<dyn KeyEventSink>)>,
    pointers: Vec<(ListenerId, Arc<dyn PointerEventSink>)>,
}

impl Registry {
    fn alloc(&mut self) -> ListenerId {
        self.next_id += 1;
        ListenerId(self.next_id)
    }
}

/// Listener list for hosts that dispatch raw events themselves.
///
/// Dispatch snapshots the list first, so sinks may add or remove listeners
/// from inside a callback.
#[derive(Default)]
pub struct InputListeners {
    inner: Mutex<Registry>,
}

impl InputListeners {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver to every key sink; true if any of them consumed the event.
    pub fn dispatch_key(&self, ev: &RawKeyEvent) -> bool {
        let sinks: Vec<_> = self.inner.lock().keys.iter().map(|(_, s)| s.clone()).collect();
        let mut consumed = false;
        for s in sinks {
            consumed |= s.on_key_event(ev);
        }
        consumed
    }

    pub fn dispatch_pointer(&self, ev: &RawPointerEvent) {
        let sinks: Vec<_> = self
            .inner
            .lock()
            .pointers
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        for s in sinks {
            s.on_pointer_event(ev);
        }
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        let g = self.inner.lock();
        g.keys.len() + g.pointers.len()
    }
}

impl InputSource for InputListeners {
    fn add_key_sink(&self, sink: Arc<dyn KeyEventSink>) -> ListenerId {
        let mut g = self.inner.lock();
        let id = g.alloc();
        g.keys.push((id, sink));
        id
    }

    fn add_pointer_sink(&self, sink: Arc<dyn PointerEventSink>) -> ListenerId {
        let mut g = self.inner.lock();
        let id = g.alloc();
        g.pointers.push((id, sink));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let mut g = self.inner.lock();
        g.keys.retain(|(l, _)| *l != id);
        g.pointers.retain(|(l, _)| *l != id);
    }
}
