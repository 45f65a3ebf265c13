use std::sync::Arc;

use crate::capture::CaptureArbiter;
use crate::events::{KeyState, RawKeyEvent, RawPointerEvent};
use crate::keys::KeyId;
use crate::queue::EventQueue;
use crate::sink::{KeyEventSink, PointerEventSink};
use crate::state::NormalizedInputState;
use crate::translate::{translate_key, translate_pointer};

/// Frame-side buffers reused by every drain.
#[derive(Default)]
pub struct DrainScratch {
    keys: Vec<RawKeyEvent>,
    pointer: Vec<RawPointerEvent>,
}

/// What one drain pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub keys: usize,
    pub pointer: usize,
    /// Events were queued while captured but capture ended before the drain.
    pub discarded: bool,
}

/// Host-facing side of the overlay input path.
///
/// Host callbacks (any thread) only enqueue; the frame drains and translates.
/// This is the only synchronization point between the two contexts.
pub struct InputBridge {
    arbiter: Arc<CaptureArbiter>,
    toggle_key: KeyId,
    wheel_unit: i32,
    keys: EventQueue<RawKeyEvent>,
    pointer: EventQueue<RawPointerEvent>,
}

impl InputBridge {
    pub fn new(arbiter: Arc<CaptureArbiter>, toggle_key: KeyId, wheel_unit: i32) -> Self {
        Self {
            arbiter,
            toggle_key,
            wheel_unit: wheel_unit.max(1),
            keys: EventQueue::with_capacity(64),
            pointer: EventQueue::with_capacity(64),
        }
    }

    #[inline]
    pub fn arbiter(&self) -> &Arc<CaptureArbiter> {
        &self.arbiter
    }

    #[inline]
    pub fn toggle_key(&self) -> KeyId {
        self.toggle_key
    }

    /// (key, pointer) events waiting for the next frame.
    #[inline]
    pub fn queued(&self) -> (usize, usize) {
        (self.keys.len(), self.pointer.len())
    }

    /// Translate everything queued since the previous frame, in arrival order,
    /// then leave both queues empty. Call once per frame.
    pub fn drain_and_translate(
        &self,
        st: &mut NormalizedInputState,
        scratch: &mut DrainScratch,
    ) -> DrainReport {
        st.begin_translate();

        self.keys.drain_into(&mut scratch.keys);
        self.pointer.drain_into(&mut scratch.pointer);

        let mut report = DrainReport {
            keys: scratch.keys.len(),
            pointer: scratch.pointer.len(),
            discarded: false,
        };

        if !self.arbiter.is_captured() {
            report.discarded = report.keys + report.pointer > 0;
            if report.discarded {
                log::debug!(
                    "overlay input: dropped {} key / {} pointer events queued before release",
                    report.keys,
                    report.pointer
                );
            }
            scratch.keys.clear();
            scratch.pointer.clear();
            return report;
        }

        for ev in scratch.keys.drain(..) {
            translate_key(st, &ev);
        }
        for ev in scratch.pointer.drain(..) {
            translate_pointer(st, &ev, self.wheel_unit);
        }

        report
    }
}

impl KeyEventSink for InputBridge {
    fn on_key_event(&self, ev: &RawKeyEvent) -> bool {
        if ev.key == KeyId::SysCommit {
            return false;
        }

        // Checked before queueing: the hotkey belongs to the arbiter, never to the UI.
        if ev.key == self.toggle_key {
            if ev.state == KeyState::Pressed {
                self.arbiter.toggle();
                return true;
            }
            return self.arbiter.is_captured();
        }

        if !self.arbiter.is_captured() {
            return false;
        }

        self.keys.push(ev.clone());
        true
    }
}

impl PointerEventSink for InputBridge {
    fn on_pointer_event(&self, ev: &RawPointerEvent) {
        if self.arbiter.is_captured() {
            self.pointer.push(*ev);
        }
    }
}
