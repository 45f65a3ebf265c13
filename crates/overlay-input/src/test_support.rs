//! Host stand-ins for tests in this crate and its dependents
//! (`features = ["test-support"]`).

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use overlay_core::{HardwareMouse, InputRouting};

/// Tracks the cursor counter and routing flag; reports a settable cursor.
pub struct FakeHost {
    counter: AtomicI32,
    routing_enabled: AtomicBool,
    cursor: Mutex<Option<(f32, f32)>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            counter: AtomicI32::new(0),
            routing_enabled: AtomicBool::new(true),
            cursor: Mutex::new(None),
        }
    }

    pub fn counter(&self) -> i32 {
        self.counter.load(Ordering::SeqCst)
    }

    pub fn routing(&self) -> bool {
        self.routing_enabled.load(Ordering::SeqCst)
    }

    pub fn set_cursor(&self, pos: Option<(f32, f32)>) {
        *self.cursor.lock() = pos;
    }
}

impl HardwareMouse for FakeHost {
    fn increment_counter(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement_counter(&self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }

    fn client_position(&self) -> Option<(f32, f32)> {
        *self.cursor.lock()
    }
}

impl InputRouting for FakeHost {
    fn enable(&self, enabled: bool) {
        self.routing_enabled.store(enabled, Ordering::SeqCst);
    }
}
