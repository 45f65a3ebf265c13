#![forbid(unsafe_op_in_unsafe_fn)]

pub mod bridge;
pub mod capture;
pub mod events;
pub mod keys;
pub mod queue;
pub mod sink;
pub mod state;
pub mod translate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bridge::{DrainScratch, InputBridge};
pub use capture::{CaptureArbiter, CaptureState};
pub use events::*;
pub use keys::{KeyId, Modifier};
pub use queue::EventQueue;
pub use sink::{InputListeners, InputSource, KeyEventSink, ListenerId, PointerEventSink};
pub use state::{Modifiers, NormalizedInputState, BUTTON_COUNT};
