#![forbid(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod console;
pub mod error;
pub mod frame;
pub mod host;
pub mod logging;

pub use config::OverlayConfig;
pub use console::ConsoleRegistry;
pub use error::{OverlayError, OverlayResult};
pub use frame::Frame;
pub use host::*;
