#![forbid(unsafe_op_in_unsafe_fn)]

mod app;
pub mod events;
pub mod host;
pub mod keys;

pub use app::run_winit_app;
pub use events::{AdapterEvent, WinitInputAdapter};
pub use host::WinitHost;
