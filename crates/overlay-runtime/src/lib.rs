#![forbid(unsafe_op_in_unsafe_fn)]

pub mod commands;
pub mod driver;
pub mod overlay;
pub mod panels;

pub use driver::{DriverPhase, FrameDriver, TickReport};
pub use overlay::{HostServices, Overlay};
pub use panels::{OverlayFlags, Panels};
