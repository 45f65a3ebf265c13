#![forbid(unsafe_op_in_unsafe_fn)]

pub mod draw;
pub mod render;
pub mod texture;

#[cfg(feature = "egui")]
pub mod egui_provider;

pub use draw::*;
pub use render::UiRenderer;
pub use texture::*;
