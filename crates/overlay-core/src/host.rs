//! Contracts of the host collaborators the overlay talks to.
//!
//! The overlay never owns these services; the host hands them in at
//! construction as `Arc<dyn ...>` and keeps them alive for the whole session.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::OverlayResult;

/// Host hardware cursor.
///
/// The visibility counter is reference-counted: every increment must be
/// matched by exactly one decrement.
pub trait HardwareMouse: Send + Sync {
    fn increment_counter(&self);
    fn decrement_counter(&self);

    /// Authoritative cursor position in viewport pixels.
    fn client_position(&self) -> Option<(f32, f32)>;
}

/// Host action-mapping layer (game controls).
pub trait InputRouting: Send + Sync {
    fn enable(&self, enabled: bool);
}

/// Host frame timing counters, read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimings {
    pub fps: f32,
    pub cpu_frame_ms: f32,
    pub gpu_frame_ms: f32,
}

/// Current render target of the host.
pub trait RenderSurface: Send + Sync {
    /// Width/height in physical pixels, polled every tick.
    fn size(&self) -> (u32, u32);

    /// Seconds since the previous frame. Zero while the host is paused.
    fn frame_time(&self) -> f32;

    fn frame_timings(&self) -> FrameTimings;
}

/// Opaque texture handle issued by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TextureHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
}

impl PixelFormat {
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
        }
    }
}

pub trait TextureUploader: Send + Sync {
    fn create_texture(
        &self,
        name: &str,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) -> OverlayResult<TextureHandle>;

    fn remove_texture(&self, handle: TextureHandle);
}

/// Zero-argument console action.
pub type ConsoleAction = Arc<dyn Fn() + Send + Sync>;

/// Operator console: boolean flags and actions.
pub trait CommandRegistry: Send + Sync {
    fn register_flag(&self, name: &str, help: &str, flag: Arc<AtomicBool>);
    fn register_action(&self, name: &str, help: &str, action: ConsoleAction);
    fn unregister(&self, name: &str);
}
