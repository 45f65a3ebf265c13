use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use overlay_core::{FrameTimings, HardwareMouse, InputRouting, RenderSurface};
use overlay_input::InputListeners;

#[derive(Default)]
struct SurfaceState {
    size: (u32, u32),
    cursor: Option<(f32, f32)>,
    last_frame: Option<Instant>,
    dt: f32,
    cpu_ms: f32,
}

/// Host services backed by a winit window.
///
/// The cursor counter only records visibility; the event loop applies it to
/// the window after each frame.
pub struct WinitHost {
    listeners: Arc<InputListeners>,
    cursor_counter: AtomicI32,
    routing: AtomicBool,
    state: Mutex<SurfaceState>,
}

impl Default for WinitHost {
    fn default() -> Self {
        Self::new()
    }
}

impl WinitHost {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(InputListeners::new()),
            cursor_counter: AtomicI32::new(0),
            routing: AtomicBool::new(true),
            state: Mutex::new(SurfaceState::default()),
        }
    }

    #[inline]
    pub fn listeners(&self) -> &Arc<InputListeners> {
        &self.listeners
    }

    #[inline]
    pub fn cursor_visible(&self) -> bool {
        self.cursor_counter.load(Ordering::Acquire) > 0
    }

    /// Whether host-side (non-overlay) input handling is on.
    #[inline]
    pub fn routing_enabled(&self) -> bool {
        self.routing.load(Ordering::Acquire)
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.state.lock().size = (width, height);
    }

    pub fn set_cursor(&self, x: f32, y: f32) {
        self.state.lock().cursor = Some((x, y));
    }

    pub fn clear_cursor(&self) {
        self.state.lock().cursor = None;
    }

    /// Start of a redraw; the first frame reports a zero delta.
    pub fn begin_frame(&self, now: Instant) {
        let mut s = self.state.lock();
        s.dt = s
            .last_frame
            .map(|t| now.saturating_duration_since(t).as_secs_f32())
            .unwrap_or(0.0);
        s.last_frame = Some(now);
    }

    pub fn end_frame(&self, cpu: Duration) {
        self.state.lock().cpu_ms = cpu.as_secs_f32() * 1000.0;
    }
}

impl HardwareMouse for WinitHost {
    fn increment_counter(&self) {
        self.cursor_counter.fetch_add(1, Ordering::AcqRel);
    }

    fn decrement_counter(&self) {
        self.cursor_counter.fetch_sub(1, Ordering::AcqRel);
    }

    fn client_position(&self) -> Option<(f32, f32)> {
        self.state.lock().cursor
    }
}

impl InputRouting for WinitHost {
    fn enable(&self, enabled: bool) {
        self.routing.store(enabled, Ordering::Release);
        log::debug!("host input routing {}", if enabled { "on" } else { "off" });
    }
}

impl RenderSurface for WinitHost {
    fn size(&self) -> (u32, u32) {
        self.state.lock().size
    }

    fn frame_time(&self) -> f32 {
        self.state.lock().dt
    }

    fn frame_timings(&self) -> FrameTimings {
        let s = self.state.lock();
        FrameTimings {
            fps: if s.dt > 0.0 { 1.0 / s.dt } else { 0.0 },
            cpu_frame_ms: s.cpu_ms,
            gpu_frame_ms: 0.0,
        }
    }
}
