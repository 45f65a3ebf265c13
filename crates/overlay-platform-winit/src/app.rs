use std::sync::Arc;
use std::time::Instant;

use overlay_core::{OverlayError, OverlayResult};
use overlay_input::{KeyId, KeyState};
use overlay_runtime::Overlay;
use overlay_ui::UiRenderer;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::events::{AdapterEvent, WinitInputAdapter};
use crate::host::WinitHost;

struct App {
    host: Arc<WinitHost>,
    overlay: Overlay,
    renderer: Option<Box<dyn UiRenderer>>,
    adapter: WinitInputAdapter,
    title: String,

    window: Option<Window>,
    initialized: bool,
    cursor_visible: Option<bool>,
    error: Option<OverlayError>,
}

impl App {
    fn new(
        host: Arc<WinitHost>,
        overlay: Overlay,
        renderer: Option<Box<dyn UiRenderer>>,
        title: &str,
    ) -> Self {
        let adapter = WinitInputAdapter::new(overlay.config().wheel_unit);
        Self {
            host,
            overlay,
            renderer,
            adapter,
            title: title.to_string(),
            window: None,
            initialized: false,
            cursor_visible: None,
            error: None,
        }
    }

    #[inline]
    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.overlay.shutdown();
        event_loop.exit();
    }

    fn frame(&mut self) {
        let start = Instant::now();
        self.host.begin_frame(start);
        self.overlay.on_render_frame();
        self.host.end_frame(start.elapsed());

        let visible = self.host.cursor_visible();
        if self.cursor_visible != Some(visible) {
            if let Some(w) = &self.window {
                w.set_cursor_visible(visible);
            }
            self.cursor_visible = Some(visible);
        }
    }

    /// Returns true when the host wants to quit.
    fn forward(&mut self, ev: AdapterEvent) -> bool {
        match ev {
            AdapterEvent::Key(k) => {
                let consumed = self.host.listeners().dispatch_key(&k);
                if consumed || !self.host.routing_enabled() {
                    return false;
                }
                log::trace!("host key {} {:?}", k.key, k.state);
                k.key == KeyId::Escape && k.state == KeyState::Pressed
            }
            AdapterEvent::Pointer(p) => {
                self.host.listeners().dispatch_pointer(&p);
                false
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default().with_title(self.title.clone());
        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("window create failed: {e}");
                self.error = Some(OverlayError::Platform(e.to_string()));
                self.exit(event_loop);
                return;
            }
        };

        let size = window.inner_size();
        self.host.set_size(size.width, size.height);
        self.window = Some(window);

        if !self.initialized {
            self.initialized = true;
            if !self.overlay.on_system_initialized(self.renderer.take()) {
                log::warn!("running without overlay");
            }
        }

        // Kick first frame.
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                self.exit(event_loop);
                return;
            }
            WindowEvent::Resized(size) => self.host.set_size(size.width, size.height),
            WindowEvent::CursorLeft { .. } => self.host.clear_cursor(),
            WindowEvent::RedrawRequested => {
                self.frame();
                return;
            }
            _ => {}
        }

        if let Some(ev) = self.adapter.translate(&event, Instant::now()) {
            if matches!(event, WindowEvent::CursorMoved { .. }) {
                let (x, y) = self.adapter.cursor();
                self.host.set_cursor(x as f32, y as f32);
            }
            if self.forward(ev) {
                self.exit(event_loop);
                return;
            }
        }

        self.request_redraw();
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous redraw.
        self.request_redraw();
    }
}

/// Run the winit loop: one window, overlay hooks on init/redraw/close.
///
/// Escape quits when the host (not the overlay) owns input.
pub fn run_winit_app(
    host: Arc<WinitHost>,
    overlay: Overlay,
    renderer: Option<Box<dyn UiRenderer>>,
    title: &str,
) -> OverlayResult<()> {
    let event_loop = EventLoop::new().map_err(|e| OverlayError::Platform(e.to_string()))?;
    let mut app = App::new(host, overlay, renderer, title);

    event_loop
        .run_app(&mut app)
        .map_err(|e| OverlayError::Platform(e.to_string()))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
