use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use overlay_core::{
    CommandRegistry, HardwareMouse, InputRouting, OverlayConfig, OverlayError, OverlayResult,
    RenderSurface, TextureUploader,
};
use overlay_input::{
    CaptureArbiter, CaptureState, InputBridge, InputSource, KeyEventSink, KeyId, ListenerId,
    PointerEventSink,
};
use overlay_ui::UiRenderer;

use crate::commands;
use crate::driver::{DriverPhase, FrameDriver, TickReport};
use crate::panels::{OverlayFlags, Panels};

/// Host services the overlay talks to.
///
/// `surface` and `textures` may be absent (headless host); the overlay then
/// stays inert after the initialized hook.
#[derive(Clone)]
pub struct HostServices {
    pub mouse: Arc<dyn HardwareMouse>,
    pub routing: Arc<dyn InputRouting>,
    pub surface: Option<Arc<dyn RenderSurface>>,
    pub textures: Option<Arc<dyn TextureUploader>>,
    pub commands: Arc<dyn CommandRegistry>,
    pub input: Arc<dyn InputSource>,
}

/// In-process debug overlay: owns capture, the input bridge and the frame driver.
pub struct Overlay {
    config: OverlayConfig,
    services: HostServices,
    bridge: Arc<InputBridge>,
    flags: OverlayFlags,
    driver: FrameDriver,
    listeners: Vec<ListenerId>,
    commands: Vec<String>,
    /// Set once the driver is ready and listeners are in; gates capture toggles.
    armed: Arc<AtomicBool>,
    shut_down: bool,
}

impl Overlay {
    /// Builds the overlay and registers its console commands.
    ///
    /// Fails only on a bad toggle key name.
    pub fn new(config: OverlayConfig, services: HostServices) -> OverlayResult<Self> {
        let toggle_key: KeyId = config.toggle_key.parse()?;

        let arbiter = Arc::new(CaptureArbiter::new(
            services.mouse.clone(),
            services.routing.clone(),
        ));
        let bridge = Arc::new(InputBridge::new(arbiter.clone(), toggle_key, config.wheel_unit));

        let flags = OverlayFlags::from_config(&config);
        let armed = Arc::new(AtomicBool::new(false));
        let commands = commands::register(
            services.commands.as_ref(),
            &config,
            &flags,
            &arbiter,
            &armed,
        );
        let driver = FrameDriver::new(services.surface.clone(), Panels::new(flags.clone()));

        log::info!("overlay created, toggle key {toggle_key}");

        Ok(Self {
            config,
            services,
            bridge,
            flags,
            driver,
            listeners: Vec::new(),
            commands,
            armed,
            shut_down: false,
        })
    }

    #[inline]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[inline]
    pub fn flags(&self) -> &OverlayFlags {
        &self.flags
    }

    #[inline]
    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    #[inline]
    pub fn bridge(&self) -> &Arc<InputBridge> {
        &self.bridge
    }

    #[inline]
    pub fn capture_state(&self) -> CaptureState {
        self.bridge.arbiter().state()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.bridge.arbiter().is_captured()
    }

    /// True between a successful `on_system_initialized` and `shutdown`.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Flip capture. A no-op returning the current state while not armed.
    pub fn toggle_capture(&self) -> CaptureState {
        if !self.is_armed() {
            return self.capture_state();
        }
        self.bridge.arbiter().toggle()
    }

    /// Host hook: subsystems are up. Builds the font atlas, takes the renderer
    /// and subscribes to host input.
    ///
    /// Returns false when the overlay stays inert. The host keeps running
    /// either way.
    pub fn on_system_initialized(&mut self, renderer: Option<Box<dyn UiRenderer>>) -> bool {
        if self.shut_down {
            return false;
        }
        log::info!("overlay initializing");

        let res = self.driver.initialize(
            renderer,
            self.services.textures.clone(),
            &self.config.font_texture_name,
        );

        match res {
            Ok(()) if self.driver.phase() == DriverPhase::Ready => {
                self.subscribe();
                true
            }
            Ok(()) => self.driver.phase() == DriverPhase::Steady,
            Err(e) => {
                log_init_failure(&e);
                false
            }
        }
    }

    /// Host hook: once per rendered frame.
    pub fn on_render_frame(&mut self) -> TickReport {
        self.driver.tick(&self.bridge)
    }

    fn subscribe(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }
        let key: Arc<dyn KeyEventSink> = self.bridge.clone();
        let pointer: Arc<dyn PointerEventSink> = self.bridge.clone();
        self.listeners.push(self.services.input.add_key_sink(key));
        self.listeners.push(self.services.input.add_pointer_sink(pointer));
        self.armed.store(true, Ordering::Release);
    }

    /// Release capture, unsubscribe, unregister commands, free the font texture.
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.armed.store(false, Ordering::Release);

        if self.bridge.arbiter().release() {
            log::info!("overlay: capture released at shutdown");
        }
        for id in self.listeners.drain(..) {
            self.services.input.remove_listener(id);
        }
        commands::unregister(self.services.commands.as_ref(), &self.commands);
        self.commands.clear();
        self.driver.shutdown();

        log::info!("overlay shut down");
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn log_init_failure(e: &OverlayError) {
    match e {
        OverlayError::RendererUnavailable | OverlayError::SurfaceUnavailable => {
            log::warn!("overlay disabled: {e}");
        }
        _ => log::error!("overlay failed to initialize: {e}"),
    }
}
