#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use overlay_core::{
    ConsoleRegistry, FrameTimings, OverlayConfig, OverlayError, OverlayResult, PixelFormat,
    RenderSurface, TextureHandle, TextureUploader,
};
use overlay_input::InputListeners;

pub use overlay_input::test_support::FakeHost;
use overlay_runtime::{HostServices, Overlay};
use overlay_ui::{UiDrawList, UiRenderer};

pub struct FakeSurface {
    pub size: Mutex<(u32, u32)>,
    pub dt: Mutex<f32>,
}

impl FakeSurface {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            size: Mutex::new((w, h)),
            dt: Mutex::new(1.0 / 60.0),
        }
    }
}

impl RenderSurface for FakeSurface {
    fn size(&self) -> (u32, u32) {
        *self.size.lock()
    }
    fn frame_time(&self) -> f32 {
        *self.dt.lock()
    }
    fn frame_timings(&self) -> FrameTimings {
        FrameTimings {
            fps: 60.0,
            cpu_frame_ms: 4.0,
            gpu_frame_ms: 6.0,
        }
    }
}

#[derive(Default)]
pub struct FakeTextures {
    next: AtomicU64,
    pub created: Mutex<Vec<(String, u32, u32)>>,
    pub removed: Mutex<Vec<TextureHandle>>,
    pub fail: AtomicBool,
}

impl TextureUploader for FakeTextures {
    fn create_texture(
        &self,
        name: &str,
        width: u32,
        height: u32,
        _format: PixelFormat,
        pixels: &[u8],
    ) -> OverlayResult<TextureHandle> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(OverlayError::TextureUpload {
                name: name.to_string(),
                reason: "device lost".into(),
            });
        }
        assert_eq!(pixels.len(), width as usize * height as usize * 4);
        self.created.lock().push((name.to_string(), width, height));
        Ok(TextureHandle(self.next.fetch_add(1, Ordering::SeqCst) + 1))
    }

    fn remove_texture(&self, handle: TextureHandle) {
        self.removed.lock().push(handle);
    }
}

/// One entry per submitted draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub frame_index: u64,
    pub screen_size_px: [u32; 2],
    pub has_geometry: bool,
}

pub struct RecordingRenderer {
    pub submitted: Arc<Mutex<Vec<Submitted>>>,
}

impl UiRenderer for RecordingRenderer {
    fn render(&mut self, list: &UiDrawList) {
        self.submitted.lock().push(Submitted {
            frame_index: list.frame_index,
            screen_size_px: list.screen_size_px,
            has_geometry: !list.mesh.is_empty(),
        });
    }
}

pub struct Harness {
    pub host: Arc<FakeHost>,
    pub surface: Arc<FakeSurface>,
    pub textures: Arc<FakeTextures>,
    pub console: Arc<ConsoleRegistry>,
    pub listeners: Arc<InputListeners>,
    pub submitted: Arc<Mutex<Vec<Submitted>>>,
}

impl Harness {
    pub fn new() -> Self {
        overlay_core::logging::init_for_tests();
        Self {
            host: Arc::new(FakeHost::new()),
            surface: Arc::new(FakeSurface::new(800, 600)),
            textures: Arc::new(FakeTextures::default()),
            console: Arc::new(ConsoleRegistry::new()),
            listeners: Arc::new(InputListeners::new()),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn services(&self) -> HostServices {
        HostServices {
            mouse: self.host.clone(),
            routing: self.host.clone(),
            surface: Some(self.surface.clone()),
            textures: Some(self.textures.clone()),
            commands: self.console.clone(),
            input: self.listeners.clone(),
        }
    }

    pub fn renderer(&self) -> Box<dyn UiRenderer> {
        Box::new(RecordingRenderer {
            submitted: self.submitted.clone(),
        })
    }

    /// Overlay past the initialized hook.
    pub fn ready_overlay(&self) -> Overlay {
        let mut overlay = Overlay::new(OverlayConfig::default(), self.services())
            .expect("default config is valid");
        assert!(overlay.on_system_initialized(Some(self.renderer())));
        overlay
    }

    pub fn submitted(&self) -> Vec<Submitted> {
        self.submitted.lock().clone()
    }
}
