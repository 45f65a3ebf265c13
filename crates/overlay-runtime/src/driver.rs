use std::sync::Arc;

use overlay_core::{
    Frame, OverlayError, OverlayResult, RenderSurface, TextureHandle, TextureUploader,
};
use overlay_input::bridge::DrainReport;
use overlay_input::{DrainScratch, InputBridge, NormalizedInputState};
use overlay_ui::egui_provider::{EguiUi, KeyMap};
use overlay_ui::{FontTexture, UiDrawList, UiRenderer};

use crate::panels::{PanelView, Panels};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Waiting for the host "initialized" hook.
    Uninitialized,
    /// Initialized; no draw output exists yet.
    Ready,
    /// Every tick submits the previous tick's output.
    Steady,
    /// Initialization failed; stays this way for the session.
    Inert,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ran: bool,
    pub frame_index: u64,
    /// Frame index of the draw list handed to the renderer this tick.
    pub submitted: Option<u64>,
    pub drain: DrainReport,
}

/// Runs the overlay once per rendered frame.
pub struct FrameDriver {
    phase: DriverPhase,
    surface: Option<Arc<dyn RenderSurface>>,
    renderer: Option<Box<dyn UiRenderer>>,
    ui: Option<EguiUi>,
    font: Option<FontTexture>,

    input: NormalizedInputState,
    scratch: DrainScratch,
    frame: Frame,
    pending: Option<UiDrawList>,

    panels: Panels,
}

impl FrameDriver {
    pub fn new(surface: Option<Arc<dyn RenderSurface>>, panels: Panels) -> Self {
        Self {
            phase: DriverPhase::Uninitialized,
            surface,
            renderer: None,
            ui: None,
            font: None,
            input: NormalizedInputState::new(),
            scratch: DrainScratch::default(),
            frame: Frame::first(),
            pending: None,
            panels,
        }
    }

    #[inline]
    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    #[inline]
    pub fn input(&self) -> &NormalizedInputState {
        &self.input
    }

    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn font_texture(&self) -> Option<TextureHandle> {
        self.font.as_ref().map(FontTexture::handle)
    }

    /// `Uninitialized -> Ready`: viewport, key map, font atlas, renderer.
    ///
    /// Any failure leaves the driver `Inert` for good.
    pub fn initialize(
        &mut self,
        renderer: Option<Box<dyn UiRenderer>>,
        textures: Option<Arc<dyn TextureUploader>>,
        font_texture_name: &str,
    ) -> OverlayResult<()> {
        if self.phase != DriverPhase::Uninitialized {
            log::warn!("overlay driver: initialize called in {:?}, ignored", self.phase);
            return Ok(());
        }

        match self.try_initialize(renderer, textures, font_texture_name) {
            Ok(()) => {
                self.phase = DriverPhase::Ready;
                Ok(())
            }
            Err(e) => {
                self.phase = DriverPhase::Inert;
                self.ui = None;
                self.renderer = None;
                Err(e)
            }
        }
    }

    fn try_initialize(
        &mut self,
        renderer: Option<Box<dyn UiRenderer>>,
        textures: Option<Arc<dyn TextureUploader>>,
        font_texture_name: &str,
    ) -> OverlayResult<()> {
        let surface = self.surface.as_ref().ok_or(OverlayError::SurfaceUnavailable)?;
        let renderer = renderer.ok_or(OverlayError::RendererUnavailable)?;
        let textures = textures.ok_or(OverlayError::RendererUnavailable)?;

        let (w, h) = surface.size();
        self.input.viewport = [w, h];

        let mut ui = EguiUi::new(KeyMap::standard());
        let atlas = ui.warm_up(self.input.viewport)?;
        let font = FontTexture::upload(textures, font_texture_name, atlas.size, &atlas.rgba8)?;

        log::info!(
            "overlay driver: ready, viewport {}x{}, font atlas {}x{}",
            w,
            h,
            atlas.size[0],
            atlas.size[1]
        );

        self.ui = Some(ui);
        self.font = Some(font);
        self.renderer = Some(renderer);
        Ok(())
    }

    pub fn tick(&mut self, bridge: &InputBridge) -> TickReport {
        if !matches!(self.phase, DriverPhase::Ready | DriverPhase::Steady) {
            return TickReport::default();
        }
        let (Some(ui), Some(surface)) = (self.ui.as_mut(), self.surface.as_ref()) else {
            return TickReport::default();
        };

        let mut report = TickReport {
            ran: true,
            ..TickReport::default()
        };

        // Ready has nothing to submit yet.
        if self.phase == DriverPhase::Steady {
            if let (Some(renderer), Some(list)) = (self.renderer.as_mut(), self.pending.as_ref()) {
                renderer.render(list);
                report.submitted = Some(list.frame_index);
            }
        }

        self.frame = self.frame.advance(surface.frame_time());
        self.input.frame_dt = self.frame.dt;

        let (w, h) = surface.size();
        self.input.viewport = [w, h];

        report.drain = bridge.drain_and_translate(&mut self.input, &mut self.scratch);

        // After the drain: queued moves can lag behind the hardware cursor.
        let captured = bridge.arbiter().is_captured();
        if captured {
            if let Some((x, y)) = bridge.arbiter().mouse().client_position() {
                self.input.cursor = [x, y];
            }
        }

        let view = PanelView {
            frame: &self.frame,
            input: &self.input,
            captured,
            timings: surface.frame_timings(),
        };
        let panels = &mut self.panels;
        let font = self.font.as_ref().map(FontTexture::handle);
        let list = self.pending.get_or_insert_with(UiDrawList::new);
        ui.run_frame(&self.input, &self.frame, font, list, |ctx| panels.show(ctx, &view));

        self.input.end_ui_pass();

        report.frame_index = self.frame.index;
        if self.phase == DriverPhase::Ready {
            self.phase = DriverPhase::Steady;
        }
        report
    }

    /// Release the font texture and renderer. The driver goes inert.
    pub fn shutdown(&mut self) {
        self.pending = None;
        self.font = None;
        self.renderer = None;
        self.ui = None;
        self.phase = DriverPhase::Inert;
    }
}
