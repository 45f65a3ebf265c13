#![cfg(feature = "egui")]

mod input;
mod output;

pub use input::*;
pub use output::*;

use overlay_core::{Frame, OverlayError, OverlayResult, TextureHandle};
use overlay_input::NormalizedInputState;

use crate::draw::{UiDrawList, UiTexture};

/// egui driver fed from `NormalizedInputState`. Knows nothing about the renderer.
pub struct EguiUi {
    ctx: egui::Context,
    input: EguiInputBridge,
}

impl EguiUi {
    #[inline]
    pub fn new(key_map: KeyMap) -> Self {
        Self {
            ctx: egui::Context::default(),
            input: EguiInputBridge::new(key_map),
        }
    }

    #[inline]
    pub fn ctx(&self) -> &egui::Context {
        &self.ctx
    }

    #[inline]
    pub fn key_map(&self) -> &KeyMap {
        self.input.key_map()
    }

    /// Run an input-less pass so egui builds its fonts; returns the atlas image.
    pub fn warm_up(&mut self, viewport: [u32; 2]) -> OverlayResult<UiTexture> {
        let raw = egui::RawInput {
            screen_rect: Some(screen_rect(viewport)),
            ..Default::default()
        };

        self.ctx.begin_frame(raw);
        let mut out = self.ctx.end_frame();

        take_font_atlas(&mut out.textures_delta)
            .ok_or_else(|| OverlayError::FontAtlas("egui produced no font atlas".into()))
    }

    /// Run one UI frame, overwriting `out` with its geometry.
    pub fn run_frame<F>(
        &mut self,
        st: &NormalizedInputState,
        frame: &Frame,
        font_texture: Option<TextureHandle>,
        out: &mut UiDrawList,
        build: F,
    ) where
        F: FnOnce(&egui::Context),
    {
        let raw = self.input.build_raw_input(st, frame);
        self.ctx.begin_frame(raw);

        build(&self.ctx);

        let full_output = self.ctx.end_frame();

        out.clear();
        out.frame_index = frame.index;
        out.font_texture = font_texture;
        egui_output_to_draw_list(&self.ctx, full_output, out);
    }
}
