use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use overlay_core::{OverlayResult, PixelFormat, TextureHandle, TextureUploader};
use overlay_ui::{UiDrawList, UiRenderer};

/// Host texture table without a GPU behind it.
#[derive(Default)]
pub struct TextureStore {
    next: AtomicU64,
    live: Mutex<BTreeMap<u64, String>>,
}

impl TextureStore {
    pub fn live(&self) -> usize {
        self.live.lock().len()
    }
}

impl TextureUploader for TextureStore {
    fn create_texture(
        &self,
        name: &str,
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: &[u8],
    ) -> OverlayResult<TextureHandle> {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        self.live.lock().insert(id, name.to_string());
        log::info!(
            "texture '{name}' created: {width}x{height} {format:?}, {} bytes -> #{id}",
            pixels.len()
        );
        Ok(TextureHandle(id))
    }

    fn remove_texture(&self, handle: TextureHandle) {
        match self.live.lock().remove(&handle.0) {
            Some(name) => log::info!("texture '{name}' #{} removed", handle.0),
            None => log::warn!("remove of unknown texture #{}", handle.0),
        }
    }
}

const REPORT_EVERY: u64 = 300;

/// Stands in for a GPU backend: counts what it would upload and draw.
#[derive(Default)]
pub struct LoggingRenderer {
    submitted: u64,
}

impl UiRenderer for LoggingRenderer {
    fn render(&mut self, list: &UiDrawList) {
        self.submitted += 1;
        if self.submitted % REPORT_EVERY != 1 {
            return;
        }

        let mesh = &list.mesh;
        log::debug!(
            "ui frame {}: {}x{} px, {} cmds, {} vtx bytes, {} idx bytes, {} texture updates",
            list.frame_index,
            list.screen_size_px[0],
            list.screen_size_px[1],
            mesh.cmds.len(),
            mesh.vertex_bytes().len(),
            mesh.index_bytes().len(),
            list.texture_delta.set.len()
        );
    }
}
