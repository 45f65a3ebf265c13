use std::sync::Arc;

use overlay_core::{OverlayError, OverlayResult, PixelFormat, TextureHandle, TextureUploader};

use crate::draw::UiTexId;

/// Reserved texture ids for overlay UI.
pub mod reserved {
    use super::UiTexId;

    pub const FONT_ATLAS: UiTexId = UiTexId(1);

    /// First id handed to other UI-managed textures.
    pub const USER_BEGIN: u32 = 16;
}

/// Font atlas uploaded to the host renderer.
///
/// Owns the host texture: dropping it releases the texture exactly once.
pub struct FontTexture {
    handle: TextureHandle,
    size: [u32; 2],
    uploader: Arc<dyn TextureUploader>,
}

impl FontTexture {
    pub fn upload(
        uploader: Arc<dyn TextureUploader>,
        name: &str,
        size: [u32; 2],
        rgba8: &[u8],
    ) -> OverlayResult<Self> {
        let format = PixelFormat::Rgba8;
        let expected = size[0] as usize * size[1] as usize * format.bytes_per_pixel();
        if size[0] == 0 || size[1] == 0 || rgba8.len() != expected {
            return Err(OverlayError::FontAtlas(format!(
                "bad atlas image: {}x{} with {} bytes",
                size[0],
                size[1],
                rgba8.len()
            )));
        }

        let handle = uploader.create_texture(name, size[0], size[1], format, rgba8)?;
        log::debug!("font atlas '{name}' uploaded: {}x{} -> {:?}", size[0], size[1], handle);

        Ok(Self {
            handle,
            size,
            uploader,
        })
    }

    #[inline]
    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    #[inline]
    pub fn size(&self) -> [u32; 2] {
        self.size
    }
}

impl Drop for FontTexture {
    fn drop(&mut self) {
        self.uploader.remove_texture(self.handle);
        log::debug!("font atlas released: {:?}", self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        created: Mutex<Vec<(String, u32, u32)>>,
        removed: Mutex<Vec<TextureHandle>>,
    }

    impl TextureUploader for Recorder {
        fn create_texture(
            &self,
            name: &str,
            width: u32,
            height: u32,
            _format: PixelFormat,
            _pixels: &[u8],
        ) -> OverlayResult<TextureHandle> {
            self.created.lock().push((name.to_string(), width, height));
            Ok(TextureHandle(42))
        }

        fn remove_texture(&self, handle: TextureHandle) {
            self.removed.lock().push(handle);
        }
    }

    #[test]
    fn drop_releases_texture_once() {
        let rec = Arc::new(Recorder::default());
        let tex = FontTexture::upload(rec.clone(), "Atlas", [2, 2], &[0u8; 16]).unwrap();
        assert_eq!(tex.handle(), TextureHandle(42));
        assert!(rec.removed.lock().is_empty());

        drop(tex);

        assert_eq!(*rec.removed.lock(), vec![TextureHandle(42)]);
        assert_eq!(*rec.created.lock(), vec![("Atlas".to_string(), 2, 2)]);
    }

    #[test]
    fn wrong_pixel_count_is_rejected_before_upload() {
        let rec = Arc::new(Recorder::default());
        let err = FontTexture::upload(rec.clone(), "Atlas", [4, 4], &[0u8; 15]);
        assert!(matches!(err, Err(OverlayError::FontAtlas(_))));
        assert!(rec.created.lock().is_empty());
    }
}
