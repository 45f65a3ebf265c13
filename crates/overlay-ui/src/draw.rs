use ahash::AHashMap;
use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;

use overlay_core::TextureHandle;

/// UI-side texture id. The renderer resolves it to a host texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct UiTexId(pub u32);

impl UiTexId {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }
}

/// Clip rectangle in physical pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct UiRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl UiRect {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

/// GPU vertex. Color is sRGBA8 packed little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct UiVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: u32,
}

/// Indexed triangle list slice drawn with one texture and one clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct UiDrawCmd {
    pub texture: UiTexId,
    pub clip_rect: UiRect,
    pub index_range: std::ops::Range<u32>,
}

/// All UI geometry of a frame, flattened into one vertex/index buffer pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiMesh {
    pub vertices: Vec<UiVertex>,
    pub indices: Vec<u32>,
    pub cmds: SmallVec<[UiDrawCmd; 8]>,
}

impl UiMesh {
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.cmds.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Vertex buffer bytes, ready for a single upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Output of one UI pass, handed to the renderer on the following tick.
#[derive(Debug, Clone, PartialEq)]
pub struct UiDrawList {
    /// Tick that produced this list.
    pub frame_index: u64,
    pub screen_size_px: [u32; 2],
    pub pixels_per_point: f32,
    pub mesh: UiMesh,
    pub texture_delta: UiTextureDelta,
    /// Host texture bound to `reserved::FONT_ATLAS`.
    pub font_texture: Option<TextureHandle>,
}

impl UiDrawList {
    #[inline]
    pub fn new() -> Self {
        Self {
            frame_index: 0,
            screen_size_px: [0, 0],
            pixels_per_point: 1.0,
            mesh: UiMesh::default(),
            texture_delta: UiTextureDelta::default(),
            font_texture: None,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.mesh.clear();
        self.texture_delta.clear();
    }
}

impl Default for UiDrawList {
    fn default() -> Self {
        Self::new()
    }
}

/// CPU-side RGBA8 image, row-major, `size[0] * size[1] * 4` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct UiTexture {
    pub size: [u32; 2],
    pub rgba8: Vec<u8>,
}

/// Texture changes for the frame.
///
/// Apply order: `set`, then `patches`, then `free`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiTextureDelta {
    pub set: AHashMap<UiTexId, UiTexture>,
    pub patches: Vec<UiTexturePatch>,
    pub free: Vec<UiTexId>,
}

impl UiTextureDelta {
    #[inline]
    pub fn clear(&mut self) {
        self.set.clear();
        self.patches.clear();
        self.free.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.patches.is_empty() && self.free.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiTexturePatch {
    pub id: UiTexId,
    pub origin: [u32; 2],
    pub size: [u32; 2],
    pub rgba8: Vec<u8>,
}
