use crate::draw::*;
use crate::texture::reserved;

/// Convert egui output into the overlay draw list.
/// egui types stop here; the renderer only ever sees `UiDrawList`.
pub fn egui_output_to_draw_list(
    ctx: &egui::Context,
    output: egui::FullOutput,
    out: &mut UiDrawList,
) {
    let ppp = ctx.pixels_per_point();
    out.pixels_per_point = ppp;

    let screen = ctx.screen_rect();
    out.screen_size_px = [
        (screen.width() * ppp).round().max(0.0) as u32,
        (screen.height() * ppp).round().max(0.0) as u32,
    ];

    apply_texture_delta(&output.textures_delta, &mut out.texture_delta);

    let primitives = ctx.tessellate(output.shapes, output.pixels_per_point);
    for egui::ClippedPrimitive {
        clip_rect,
        primitive,
    } in primitives
    {
        match primitive {
            egui::epaint::Primitive::Mesh(m) => {
                push_mesh(&m, clip_to_px(clip_rect, ppp), ppp, &mut out.mesh);
            }
            // Paint callbacks need a concrete backend; the overlay emits none.
            egui::epaint::Primitive::Callback(_) => {}
        }
    }
}

/// Pull the full font atlas image out of a texture delta.
///
/// Patches (sub-rect updates) stay in the delta.
pub fn take_font_atlas(delta: &mut egui::TexturesDelta) -> Option<UiTexture> {
    let idx = delta
        .set
        .iter()
        .position(|(id, d)| *id == egui::TextureId::default() && d.pos.is_none())?;
    let (_, d) = delta.set.remove(idx);
    let (size, rgba8) = image_to_rgba8(&d.image);
    Some(UiTexture { size, rgba8 })
}

fn clip_to_px(r: egui::Rect, ppp: f32) -> UiRect {
    UiRect {
        min_x: (r.min.x * ppp).round(),
        min_y: (r.min.y * ppp).round(),
        max_x: (r.max.x * ppp).round(),
        max_y: (r.max.y * ppp).round(),
    }
}

fn push_mesh(mesh: &egui::epaint::Mesh, clip: UiRect, ppp: f32, out: &mut UiMesh) {
    if mesh.indices.is_empty() || mesh.vertices.is_empty() || clip.is_empty() {
        return;
    }

    let base_v = out.vertices.len() as u32;
    let base_i = out.indices.len() as u32;

    out.vertices.extend(mesh.vertices.iter().map(|v| UiVertex {
        pos: [v.pos.x * ppp, v.pos.y * ppp],
        uv: [v.uv.x, v.uv.y],
        color: u32::from_le_bytes(v.color.to_array()),
    }));
    out.indices.extend(mesh.indices.iter().map(|&i| base_v + i));

    out.cmds.push(UiDrawCmd {
        texture: texture_id(mesh.texture_id),
        clip_rect: clip,
        index_range: base_i..(base_i + mesh.indices.len() as u32),
    });
}

#[inline]
fn texture_id(id: egui::TextureId) -> UiTexId {
    match id {
        egui::TextureId::Managed(0) => reserved::FONT_ATLAS,
        egui::TextureId::Managed(m) => UiTexId::new(reserved::USER_BEGIN + m as u32),
        egui::TextureId::User(u) => UiTexId::new(u as u32),
    }
}

fn apply_texture_delta(delta: &egui::TexturesDelta, out: &mut UiTextureDelta) {
    for (id, image_delta) in &delta.set {
        let tex = texture_id(*id);
        let (size, rgba8) = image_to_rgba8(&image_delta.image);

        match image_delta.pos {
            Some([x, y]) => out.patches.push(UiTexturePatch {
                id: tex,
                origin: [x as u32, y as u32],
                size,
                rgba8,
            }),
            None => {
                out.set.insert(tex, UiTexture { size, rgba8 });
            }
        }
    }

    out.free.extend(delta.free.iter().map(|id| texture_id(*id)));
}

fn image_to_rgba8(img: &egui::ImageData) -> ([u32; 2], Vec<u8>) {
    let size = img.size();
    let size = [size[0] as u32, size[1] as u32];
    let mut rgba8 = Vec::with_capacity(img.width() * img.height() * 4);

    match img {
        egui::ImageData::Color(c) => {
            for p in &c.pixels {
                rgba8.extend_from_slice(&p.to_array());
            }
        }
        // Coverage image; egui's default gamma.
        egui::ImageData::Font(f) => {
            for p in f.srgba_pixels(None) {
                rgba8.extend_from_slice(&p.to_array());
            }
        }
    }

    (size, rgba8)
}
