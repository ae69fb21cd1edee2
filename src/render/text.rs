//! Glyph rasterization for status text

use std::path::Path;

use anyhow::Context;
use rusttype::{Font, Scale, point};
use tiny_skia::{Pixmap, PremultipliedColorU8};

/// DejaVu Sans, shipped so status text draws without any font configured
static DEFAULT_FONT: &[u8] = include_bytes!("../../resources/fonts/DejaVuSans.ttf");

/// Parse the bundled status text font
pub fn default_font() -> anyhow::Result<Font<'static>> {
    Font::try_from_bytes(DEFAULT_FONT).context("parsing bundled DejaVu Sans")
}

/// Load a TrueType/OpenType font from disk
pub fn load_font(path: &Path) -> anyhow::Result<Font<'static>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    Font::try_from_vec(bytes).with_context(|| format!("parsing font {}", path.display()))
}

/// Blend an opaque color over a premultiplied pixel with the given coverage
pub(crate) fn blend(dst: PremultipliedColorU8, rgb: [u8; 3], coverage: f32) -> PremultipliedColorU8 {
    let cov = coverage.clamp(0.0, 1.0);
    let mix = |s: u8, d: u8| (s as f32 * cov + d as f32 * (1.0 - cov)).round() as u8;
    PremultipliedColorU8::from_rgba(
        mix(rgb[0], dst.red()),
        mix(rgb[1], dst.green()),
        mix(rgb[2], dst.blue()),
        mix(255, dst.alpha()),
    )
    .unwrap_or(dst)
}

/// Draw `text` starting at `(x, baseline)`
pub fn draw_text(
    pixmap: &mut Pixmap,
    font: &Font<'_>,
    text: &str,
    x: f32,
    baseline: f32,
    size_px: f32,
    rgb: [u8; 3],
) {
    let (w, h) = (pixmap.width() as i32, pixmap.height() as i32);
    let pixels = pixmap.pixels_mut();

    for glyph in font.layout(text, Scale::uniform(size_px), point(x, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = bb.min.x + gx as i32;
            let py = bb.min.y + gy as i32;
            if px < 0 || py < 0 || px >= w || py >= h {
                return;
            }
            let idx = (py * w + px) as usize;
            pixels[idx] = blend(pixels[idx], rgb, coverage);
        });
    }
}
