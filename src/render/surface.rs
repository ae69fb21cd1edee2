//! Drawing surfaces
//!
//! `Surface` is the raster canvas the engine draws onto. `PixmapSurface`
//! implements it with tiny-skia so a widget can be exported to PNG.

use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use image::imageops::{self, FilterType};
use rusttype::Font;
use tiny_skia::{
    ColorU8, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use super::geometry::marker;
use super::text::draw_text;
use crate::config::MarkerColor;
use crate::domain::Rect;

/// 2D raster canvas
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Resize the surface, discarding its contents
    fn resize(&mut self, width: u32, height: u32);
    /// Draw `image` stretched to fill the whole surface
    fn draw_image(&mut self, image: &RgbaImage);
    /// Filled circle with a thin stroke
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, fill: MarkerColor, border: MarkerColor);
    /// Opaque rectangle fill
    fn fill_rect(&mut self, rect: Rect, color: MarkerColor);
    /// Draw a single line of text from `(x, baseline)`
    fn fill_text(&mut self, text: &str, x: f32, baseline: f32, size_px: f32, color: MarkerColor);
}

/// Build a circle path using cubic bezier curves
fn build_circle_path(cx: f32, cy: f32, r: f32) -> Option<tiny_skia::Path> {
    let k = r * marker::BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at top
    pb.move_to(cx, cy - r);
    pb.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    pb.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    pb.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    pb.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);

    pb.close();
    pb.finish()
}

/// tiny-skia backed surface
pub struct PixmapSurface {
    pixmap: Pixmap,
    font: Option<Font<'static>>,
}

impl PixmapSurface {
    /// Create a transparent surface; zero dimensions are bumped to one pixel
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        let pixmap = Pixmap::new(width.max(1), height.max(1))
            .with_context(|| format!("cannot allocate {width}x{height} surface"))?;
        Ok(Self { pixmap, font: None })
    }

    /// Use `font` for status text
    pub fn with_font(mut self, font: Font<'static>) -> Self {
        self.font = Some(font);
        self
    }

    /// Straight-alpha RGBA value at a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn encode_png(&self) -> anyhow::Result<Vec<u8>> {
        self.pixmap.encode_png().context("encoding surface as PNG")
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        self.pixmap
            .save_png(path)
            .with_context(|| format!("writing {}", path.display()))
    }
}

fn paint_for(color: MarkerColor, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = anti_alias;
    paint
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        match Pixmap::new(width.max(1), height.max(1)) {
            Some(pixmap) => self.pixmap = pixmap,
            None => log::warn!("Cannot resize surface to {}x{}", width, height),
        }
    }

    fn draw_image(&mut self, image: &RgbaImage) {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let resized;
        let src = if image.dimensions() == (w, h) {
            image
        } else {
            resized = imageops::resize(image, w, h, FilterType::Triangle);
            &resized
        };

        let Some(mut layer) = Pixmap::new(w, h) else {
            return;
        };
        for (dst, px) in layer.pixels_mut().iter_mut().zip(src.pixels()) {
            let [r, g, b, a] = px.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }

        self.pixmap.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, fill: MarkerColor, border: MarkerColor) {
        let Some(path) = build_circle_path(cx, cy, radius) else {
            return;
        };

        self.pixmap.fill_path(
            &path,
            &paint_for(fill, true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        let stroke = Stroke {
            width: marker::STROKE_WIDTH,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint_for(border, true), &stroke, Transform::identity(), None);
    }

    fn fill_rect(&mut self, rect: Rect, color: MarkerColor) {
        if let Some(r) = tiny_skia::Rect::from_xywh(
            rect.left as f32,
            rect.top as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) {
            self.pixmap
                .fill_rect(r, &paint_for(color, false), Transform::identity(), None);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, baseline: f32, size_px: f32, color: MarkerColor) {
        let Some(font) = &self.font else {
            log::trace!("No font configured, skipping text '{}'", text);
            return;
        };
        let [r, g, b, _] = color.to_rgba_u8();
        draw_text(&mut self.pixmap, font, text, x, baseline, size_px, [r, g, b]);
    }
}
