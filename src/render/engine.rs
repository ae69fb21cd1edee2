//! Widget drawing: background, joint markers and status lines
//!
//! Every location handed to the engine is already scaled; only the status
//! boxes are given in diagram coordinates and scaled here.

use image::RgbaImage;

use super::geometry;
use super::surface::Surface;
use crate::config::{MarkerColor, MarkerPalette};
use crate::domain::{AssessmentType, Location, Rect};

/// Running count shown in the count box, e.g. `"TJC 3 / 68"`
pub fn count_label(kind: AssessmentType, selected: usize, total: usize) -> String {
    format!("{} {} / {}", kind.label(), selected, total)
}

/// Draws onto a surface with a fixed palette and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEngine {
    palette: MarkerPalette,
    scale: f64,
}

impl RenderEngine {
    pub fn new(palette: MarkerPalette, scale: f64) -> Self {
        Self { palette, scale }
    }

    pub fn palette(&self) -> &MarkerPalette {
        &self.palette
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Resize the surface to the scaled image size and draw the image over it
    pub fn render_background<S: Surface + ?Sized>(&self, surface: &mut S, image: &RgbaImage) {
        let width = (f64::from(image.width()) * self.scale).round() as u32;
        let height = (f64::from(image.height()) * self.scale).round() as u32;
        surface.resize(width, height);
        surface.draw_image(image);
        log::debug!(
            "Background {}x{} drawn at {}x{}",
            image.width(),
            image.height(),
            surface.width(),
            surface.height()
        );
    }

    /// Draw one joint marker
    pub fn draw_marker<S: Surface + ?Sized>(&self, surface: &mut S, location: Location, fill: MarkerColor) {
        surface.draw_circle(
            location.x as f32,
            location.y as f32,
            location.radius as f32,
            fill,
            self.palette.border,
        );
    }

    /// Draw a marker colored for its selection state
    pub fn draw_joint<S: Surface + ?Sized>(&self, surface: &mut S, location: Location, selected: bool) {
        self.draw_marker(surface, location, self.palette.fill(selected));
    }

    /// Clear a status box and write `text` into it when non-empty
    pub fn draw_status_line<S: Surface + ?Sized>(&self, surface: &mut S, text: &str, status_box: Rect) {
        surface.fill_rect(status_box.scaled(self.scale), MarkerColor::WHITE);
        if text.is_empty() {
            return;
        }
        let (x, baseline) = geometry::text_origin(&status_box, self.scale);
        surface.fill_text(
            text,
            x,
            baseline,
            geometry::font_px(self.scale),
            MarkerColor::BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::status;
    use crate::render::surface::PixmapSurface;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(AssessmentType::Tjc, 3, 68), "TJC 3 / 68");
        assert_eq!(count_label(AssessmentType::Sjc, 0, 66), "SJC 0 / 66");
    }

    #[test]
    fn test_render_background_resizes() {
        let engine = RenderEngine::new(MarkerPalette::default(), 0.5);
        let mut surface = PixmapSurface::new(300, 150).unwrap();
        let image = RgbaImage::from_pixel(744, 1050, image::Rgba([0, 0, 255, 255]));
        engine.render_background(&mut surface, &image);
        assert_eq!((surface.width(), surface.height()), (372, 525));
        let [r, _, b, a] = surface.pixel(100, 100).unwrap();
        assert!(r <= 1 && b >= 254 && a == 255);
    }

    #[test]
    fn test_marker_colors_follow_state() {
        let engine = RenderEngine::new(MarkerPalette::default(), 1.0);
        let mut surface = PixmapSurface::new(100, 100).unwrap();
        let location = Location::new(50, 50, 15);

        engine.draw_joint(&mut surface, location, true);
        assert_eq!(surface.pixel(50, 50), Some([0, 128, 0, 255]));

        engine.draw_joint(&mut surface, location, false);
        assert_eq!(surface.pixel(50, 50), Some([255, 255, 255, 255]));
        // outside the marker bounding box nothing is touched
        let bounds = location.bounds(1);
        assert_eq!(surface.pixel(bounds.right as u32 + 1, 50), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_status_line_clears_scaled_box() {
        let engine = RenderEngine::new(MarkerPalette::default(), 0.5);
        let mut surface = PixmapSurface::new(400, 200).unwrap();
        engine.draw_status_line(&mut surface, "", status::COUNT_BOX);
        // count box scales to x 240..340, y 20..70
        assert_eq!(surface.pixel(240, 20), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(339, 69), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(340, 69), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(239, 20), Some([0, 0, 0, 0]));
    }
}
