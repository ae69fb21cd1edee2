//! Layout constants for markers and status lines
//!
//! Coordinates are in pixels of the unscaled body diagram; the engine
//! multiplies them by the widget scale before drawing.

use crate::domain::Rect;

/// Joint marker constants
pub mod marker {
    /// Stroke width in surface pixels
    pub const STROKE_WIDTH: f32 = 1.0;
    /// Circle bezier approximation constant: 4/3 * (sqrt(2) - 1)
    pub const BEZIER_K: f32 = 0.552_284_8;
}

/// Status line constants
pub mod status {
    use super::Rect;

    /// Region showing the hovered joint's name
    pub const HOVER_BOX: Rect = Rect::from_xywh(30, 40, 230, 100);
    /// Region showing the running count
    pub const COUNT_BOX: Rect = Rect::from_xywh(480, 40, 200, 100);
    /// Text starts this far right of the box edge
    pub const TEXT_INSET: i32 = 5;
    /// Text baseline, shared by both boxes
    pub const BASELINE: i32 = 100;
    /// Font size in points
    pub const FONT_PT: f32 = 20.0;
    /// CSS pixels per point
    pub const PX_PER_PT: f32 = 96.0 / 72.0;
}

/// Font size in pixels for a given widget scale
pub fn font_px(scale: f64) -> f32 {
    (f64::from(status::FONT_PT) * scale).round() as f32 * status::PX_PER_PT
}

/// Text origin (left, baseline) for a status box
pub fn text_origin(status_box: &Rect, scale: f64) -> (f32, f32) {
    let x = (f64::from(status_box.left + status::TEXT_INSET) * scale).round();
    let y = (f64::from(status::BASELINE) * scale).round();
    (x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_origin() {
        assert_eq!(text_origin(&status::HOVER_BOX, 1.0), (35.0, 100.0));
        assert_eq!(text_origin(&status::COUNT_BOX, 0.5), (243.0, 50.0));
    }

    #[test]
    fn test_font_px() {
        assert_eq!(font_px(0.5), 10.0 * status::PX_PER_PT);
        assert_eq!(font_px(1.0), 20.0 * status::PX_PER_PT);
    }
}
