//! Geometric types for joint markers, pointer positions and status boxes

/// Surface-local pointer position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate from page coordinates into the surface's own coordinates
    pub fn relative_to(&self, offset_left: f32, offset_top: f32) -> Point {
        Point {
            x: self.x - offset_left,
            y: self.y - offset_top,
        }
    }
}

/// Scaled marker center and hit radius in whole pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Location {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    /// Check if a point lies strictly inside the marker circle
    pub fn contains_point(&self, point: Point) -> bool {
        let dx = f64::from(point.x) - f64::from(self.x);
        let dy = f64::from(point.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt() < f64::from(self.radius)
    }

    /// Bounding box touched when drawing this marker, padded for the stroke
    pub fn bounds(&self, stroke: i32) -> Rect {
        let r = self.radius + stroke;
        Rect::new(self.x - r, self.y - r, self.x + r, self.y + r)
    }
}

/// Logical rectangle, right/bottom exclusive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create from origin and size
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Multiply every edge by `scale`, rounding each to the nearest pixel
    pub fn scaled(&self, scale: f64) -> Rect {
        let px = |v: i32| (f64::from(v) * scale).round() as i32;
        let (x, y, w, h) = (px(self.left), px(self.top), px(self.width()), px(self.height()));
        Rect::from_xywh(x, y, w, h)
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}
