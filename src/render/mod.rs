//! Widget rendering module
//!
//! This module contains:
//! - Layout constants for markers and status lines
//! - The raster surface abstraction and its tiny-skia implementation
//! - Glyph rendering for status text
//! - The engine that draws a widget onto a surface

pub mod engine;
pub mod geometry;
pub mod surface;
pub mod text;

pub use engine::{RenderEngine, count_label};
pub use surface::{PixmapSurface, Surface};
