//! Interactive widgets

pub mod assessment_canvas;

pub use assessment_canvas::{AssessmentCanvas, CanvasOptions, PointerEvent};
