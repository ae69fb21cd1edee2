//! Interactive body diagram for tender and swollen joint counts
//!
//! Widgets draw a body diagram with one marker per joint onto a raster
//! surface. Clicks toggle joints, pointer moves show joint names and a count
//! line tracks how many joints are selected.

pub mod assets;
pub mod audio;
pub mod config;
pub mod domain;
pub mod error;
pub mod page;
pub mod render;
pub mod session;
pub mod widget;

pub use error::{Error, Result};
