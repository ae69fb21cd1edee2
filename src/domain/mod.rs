//! Pure domain types with minimal dependencies
//!
//! Catalog, marker geometry and selection state. Nothing here knows about
//! pixels, images or sound.

pub mod assessment;
pub mod geometry;
pub mod joint;
pub mod location;

pub use assessment::*;
pub use geometry::*;
pub use joint::{JOINT_COUNT, Joint, JointId, Region};
pub use location::{LocationModel, Locations};
