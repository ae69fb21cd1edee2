//! Marker positions on the body diagram
//!
//! Base coordinates are in pixels of the unscaled diagram image. A widget
//! scales them once for its surface and keeps the result cached.

use std::collections::HashMap;
use std::sync::Arc;

use super::geometry::Location;
use super::joint::{JOINT_COUNT, JointId};
use crate::error::{Error, Result};

/// Hit radius shared by every joint before scaling
pub const BASE_RADIUS: i32 = 15;

/// Unscaled marker centers, indexed by `id - 1`
static BASE_CENTERS: [(i32, i32); JOINT_COUNT] = [
    (320, 80),
    (420, 80),
    (270, 170),
    (298, 155),
    (356, 150),
    (389, 150),
    (442, 155),
    (470, 170),
    (267, 320),
    (477, 320),
    (222, 425),
    (298, 410),
    (447, 410),
    (522, 425),
    (267, 625),
    (340, 610),
    (405, 610),
    (472, 625),
    (105, 625),
    (127, 650),
    (155, 685),
    (190, 700),
    (278, 690),
    (464, 690),
    (552, 700),
    (587, 685),
    (615, 650),
    (637, 625),
    (75, 660),
    (105, 690),
    (141, 720),
    (183, 745),
    (339, 760),
    (405, 760),
    (560, 745),
    (602, 720),
    (638, 690),
    (668, 660),
    (50, 695),
    (72, 730),
    (117, 770),
    (170, 780),
    (573, 780),
    (626, 770),
    (671, 730),
    (693, 695),
    (300, 850),
    (444, 850),
    (215, 900),
    (247, 913),
    (279, 927),
    (311, 940),
    (347, 955),
    (397, 955),
    (433, 940),
    (465, 927),
    (497, 913),
    (529, 900),
    (210, 940),
    (242, 953),
    (272, 967),
    (304, 980),
    (340, 995),
    (404, 995),
    (440, 980),
    (472, 967),
    (504, 953),
    (536, 940),
];

/// Scaled locations for every catalog joint
#[derive(Clone, Debug, PartialEq)]
pub struct Locations {
    scale: f64,
    entries: Vec<Location>,
}

impl Locations {
    /// Scale factor these locations were computed for
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn get(&self, id: JointId) -> Result<Location> {
        (id as usize)
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .copied()
            .ok_or(Error::NotFound(id))
    }

    /// Iterate `(id, location)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (JointId, Location)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, location)| (i as JointId + 1, *location))
    }
}

fn scale_px(value: i32, scale: f64) -> i32 {
    // f64::round rounds half away from zero
    (f64::from(value) * scale).round() as i32
}

/// Compute scaled locations for every joint
pub fn build(scale: f64) -> Result<Locations> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidScale(scale));
    }
    let entries = BASE_CENTERS
        .iter()
        .map(|&(x, y)| {
            Location::new(
                scale_px(x, scale),
                scale_px(y, scale),
                scale_px(BASE_RADIUS, scale),
            )
        })
        .collect();
    Ok(Locations { scale, entries })
}

/// Per-widget cache of scaled locations
#[derive(Debug, Default)]
pub struct LocationModel {
    cache: HashMap<u64, Arc<Locations>>,
}

impl LocationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locations for `scale`, computed on first use
    pub fn locations(&mut self, scale: f64) -> Result<Arc<Locations>> {
        if let Some(cached) = self.cache.get(&scale.to_bits()) {
            return Ok(Arc::clone(cached));
        }
        let built = Arc::new(build(scale)?);
        log::debug!("Built joint locations for scale {}", scale);
        self.cache.insert(scale.to_bits(), Arc::clone(&built));
        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_scales_with_rounding() {
        for scale in [0.1_f64, 0.5, 0.75, 1.0, 1.3, 2.0] {
            let locations = build(scale).unwrap();
            let expected = (15.0 * scale).round() as i32;
            for (_, location) in locations.iter() {
                assert_eq!(location.radius, expected);
            }
        }
    }

    #[test]
    fn test_half_scale_rounds_away_from_zero() {
        let locations = build(0.5).unwrap();
        // radius 15 * 0.5 = 7.5
        assert_eq!(locations.get(1).unwrap(), Location::new(160, 40, 8));
        // 267 * 0.5 = 133.5
        assert_eq!(locations.get(9).unwrap(), Location::new(134, 160, 8));
        assert_eq!(locations.get(68).unwrap(), Location::new(268, 470, 8));
    }

    #[test]
    fn test_fractional_scales_round_in_double_precision() {
        // 850 * 0.13 lands on 110.5, 50 * 0.29 just below 14.5
        assert_eq!(build(0.13).unwrap().get(47).unwrap(), Location::new(39, 111, 2));
        assert_eq!(build(0.21).unwrap().get(5).unwrap(), Location::new(75, 32, 3));
        assert_eq!(build(0.29).unwrap().get(39).unwrap(), Location::new(14, 202, 4));
    }

    #[test]
    fn test_invalid_scale() {
        assert_eq!(build(0.0), Err(Error::InvalidScale(0.0)));
        assert_eq!(build(-1.0), Err(Error::InvalidScale(-1.0)));
        assert!(matches!(build(f64::NAN), Err(Error::InvalidScale(_))));
        assert!(matches!(build(f64::INFINITY), Err(Error::InvalidScale(_))));
    }

    #[test]
    fn test_unknown_id() {
        let locations = build(1.0).unwrap();
        assert_eq!(locations.get(0), Err(Error::NotFound(0)));
        assert_eq!(locations.get(69), Err(Error::NotFound(69)));
        assert_eq!(locations.iter().count(), JOINT_COUNT);
    }

    #[test]
    fn test_model_caches_per_scale() {
        let mut model = LocationModel::new();
        let a = model.locations(0.5).unwrap();
        let b = model.locations(0.5).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = model.locations(1.0).unwrap();
        assert_eq!(c.scale(), 1.0);
        assert_eq!(c.get(2).unwrap(), Location::new(420, 80, 15));
        assert!(model.locations(0.0).is_err());
    }
}
