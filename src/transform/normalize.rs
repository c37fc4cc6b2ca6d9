/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic wrapping of fractional coordinates

use crate::structure::{CoordinateSystem, Result, Structure};
use log::warn;

/// Shift `value` by one period towards [0, 1)
///
/// Only a single period is applied, so values below -1 or at/above 2
/// stay outside the unit interval.
pub fn wrap_once(value: f64) -> f64 {
    if value < 0.0 {
        value + 1.0
    } else if value >= 1.0 {
        value - 1.0
    } else {
        value
    }
}

/// Periodic image of `value` closest to `reference`, within one period
pub fn nearest_image(value: f64, reference: f64) -> f64 {
    if (value - reference).abs() > 0.5 {
        if value < 0.5 {
            value + 1.0
        } else {
            value - 1.0
        }
    } else {
        value
    }
}

impl Structure {
    /// Wrap every coordinate component into [0, 1) by at most one period
    pub fn normalize(&mut self) {
        if self.coordinate_system == CoordinateSystem::Cartesian {
            warn!("normalize applied to cartesian coordinates");
        }
        for position in &mut self.positions {
            *position = position.map(wrap_once);
        }
    }

    /// Move each coordinate to the periodic image nearest the matching
    /// coordinate of `reference`
    pub fn unnormalize(&mut self, reference: &Structure) -> Result<()> {
        self.check_correspondence(reference, "unnormalize")?;
        if self.coordinate_system == CoordinateSystem::Cartesian {
            warn!("unnormalize applied to cartesian coordinates");
        }
        for (position, target) in self.positions.iter_mut().zip(&reference.positions) {
            *position = position.zip_map(*target, nearest_image);
        }
        Ok(())
    }
}
