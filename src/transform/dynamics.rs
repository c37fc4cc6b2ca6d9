/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Selective dynamics flag editing

use crate::structure::{DynamicsFlags, PoscarError, Result, Structure, Vector3D, ALL_FIXED};
use log::{info, warn};

/// Axis-aligned box, half-open on every axis: `min <= p < max`
///
/// Bounds are read in whatever coordinate system the structure uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min: Vector3D,
    pub max: Vector3D,
}

impl Region {
    pub fn new(min: Vector3D, max: Vector3D) -> Self {
        Self { min, max }
    }

    /// Build from `[xmin, xmax, ymin, ymax, zmin, zmax]`
    pub fn from_bounds(bounds: [f64; 6]) -> Result<Self> {
        if bounds.iter().any(|b| b.is_nan()) {
            return Err(PoscarError::invalid_parameter(
                "region",
                "region bounds must not be NaN",
            ));
        }
        Ok(Self::new(
            Vector3D::new(bounds[0], bounds[2], bounds[4]),
            Vector3D::new(bounds[1], bounds[3], bounds[5]),
        ))
    }

    pub fn contains(&self, p: Vector3D) -> bool {
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] < self.max[axis])
    }
}

impl Structure {
    /// Turn on selective dynamics and give every atom `initial` flags
    ///
    /// Does nothing if selective dynamics is already on.
    pub fn enable_selective_dynamics(&mut self, initial: DynamicsFlags) {
        if self.selective_dynamics {
            info!("Selective dynamics flag has already been set.");
            return;
        }
        self.selective_dynamics = true;
        self.set_all_dynamics(initial);
    }

    /// Turn off selective dynamics; stored flags reset to fixed
    pub fn disable_selective_dynamics(&mut self) {
        self.selective_dynamics = false;
        self.dynamics_flags = vec![ALL_FIXED; self.positions.len()];
    }

    /// Overwrite the flags of every atom
    pub fn set_all_dynamics(&mut self, flags: DynamicsFlags) {
        self.warn_if_disabled();
        self.dynamics_flags = vec![flags; self.positions.len()];
    }

    /// Overwrite the flags of atoms inside `region`, returning how many changed
    pub fn set_dynamics_in_region(&mut self, region: &Region, flags: DynamicsFlags) -> usize {
        self.warn_if_disabled();
        let mut count = 0;
        for (position, entry) in self.positions.iter().zip(self.dynamics_flags.iter_mut()) {
            if region.contains(*position) {
                *entry = flags;
                count += 1;
            }
        }
        count
    }

    fn warn_if_disabled(&self) {
        if !self.selective_dynamics {
            warn!("selective dynamics is disabled; flags will not be written");
        }
    }
}
