/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Vacuum-layer adjustment for slab models

use crate::structure::{CoordinateSystem, PoscarError, Result, Structure};

impl Structure {
    /// Widen the gap above `interlayer_point` along z by `amount`
    ///
    /// Atoms with z strictly above the point move up by `amount`; the third
    /// lattice vector grows by twice that so the periodic gap on the other
    /// side opens too. A negative `amount` closes the gap. Cartesian only.
    pub fn expand_vacuum_layer(&mut self, interlayer_point: f64, amount: f64) -> Result<()> {
        if self.coordinate_system != CoordinateSystem::Cartesian {
            return Err(PoscarError::coordinate_system(
                "expand_vacuum_layer",
                "only applicable to cartesian coordinates",
            ));
        }

        for position in &mut self.positions {
            if position.z > interlayer_point {
                position.z += amount;
            }
        }
        self.lattice[2].z += 2.0 * amount;

        self.validate("expand_vacuum_layer")
    }
}
