/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordinate system conversions for atomic positions

use crate::structure::{CoordinateSystem, PoscarError, Result, Structure, Vector3D};
use log::info;

/// Cartesian position of a direct coordinate in the given lattice
pub fn direct_to_cartesian(direct: Vector3D, lattice: &[Vector3D; 3]) -> Vector3D {
    lattice[0] * direct.x + lattice[1] * direct.y + lattice[2] * direct.z
}

impl Structure {
    /// Convert direct positions to cartesian ones
    ///
    /// The scaling factor is folded into both the positions and the
    /// lattice, leaving `scale == 1.0`.
    pub fn to_cartesian(&mut self) {
        if self.coordinate_system == CoordinateSystem::Cartesian {
            info!("Cartesian has already been set.");
            return;
        }

        let scale = self.scale;
        let lattice = self.lattice;
        for position in &mut self.positions {
            *position = direct_to_cartesian(*position, &lattice) * scale;
        }
        for row in &mut self.lattice {
            *row = *row * scale;
        }
        self.scale = 1.0;
        self.coordinate_system = CoordinateSystem::Cartesian;
    }

    /// Cartesian to direct conversion is not implemented and always fails
    pub fn to_direct(&mut self) -> Result<()> {
        Err(PoscarError::coordinate_system(
            "to_direct",
            "conversion from cartesian to direct coordinates is not supported",
        ))
    }

    /// Convert to the coordinate system named by `target` (case-insensitive)
    pub fn change_coordinate_system(&mut self, target: &str) -> Result<()> {
        let target: CoordinateSystem = target.parse().map_err(|_| {
            PoscarError::coordinate_system(
                "change_coordinate_system",
                format!("{:?} is not valid for a POSCAR coordinate system", target),
            )
        })?;
        self.convert_to(target)
    }

    /// Convert to `target`, doing nothing if it is already current
    pub fn convert_to(&mut self, target: CoordinateSystem) -> Result<()> {
        if target == self.coordinate_system {
            info!("{} has already been set.", target);
            return Ok(());
        }
        match target {
            CoordinateSystem::Cartesian => {
                self.to_cartesian();
                Ok(())
            }
            CoordinateSystem::Direct => self.to_direct(),
        }
    }
}
