/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Supercell generation by integer replication along the lattice vectors

use crate::structure::{CoordinateSystem, PoscarError, Result, Structure, Vector3D, ALL_FIXED};
use log::debug;

impl Structure {
    /// Build an `nx` x `ny` x `nz` supercell
    ///
    /// Atoms are enumerated by original index, then by the offset along the
    /// first, second and third lattice vector, the third varying fastest.
    /// Selective dynamics is switched off on the result.
    ///
    /// Cartesian positions are shifted by the lattice rows as stored, before
    /// the scaling factor is applied; the scaling factor itself is kept.
    pub fn gen_supercell(&self, nx: usize, ny: usize, nz: usize) -> Result<Structure> {
        let dims = [nx, ny, nz];
        if dims.contains(&0) {
            return Err(PoscarError::invalid_parameter(
                "gen_supercell",
                format!("multipliers must be positive, got {}x{}x{}", nx, ny, nz),
            ));
        }
        let overflow = || {
            PoscarError::invalid_parameter(
                "gen_supercell",
                format!("{}x{}x{} supercell is too large", nx, ny, nz),
            )
        };
        let cells = nx
            .checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .ok_or_else(overflow)?;
        let capacity = self.positions.len().checked_mul(cells).ok_or_else(overflow)?;
        let atom_counts = self
            .atom_counts
            .iter()
            .map(|&count| count.checked_mul(cells))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(overflow)?;

        let mut positions = Vec::with_capacity(capacity);
        for &position in &self.positions {
            for a in 0..nx {
                for b in 0..ny {
                    for c in 0..nz {
                        let offset = Vector3D::new(a as f64, b as f64, c as f64);
                        positions.push(self.replica(position, offset, dims));
                    }
                }
            }
        }

        let mut lattice = self.lattice;
        for (row, &n) in lattice.iter_mut().zip(&dims) {
            *row = *row * n as f64;
        }

        let supercell = Structure {
            title: self.title.clone(),
            scale: self.scale,
            lattice,
            species: self.species.clone(),
            atom_counts,
            coordinate_system: self.coordinate_system,
            selective_dynamics: false,
            dynamics_flags: vec![ALL_FIXED; positions.len()],
            positions,
        };
        supercell.validate("gen_supercell")?;

        debug!(
            "Generated {}x{}x{} supercell with {} atoms",
            nx,
            ny,
            nz,
            supercell.positions.len()
        );
        Ok(supercell)
    }

    fn replica(&self, position: Vector3D, offset: Vector3D, dims: [usize; 3]) -> Vector3D {
        match self.coordinate_system {
            CoordinateSystem::Direct => Vector3D::new(
                (position.x + offset.x) / dims[0] as f64,
                (position.y + offset.y) / dims[1] as f64,
                (position.z + offset.z) / dims[2] as f64,
            ),
            CoordinateSystem::Cartesian => {
                position
                    + self.lattice[0] * offset.x
                    + self.lattice[1] * offset.y
                    + self.lattice[2] * offset.z
            }
        }
    }
}
