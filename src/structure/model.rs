/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! In-memory representation of one POSCAR file

use super::errors::{PoscarError, Result};
use super::vector::Vector3D;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinate system used for the atomic positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// Fractions of the lattice vectors
    Direct,
    /// Absolute positions, multiplied by the scaling factor
    Cartesian,
}

impl CoordinateSystem {
    /// Keyword written to the coordinate-system line
    pub fn label(self) -> &'static str {
        match self {
            CoordinateSystem::Direct => "Direct",
            CoordinateSystem::Cartesian => "Cartesian",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CoordinateSystem {
    type Err = PoscarError;

    /// Case-insensitive match on "Direct" or "Cartesian"
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("direct") {
            Ok(CoordinateSystem::Direct)
        } else if label.eq_ignore_ascii_case("cartesian") {
            Ok(CoordinateSystem::Cartesian)
        } else {
            Err(PoscarError::coordinate_system(
                "coordinate system label",
                format!("{:?} is not a valid POSCAR coordinate system", label),
            ))
        }
    }
}

/// Selective-dynamics flag for one axis of one atom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicsFlag {
    /// Position is held fixed (`F`)
    Fixed,
    /// Position may relax (`T`)
    Free,
}

/// Flags for the three axes of one atom
pub type DynamicsFlags = [DynamicsFlag; 3];

/// Flags assigned to atoms that carry no explicit selective-dynamics entry
pub const ALL_FIXED: DynamicsFlags = [DynamicsFlag::Fixed; 3];

/// Default flags for [`Structure::enable_selective_dynamics`]
pub const ALL_FREE: DynamicsFlags = [DynamicsFlag::Free; 3];

impl DynamicsFlag {
    /// Token used in the coordinate block
    pub fn token(self) -> &'static str {
        match self {
            DynamicsFlag::Fixed => "F",
            DynamicsFlag::Free => "T",
        }
    }
}

impl fmt::Display for DynamicsFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DynamicsFlag {
    type Err = PoscarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "T" | "t" => Ok(DynamicsFlag::Free),
            "F" | "f" => Ok(DynamicsFlag::Fixed),
            other => Err(PoscarError::format(
                "dynamics flag",
                format!(
                    "{:?} is not a selective dynamics flag (expected T or F)",
                    other
                ),
            )),
        }
    }
}

/// One POSCAR structure
///
/// Positions are grouped by species in the order of `species`, and
/// `dynamics_flags` runs parallel to `positions`. The flags are only
/// written out while `selective_dynamics` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Comment line
    pub title: String,
    /// Universal scaling factor
    pub scale: f64,
    /// Lattice vectors, one per row
    pub lattice: [Vector3D; 3],
    /// Atom-type labels
    pub species: Vec<String>,
    /// Number of atoms of each species
    pub atom_counts: Vec<usize>,
    pub coordinate_system: CoordinateSystem,
    pub selective_dynamics: bool,
    pub positions: Vec<Vector3D>,
    pub dynamics_flags: Vec<DynamicsFlags>,
}

impl Structure {
    /// Build a structure without selective dynamics and check its invariants
    pub fn new(
        title: &str,
        scale: f64,
        lattice: [Vector3D; 3],
        species: Vec<String>,
        atom_counts: Vec<usize>,
        coordinate_system: CoordinateSystem,
        positions: Vec<Vector3D>,
    ) -> Result<Self> {
        let dynamics_flags = vec![ALL_FIXED; positions.len()];
        let structure = Self {
            title: title.to_string(),
            scale,
            lattice,
            species,
            atom_counts,
            coordinate_system,
            selective_dynamics: false,
            positions,
            dynamics_flags,
        };
        structure.validate("new")?;
        Ok(structure)
    }

    /// Total number of atoms implied by the species counts
    ///
    /// Saturates instead of overflowing; `validate` rejects such counts.
    pub fn total_atoms(&self) -> usize {
        self.atom_counts
            .iter()
            .fold(0usize, |sum, &count| sum.saturating_add(count))
    }

    /// Check the atom-count invariants, reporting failures against `operation`
    pub fn validate(&self, operation: &'static str) -> Result<()> {
        if self.species.len() != self.atom_counts.len() {
            return Err(PoscarError::format(
                operation,
                format!(
                    "{} species labels but {} atom counts",
                    self.species.len(),
                    self.atom_counts.len()
                ),
            ));
        }

        for (i, label) in self.species.iter().enumerate() {
            if self.species[..i].contains(label) {
                return Err(PoscarError::format(
                    operation,
                    format!("species {:?} is listed more than once", label),
                ));
            }
        }

        let total = self
            .atom_counts
            .iter()
            .try_fold(0usize, |sum, &count| sum.checked_add(count))
            .ok_or_else(|| PoscarError::format(operation, "atom counts overflow"))?;
        if self.positions.len() != total {
            return Err(PoscarError::format(
                operation,
                format!(
                    "invalid coordinates: {} positions for {} atoms",
                    self.positions.len(),
                    total
                ),
            ));
        }

        if self.dynamics_flags.len() != total {
            return Err(PoscarError::format(
                operation,
                format!(
                    "{} dynamics flag entries for {} atoms",
                    self.dynamics_flags.len(),
                    total
                ),
            ));
        }

        Ok(())
    }

    /// Fail with a correspondence error unless `other` has as many atoms as `self`
    pub fn check_correspondence(&self, other: &Structure, operation: &'static str) -> Result<()> {
        let (left, right) = (self.total_atoms(), other.total_atoms());
        if left != right {
            return Err(PoscarError::Correspondence {
                operation,
                left,
                right,
            });
        }
        Ok(())
    }

    /// Species label of every atom, in position order
    pub fn atom_species(&self) -> impl Iterator<Item = &str> + '_ {
        self.species
            .iter()
            .zip(&self.atom_counts)
            .flat_map(|(label, &count)| std::iter::repeat(label.as_str()).take(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic() -> [Vector3D; 3] {
        [
            Vector3D::new(1.0, 0.0, 0.0),
            Vector3D::new(0.0, 1.0, 0.0),
            Vector3D::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_coordinate_system_labels() {
        assert_eq!(
            "direct".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Direct
        );
        assert_eq!(
            " CARTESIAN ".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Cartesian
        );
        assert!(matches!(
            "spherical".parse::<CoordinateSystem>(),
            Err(PoscarError::CoordinateSystem { .. })
        ));
    }

    #[test]
    fn test_dynamics_flag_tokens() {
        assert_eq!("T".parse::<DynamicsFlag>().unwrap(), DynamicsFlag::Free);
        assert_eq!("f".parse::<DynamicsFlag>().unwrap(), DynamicsFlag::Fixed);
        assert!("X".parse::<DynamicsFlag>().is_err());
        assert_eq!(DynamicsFlag::Free.to_string(), "T");
    }

    #[test]
    fn test_new_checks_atom_counts() {
        let ok = Structure::new(
            "NaCl",
            1.0,
            cubic(),
            vec!["Na".into(), "Cl".into()],
            vec![1, 1],
            CoordinateSystem::Direct,
            vec![Vector3D::origin(), Vector3D::new(0.5, 0.5, 0.5)],
        )
        .unwrap();
        assert_eq!(ok.total_atoms(), 2);
        assert_eq!(ok.dynamics_flags, vec![ALL_FIXED; 2]);
        assert_eq!(ok.atom_species().collect::<Vec<_>>(), vec!["Na", "Cl"]);

        let short = Structure::new(
            "NaCl",
            1.0,
            cubic(),
            vec!["Na".into(), "Cl".into()],
            vec![1, 2],
            CoordinateSystem::Direct,
            vec![Vector3D::origin(), Vector3D::new(0.5, 0.5, 0.5)],
        );
        assert!(matches!(short, Err(PoscarError::Format { .. })));

        let mismatched = Structure::new(
            "NaCl",
            1.0,
            cubic(),
            vec!["Na".into()],
            vec![1, 1],
            CoordinateSystem::Direct,
            vec![Vector3D::origin(), Vector3D::new(0.5, 0.5, 0.5)],
        );
        assert!(matches!(mismatched, Err(PoscarError::Format { .. })));
    }

    #[test]
    fn test_validate_rejects_repeated_species() {
        let repeated = Structure::new(
            "NaNa",
            1.0,
            cubic(),
            vec!["Na".into(), "Na".into()],
            vec![1, 1],
            CoordinateSystem::Direct,
            vec![Vector3D::origin(), Vector3D::new(0.5, 0.5, 0.5)],
        );
        match repeated {
            Err(PoscarError::Format { reason, .. }) => assert!(reason.contains("\"Na\"")),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_total_atoms_saturates() {
        let mut s = Structure::new(
            "NaCl",
            1.0,
            cubic(),
            vec!["Na".into(), "Cl".into()],
            vec![1, 1],
            CoordinateSystem::Direct,
            vec![Vector3D::origin(), Vector3D::new(0.5, 0.5, 0.5)],
        )
        .unwrap();
        s.atom_counts = vec![usize::MAX, 1];
        assert_eq!(s.total_atoms(), usize::MAX);
        assert!(matches!(s.validate("check"), Err(PoscarError::Format { .. })));
    }
}
