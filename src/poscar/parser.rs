/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Parser implementation for POSCAR files

use super::config::PoscarConfig;
use crate::structure::{
    CoordinateSystem, DynamicsFlag, DynamicsFlags, PoscarError, Result, Structure, Vector3D,
    ALL_FIXED,
};
use log::{debug, warn};
use std::path::Path;

const OPERATION: &str = "parse";

/// Index of the line holding the coordinate-system keyword (or the
/// selective-dynamics marker), counted after blank lines are removed
const MODE_LINE: usize = 7;

/// POSCAR file reader bound to a path configuration
#[derive(Debug, Clone)]
pub struct PoscarParser {
    config: PoscarConfig,
}

impl PoscarParser {
    /// Create a new parser with the given configuration
    pub fn new(config: PoscarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PoscarConfig {
        &self.config
    }

    /// Read a structure from `path`, or from the configured input path
    pub fn read<P: AsRef<Path>>(&self, path: Option<P>) -> Result<Structure> {
        match path {
            Some(p) => super::read_poscar(p),
            None => super::read_poscar(&self.config.input_path),
        }
    }
}

/// Parse POSCAR text into a structure
///
/// Blank lines are dropped before the layout is interpreted, so line
/// numbers in error messages refer to non-empty lines.
pub fn parse(text: &str) -> Result<Structure> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(PoscarError::format(OPERATION, "input is empty"));
    }

    let title = lines[0].to_string();

    let scale_line = line_at(&lines, 1, "scaling factor")?;
    let scale = parse_float(first_token(scale_line), 2, "scaling factor")?;

    let mut lattice = [Vector3D::origin(); 3];
    for (i, row) in lattice.iter_mut().enumerate() {
        let line = line_at(&lines, 2 + i, "lattice vector")?;
        *row = parse_vector(line, 3 + i, "lattice vector")?;
    }

    let species: Vec<String> = line_at(&lines, 5, "species symbols")?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let atom_counts = line_at(&lines, 6, "atom counts")?
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| {
                PoscarError::format(
                    OPERATION,
                    format!("invalid atom count at line 7: {}", token),
                )
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    if species.len() != atom_counts.len() {
        return Err(PoscarError::format(
            OPERATION,
            format!(
                "{} species symbols but {} atom counts",
                species.len(),
                atom_counts.len()
            ),
        ));
    }

    let mode_line = line_at(&lines, MODE_LINE, "coordinate system")?;
    let selective_dynamics = mode_line
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'s'));

    let system_index = if selective_dynamics {
        MODE_LINE + 1
    } else {
        MODE_LINE
    };
    let system_line = line_at(&lines, system_index, "coordinate system")?;
    let coordinate_system: CoordinateSystem = first_token(system_line).parse().map_err(|_| {
        PoscarError::coordinate_system(
            OPERATION,
            format!(
                "{:?} at line {} is not Direct or Cartesian",
                system_line,
                system_index + 1
            ),
        )
    })?;

    let total = atom_counts
        .iter()
        .try_fold(0usize, |sum, &count| sum.checked_add(count))
        .ok_or_else(|| PoscarError::format(OPERATION, "atom counts overflow"))?;
    let first = system_index + 1;
    let available = lines.len().saturating_sub(first);
    if available < total {
        return Err(PoscarError::format(
            OPERATION,
            format!(
                "atom counts require {} coordinate lines but only {} follow line {}",
                total, available, first
            ),
        ));
    }
    if available > total {
        warn!(
            "Ignoring {} lines after the coordinate block",
            available - total
        );
    }

    let mut positions = Vec::with_capacity(total);
    let mut dynamics_flags = Vec::with_capacity(total);
    for (offset, line) in lines[first..first + total].iter().enumerate() {
        let line_number = first + offset + 1;
        positions.push(parse_vector(line, line_number, "coordinate")?);
        if selective_dynamics {
            dynamics_flags.push(parse_flags(line, line_number)?);
        } else {
            dynamics_flags.push(ALL_FIXED);
        }
    }

    let structure = Structure {
        title,
        scale,
        lattice,
        species,
        atom_counts,
        coordinate_system,
        selective_dynamics,
        positions,
        dynamics_flags,
    };
    structure.validate(OPERATION)?;

    debug!(
        "Parsed {} atoms ({}, selective dynamics: {})",
        structure.total_atoms(),
        structure.coordinate_system,
        structure.selective_dynamics
    );

    Ok(structure)
}

fn line_at<'a>(lines: &[&'a str], index: usize, what: &str) -> Result<&'a str> {
    lines.get(index).copied().ok_or_else(|| {
        PoscarError::format(OPERATION, format!("missing {} (line {})", what, index + 1))
    })
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

fn parse_float(token: &str, line_number: usize, what: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| {
        PoscarError::format(
            OPERATION,
            format!("invalid {} at line {}: {:?}", what, line_number, token),
        )
    })
}

/// First three whitespace-separated floats of a line
fn parse_vector(line: &str, line_number: usize, what: &str) -> Result<Vector3D> {
    let tokens: Vec<&str> = line.split_whitespace().take(3).collect();
    if tokens.len() < 3 {
        return Err(PoscarError::format(
            OPERATION,
            format!(
                "invalid {} at line {}: expected 3 values, found {}",
                what,
                line_number,
                tokens.len()
            ),
        ));
    }
    Ok(Vector3D::new(
        parse_float(tokens[0], line_number, what)?,
        parse_float(tokens[1], line_number, what)?,
        parse_float(tokens[2], line_number, what)?,
    ))
}

/// Tokens four to six of a coordinate line
fn parse_flags(line: &str, line_number: usize) -> Result<DynamicsFlags> {
    let tokens: Vec<&str> = line.split_whitespace().skip(3).take(3).collect();
    if tokens.len() < 3 {
        return Err(PoscarError::format(
            OPERATION,
            format!("missing selective dynamics flags at line {}", line_number),
        ));
    }

    let mut flags = ALL_FIXED;
    for (flag, token) in flags.iter_mut().zip(&tokens) {
        *flag = token.parse::<DynamicsFlag>().map_err(|_| {
            PoscarError::format(
                OPERATION,
                format!("invalid dynamics flag at line {}: {:?}", line_number, token),
            )
        })?;
    }
    Ok(flags)
}
