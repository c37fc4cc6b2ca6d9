/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! POSCAR serialization with a fixed number format

use super::config::PoscarConfig;
use crate::structure::{Result, Structure, Vector3D, ALL_FIXED};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Digits after the decimal point for the scaling factor
const SCALE_PRECISION: usize = 13;
/// Digits after the decimal point for lattice and position components
const VECTOR_PRECISION: usize = 16;

/// POSCAR file writer bound to a path configuration
#[derive(Debug, Clone)]
pub struct PoscarWriter {
    config: PoscarConfig,
}

impl PoscarWriter {
    pub fn new(config: PoscarConfig) -> Self {
        Self { config }
    }

    /// Write `structure` to `path`, or to the configured output path
    pub fn write<P: AsRef<Path>>(&self, structure: &Structure, path: Option<P>) -> Result<()> {
        match path {
            Some(p) => super::write_poscar(structure, p),
            None => super::write_poscar(structure, self.config.output_path()),
        }
    }
}

/// Render a structure as POSCAR text
///
/// Floats carry a leading space in place of a `+` sign, the scale has 13
/// decimals, vectors have 16, and atom counts are right-aligned in four
/// columns. The text ends with a newline.
pub fn serialize(structure: &Structure) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(structure.positions.len() + 10);

    lines.push(structure.title.clone());
    lines.push(format!("  {}", signed(structure.scale, SCALE_PRECISION)));
    for row in &structure.lattice {
        lines.push(format!("    {}", vector(row, "   ")));
    }
    lines.push(format!("   {}", structure.species.join("   ")));
    lines.push(format!(
        "  {}",
        structure
            .atom_counts
            .iter()
            .map(|count| format!("{:4}", count))
            .collect::<Vec<_>>()
            .join("  ")
    ));

    if structure.selective_dynamics {
        lines.push("Selective dynamics".to_string());
    }
    lines.push(structure.coordinate_system.label().to_string());

    // Every position is written; missing flag entries fall back to fixed.
    for (i, position) in structure.positions.iter().enumerate() {
        let mut line = format!(" {}", vector(position, " "));
        if structure.selective_dynamics {
            let flags = structure.dynamics_flags.get(i).copied().unwrap_or(ALL_FIXED);
            for flag in flags {
                line.push_str("  ");
                line.push_str(flag.token());
            }
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Write the serialized form of `structure` to a text sink
pub fn show<W: Write>(structure: &Structure, sink: &mut W) -> io::Result<()> {
    sink.write_all(serialize(structure).as_bytes())?;
    sink.flush()
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

/// Fixed-point rendering with a space in place of a plus sign
fn signed(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    if text.starts_with('-') {
        text
    } else {
        format!(" {}", text)
    }
}

fn vector(v: &Vector3D, separator: &str) -> String {
    v.to_array()
        .iter()
        .map(|&component| signed(component, VECTOR_PRECISION))
        .collect::<Vec<_>>()
        .join(separator)
}
