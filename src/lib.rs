/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # poscar-rs
//!
//! Reading, transforming and writing VASP POSCAR structure files.
//!
//! A [`Structure`] is parsed from text with [`poscar::parse`] (or from disk
//! with [`poscar::read_poscar`]), edited in place or used to build new
//! structures, and written back with [`poscar::serialize`]. Supported
//! transformations are direct to cartesian conversion, periodic wrapping,
//! supercell generation, selective-dynamics editing, vacuum-layer expansion
//! and linear interpolation between two structures.
//!
//! ```
//! use poscar_rs::poscar;
//!
//! let text = "bcc Fe\n2.87\n1 0 0\n0 1 0\n0 0 1\nFe\n2\nDirect\n0 0 0\n0.5 0.5 0.5\n";
//! let structure = poscar::parse(text).unwrap();
//! let supercell = structure.gen_supercell(2, 2, 2).unwrap();
//! assert_eq!(supercell.total_atoms(), 16);
//! ```

pub mod cli;
pub mod poscar;
pub mod structure;
pub mod transform;

pub use structure::{
    CoordinateSystem, DynamicsFlag, DynamicsFlags, PoscarError, Result, Structure, Vector3D,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
