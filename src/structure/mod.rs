/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure data model
//!
//! This module provides the in-memory representation of a POSCAR file and
//! the error type shared by the rest of the crate.

mod errors;
mod model;
mod vector;

pub use errors::{PoscarError, Result};
pub use model::{CoordinateSystem, DynamicsFlag, DynamicsFlags, Structure, ALL_FIXED, ALL_FREE};
pub use vector::Vector3D;
