/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Structure transformations
//!
//! Most transformations are methods on [`Structure`](crate::structure::Structure)
//! that edit it in place; supercell generation and interpolation build new
//! structures and leave their inputs untouched.

mod coordinates;
mod dynamics;
mod interpolate;
mod normalize;
mod supercell;
mod vacuum;

pub use coordinates::direct_to_cartesian;
pub use dynamics::Region;
pub use interpolate::{lerp, Frame, Interpolation, LerpRange, Reference};
pub use normalize::{nearest_image, wrap_once};
