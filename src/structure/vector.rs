/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Vector3D type for lattice vectors and atomic positions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

/// A triple of floats, used both for lattice vectors and for positions
/// in either direct or cartesian form
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    /// X component (first lattice direction for direct coordinates)
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vector3D {
    /// Create a new 3D vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a new vector at the origin
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Components as an array, in x, y, z order
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Apply `f` to each component
    pub fn map<F: FnMut(f64) -> f64>(self, mut f: F) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combine two vectors component by component
    pub fn zip_map<F: FnMut(f64, f64) -> f64>(self, other: Self, mut f: F) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Point at fraction `t` along the segment from `self` to `other`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self.zip_map(other, |a, b| a + t * (b - a))
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

impl Index<usize> for Vector3D {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("axis index {} out of range for Vector3D", axis),
        }
    }
}

impl IndexMut<usize> for Vector3D {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("axis index {} out of range for Vector3D", axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_operations() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);

        let sum = v1 + v2;
        assert_relative_eq!(sum.x, 5.0);
        assert_relative_eq!(sum.z, 9.0);

        let diff = v2 - v1;
        assert_eq!(diff, Vector3D::new(3.0, 3.0, 3.0));

        let scaled = v1 * 2.5;
        assert_relative_eq!(scaled.y, 5.0);

        let mid = v1.lerp(v2, 0.5);
        assert_relative_eq!(mid.x, 2.5);
        assert_relative_eq!(mid.y, 3.5);
        assert_relative_eq!(mid.z, 4.5);
    }

    #[test]
    fn test_axis_indexing() {
        let mut v = Vector3D::from([0.1, 0.2, 0.3]);
        assert_relative_eq!(v[1], 0.2);
        v[2] += 1.0;
        assert_relative_eq!(v.z, 1.3);
        assert_eq!(v.to_array(), [0.1, 0.2, 1.3]);
    }
}
