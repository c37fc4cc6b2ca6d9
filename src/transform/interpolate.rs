/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Linear interpolation between two structures
//!
//! Intermediate images are produced for `t = t_min, t_min + t_step, ...`
//! up to and including `t_max`. Before interpolating, positions are moved
//! to the periodic images nearest a reference structure so that an atom
//! crossing a cell boundary travels the short way.

use crate::structure::{PoscarError, Result, Structure, Vector3D};
use log::{debug, warn};
use std::iter::FusedIterator;

/// Interpolation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LerpRange {
    pub t_min: f64,
    pub t_max: f64,
    pub t_step: f64,
}

impl LerpRange {
    pub fn new(t_min: f64, t_max: f64, t_step: f64) -> Result<Self> {
        if !(t_step > 0.0 && t_step.is_finite()) {
            return Err(PoscarError::invalid_parameter(
                "lerp",
                format!("step must be positive and finite, got {}", t_step),
            ));
        }
        if !t_min.is_finite() || !t_max.is_finite() {
            return Err(PoscarError::invalid_parameter(
                "lerp",
                format!("invalid range {}..={}", t_min, t_max),
            ));
        }
        Ok(Self {
            t_min,
            t_max,
            t_step,
        })
    }

    /// Parameter of the `step`-th image, counted from zero
    fn at(&self, step: usize) -> f64 {
        self.t_min + self.t_step * step as f64
    }
}

/// Structure whose positions pick the periodic images before interpolating
#[derive(Debug, Clone, Copy, Default)]
pub enum Reference<'a> {
    /// Align the end structure to the start structure
    #[default]
    Start,
    /// Align the start structure to the end structure
    End,
    /// Align both structures to a third one
    Explicit(&'a Structure),
}

/// One interpolated image
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position in the sequence, starting at 1
    pub index: usize,
    pub t: f64,
    pub structure: Structure,
}

/// Iterator over the interpolated images
///
/// Every field except the positions is taken from the end structure.
#[derive(Debug, Clone)]
pub struct Interpolation {
    start: Vec<Vector3D>,
    end: Structure,
    range: LerpRange,
    step: usize,
}

/// Interpolate positions from `start` to `end`
pub fn lerp(
    start: &Structure,
    end: &Structure,
    range: LerpRange,
    reference: Reference<'_>,
) -> Result<Interpolation> {
    start.check_correspondence(end, "lerp")?;
    if start.coordinate_system != end.coordinate_system {
        warn!(
            "Interpolating between {} and {} coordinates",
            start.coordinate_system, end.coordinate_system
        );
    }

    let mut from = start.clone();
    let mut to = end.clone();
    match reference {
        Reference::Start => to.unnormalize(start)?,
        Reference::End => from.unnormalize(end)?,
        Reference::Explicit(r) => {
            from.unnormalize(r)?;
            to.unnormalize(r)?;
        }
    }

    debug!(
        "Interpolating {} atoms over t = {}..={} step {}",
        to.total_atoms(),
        range.t_min,
        range.t_max,
        range.t_step
    );

    Ok(Interpolation {
        start: from.positions,
        end: to,
        range,
        step: 0,
    })
}

impl Iterator for Interpolation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let t = self.range.at(self.step);
        if t > self.range.t_max {
            return None;
        }

        let mut structure = self.end.clone();
        structure.positions = self
            .start
            .iter()
            .zip(&self.end.positions)
            .map(|(&a, &b)| a.lerp(b, t))
            .collect();

        self.step += 1;
        Some(Frame {
            index: self.step,
            t,
            structure,
        })
    }
}

impl FusedIterator for Interpolation {}
