/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! A thin driver over the library: every subcommand reads one or two
//! POSCAR files, applies a single transformation and writes the result.

use crate::poscar::{self, PoscarConfig, PoscarParser, PoscarWriter, SequenceConfig};
use crate::structure::{DynamicsFlag, DynamicsFlags, Structure, ALL_FREE};
use crate::transform::{self, LerpRange, Reference, Region};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "poscar-rs", version, about = "Read, transform and write POSCAR files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Input file plus an optional output file (defaults to the input)
#[derive(Debug, Args)]
pub struct InOut {
    /// POSCAR file to read
    pub input: PathBuf,
    /// File to write; the input is overwritten when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InOut {
    fn config(&self) -> PoscarConfig {
        PoscarConfig {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the structure in POSCAR form
    Show {
        input: PathBuf,
        /// Print a JSON view instead
        #[arg(long)]
        json: bool,
    },
    /// Change the coordinate system
    Convert {
        #[command(flatten)]
        paths: InOut,
        /// Target system: direct or cartesian
        #[arg(long)]
        to: String,
    },
    /// Wrap fractional coordinates into [0, 1)
    Normalize {
        #[command(flatten)]
        paths: InOut,
    },
    /// Move coordinates to the periodic images closest to a reference
    Unnormalize {
        #[command(flatten)]
        paths: InOut,
        #[arg(long)]
        reference: PathBuf,
    },
    /// Replicate the cell along its lattice vectors
    Supercell {
        #[command(flatten)]
        paths: InOut,
        nx: usize,
        ny: usize,
        nz: usize,
    },
    /// Enable selective dynamics and set flags
    Dynamics {
        #[command(flatten)]
        paths: InOut,
        /// Three T/F flags
        #[arg(long, num_args = 3, default_values = ["T", "T", "T"])]
        flags: Vec<String>,
        /// Restrict to a box: xmin xmax ymin ymax zmin zmax
        #[arg(long, num_args = 6, allow_negative_numbers = true)]
        region: Option<Vec<f64>>,
    },
    /// Write interpolated images between two structures
    Lerp {
        start: PathBuf,
        end: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long, default_value_t = 1.0)]
        max: f64,
        #[arg(long)]
        step: f64,
        /// Structure used to resolve periodic images (defaults to START)
        #[arg(long)]
        reference: Option<PathBuf>,
        #[arg(long, default_value = ".")]
        directory: PathBuf,
        #[arg(long, default_value = "POSCAR")]
        prefix: String,
    },
    /// Shift atoms above a height and enlarge the cell along z
    Vacuum {
        #[command(flatten)]
        paths: InOut,
        /// Cartesian z separating the two layers
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
        /// Distance to move the upper layer
        #[arg(long, allow_negative_numbers = true)]
        by: f64,
    },
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show { input, json } => {
            let structure = read(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&structure)?);
            } else {
                poscar::show(&structure, &mut io::stdout().lock())?;
            }
        }
        Command::Convert { paths, to } => {
            edit(&paths, |s| s.change_coordinate_system(&to))?;
        }
        Command::Normalize { paths } => {
            edit(&paths, |s| {
                s.normalize();
                Ok(())
            })?;
        }
        Command::Unnormalize { paths, reference } => {
            let reference = read(&reference)?;
            edit(&paths, |s| s.unnormalize(&reference))?;
        }
        Command::Supercell { paths, nx, ny, nz } => {
            let config = paths.config();
            let structure = PoscarParser::new(config.clone()).read(None::<&Path>)?;
            let supercell = structure.gen_supercell(nx, ny, nz)?;
            PoscarWriter::new(config).write(&supercell, None::<&Path>)?;
        }
        Command::Dynamics { paths, flags, region } => {
            let flags = parse_flags(&flags)?;
            let region = region
                .map(|b| Region::from_bounds([b[0], b[1], b[2], b[3], b[4], b[5]]))
                .transpose()?;
            edit(&paths, |s| {
                s.enable_selective_dynamics(ALL_FREE);
                match &region {
                    Some(region) => {
                        s.set_dynamics_in_region(region, flags);
                    }
                    None => s.set_all_dynamics(flags),
                }
                Ok(())
            })?;
        }
        Command::Lerp {
            start,
            end,
            min,
            max,
            step,
            reference,
            directory,
            prefix,
        } => {
            let start = read(&start)?;
            let end = read(&end)?;
            let reference = reference.as_deref().map(read).transpose()?;
            let reference = match &reference {
                Some(r) => Reference::Explicit(r),
                None => Reference::Start,
            };
            let range = LerpRange::new(min, max, step)?;
            let frames = transform::lerp(&start, &end, range, reference)?;
            let config = SequenceConfig { directory, prefix };
            let written = poscar::write_sequence(frames, &config)?;
            log::info!("Wrote {} interpolated structures", written.len());
        }
        Command::Vacuum { paths, at, by } => {
            edit(&paths, |s| s.expand_vacuum_layer(at, by))?;
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<Structure> {
    poscar::read_poscar(path).with_context(|| format!("failed to load {}", path.display()))
}

/// Read, modify in place and write back according to `paths`
fn edit<F>(paths: &InOut, f: F) -> Result<()>
where
    F: FnOnce(&mut Structure) -> crate::structure::Result<()>,
{
    let config = paths.config();
    let mut structure = PoscarParser::new(config.clone())
        .read(None::<&Path>)
        .with_context(|| format!("failed to load {}", config.input_path.display()))?;
    f(&mut structure)?;
    PoscarWriter::new(config.clone())
        .write(&structure, None::<&Path>)
        .with_context(|| format!("failed to write {}", config.output_path().display()))?;
    Ok(())
}

fn parse_flags(tokens: &[String]) -> Result<DynamicsFlags> {
    let mut flags = [DynamicsFlag::Fixed; 3];
    for (flag, token) in flags.iter_mut().zip(tokens) {
        *flag = token.parse()?;
    }
    Ok(flags)
}
