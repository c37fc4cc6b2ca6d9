/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! POSCAR reading and writing
//!
//! [`parse`] and [`serialize`] map between text and [`Structure`]; the
//! functions here add the filesystem boundary. Writes are whole-file
//! overwrites.

mod config;
mod parser;
mod writer;

pub use config::{PoscarConfig, SequenceConfig};
pub use parser::{parse, PoscarParser};
pub use writer::{serialize, show, PoscarWriter};

use crate::structure::{PoscarError, Result, Structure};
use crate::transform::Frame;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse the POSCAR file at `path`
pub fn read_poscar<P: AsRef<Path>>(path: P) -> Result<Structure> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PoscarError::MissingFile(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let structure = parse(&text)?;
    debug!("Read {}", path.display());
    Ok(structure)
}

/// Serialize `structure` and write it to `path`, replacing any existing file
pub fn write_poscar<P: AsRef<Path>>(structure: &Structure, path: P) -> Result<()> {
    let path = path.as_ref();
    structure.validate("write_poscar")?;
    fs::write(path, serialize(structure))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Write every frame to its numbered file and return the paths written
pub fn write_sequence<I>(frames: I, config: &SequenceConfig) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = Frame>,
{
    let mut written = Vec::new();
    for frame in frames {
        let path = config.path_for(frame.index);
        write_poscar(&frame.structure, &path)?;
        written.push(path);
    }
    Ok(written)
}
