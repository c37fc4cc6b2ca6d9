/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Path configuration for reading and writing POSCAR files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a structure is read from and written back to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoscarConfig {
    /// Path to the input file
    pub input_path: PathBuf,
    /// Path to write to; `None` overwrites the input file
    pub output_path: Option<PathBuf>,
}

impl Default for PoscarConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("POSCAR"),
            output_path: None,
        }
    }
}

impl PoscarConfig {
    /// Configuration reading from `input_path` and writing back over it
    pub fn new<P: AsRef<Path>>(input_path: P) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_path: None,
        }
    }

    /// Resolved output path
    pub fn output_path(&self) -> &Path {
        self.output_path.as_deref().unwrap_or(&self.input_path)
    }
}

/// Naming of numbered output files such as `POSCAR1`, `POSCAR2`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Directory the files are written into
    pub directory: PathBuf,
    /// File name prefix, followed directly by the frame index
    pub prefix: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: "POSCAR".to_string(),
        }
    }
}

impl SequenceConfig {
    /// Path of the file holding frame `index`
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.directory.join(format!("{}{}", self.prefix, index))
    }
}
