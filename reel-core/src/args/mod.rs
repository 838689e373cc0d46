//! Defines the command-line arguments shared by every binary in the workspace.
//!
//! Binaries flatten `CommonArgs` into their own parser so that the data directory and
//! configuration file are spelled the same way everywhere.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Holds the standard configuration parameters parsed from the command line.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct CommonArgs {
    /// Path to the data directory (the watchlist is saved here)
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Optional configuration file (TOML, JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    /// Returns the path to the data directory.
    pub fn get_data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Returns the configuration file, if one was given.
    pub fn get_config_file(&self) -> Option<PathBuf> {
        self.config.clone()
    }

    /// Location of a named file inside the data directory.
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}
