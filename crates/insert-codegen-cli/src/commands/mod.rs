//! CLI command implementations for insert-codegen.
//!
//! Each module corresponds to a subcommand (`insert-codegen <command>`).

pub mod generate;
pub mod init_config;
pub mod path;
pub mod zeroes;

use std::path::Path;

use anyhow::Result;
use insert_codegen_core::config::GeneratorConfig;

/// Load the config named on the command line, or the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(p) => Ok(GeneratorConfig::load(p)?),
        None => Ok(GeneratorConfig::default()),
    }
}
