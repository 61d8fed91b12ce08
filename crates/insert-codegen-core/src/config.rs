//! Optional JSON configuration (`insert-codegen.config.json`).
//!
//! Every field has a default, so an empty object `{}` reproduces the built-in
//! generator: the embedded Poseidon table, the Solidity template, 20 levels and
//! strict marker checking.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::expander::Expander;
use crate::templates::{embedded, Template};
use crate::zeros::{ConstantTable, DEFAULT_DEPTH};

/// Default config file name.
pub const CONFIG_FILE: &str = "insert-codegen.config.json";

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of levels to generate.
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Per-level constants; the embedded Poseidon table when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zeroes: Option<Vec<String>>,
    /// Inline template text. Takes precedence over `template_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Template file, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    /// Reject templates that lack `$index$` or `$zero$`.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_strict() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            zeroes: None,
            template: None,
            template_path: None,
            strict: true,
        }
    }
}

impl GeneratorConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            CodegenError::ConfigNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| CodegenError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let (Some(rel), Some(dir)) = (config.template_path.as_ref(), path.parent()) {
            if rel.is_relative() {
                config.template_path = Some(dir.join(rel));
            }
        }

        debug!(path = %path.display(), depth = config.depth, "loaded config");
        Ok(config)
    }

    /// Write the config as pretty JSON. Refuses to overwrite an existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => CodegenError::ConfigExists(path.to_path_buf()),
                _ => CodegenError::Io(e),
            })?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// The constant table this config selects.
    pub fn constant_table(&self) -> ConstantTable {
        match &self.zeroes {
            Some(values) => ConstantTable::new(values.clone()),
            None => ConstantTable::poseidon(),
        }
    }

    /// The template this config selects, checked according to `strict`.
    pub fn template(&self) -> Result<Template> {
        if let Some(text) = &self.template {
            return Template::with_strictness(text.clone(), self.strict);
        }
        if let Some(path) = &self.template_path {
            return Template::load(path, self.strict);
        }
        Template::with_strictness(embedded::INSERT_LEVEL, self.strict)
    }

    /// Assemble an [`Expander`] from this config.
    pub fn expander(&self) -> Result<Expander> {
        Ok(Expander::new(
            self.constant_table(),
            self.template()?,
            self.depth,
        ))
    }
}
