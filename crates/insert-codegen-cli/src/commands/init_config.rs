use std::path::Path;

use anyhow::Result;

use insert_codegen_core::config::{GeneratorConfig, CONFIG_FILE};

use crate::output;

/// Write the default config so it can be edited.
pub fn run(path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    let config = GeneratorConfig::default();
    config.save(path)?;

    output::print_success(&format!("Wrote {}", path.display()));
    output::print_key_value("depth", &config.depth.to_string());
    output::print_key_value("strict", &config.strict.to_string());
    Ok(())
}
