//! Per-level template expansion.
//!
//! Expansion walks levels `0..depth` in ascending order, renders the template
//! once per level with that level's constant, and concatenates the blocks with
//! no separator. The constant table is checked against `depth` before anything
//! is rendered, so a short table never yields partial output.

use tracing::{debug, info};

use crate::error::Result;
use crate::templates::{embedded, Template};
use crate::zeros::{ConstantTable, DEFAULT_DEPTH};

/// Expand `template` over the first `depth` entries of `constants`.
///
/// Markers are not validated here; a marker-free template is repeated verbatim.
/// Use [`Expander`] with a strict [`Template`] to reject such templates.
pub fn expand<S: AsRef<str>>(constants: &[S], template: &str, depth: usize) -> Result<String> {
    let table = ConstantTable::new(constants.iter().map(|c| c.as_ref().to_string()).collect());
    Expander::new(table, Template::lenient(template), depth).expand()
}

/// A constant table, a template and a depth.
#[derive(Debug, Clone)]
pub struct Expander {
    constants: ConstantTable,
    template: Template,
    depth: usize,
}

impl Expander {
    pub fn new(constants: ConstantTable, template: Template, depth: usize) -> Self {
        Self {
            constants,
            template,
            depth,
        }
    }

    /// The embedded Poseidon table with the Solidity insertion template at depth 20.
    pub fn poseidon_default() -> Self {
        Self::new(
            ConstantTable::poseidon(),
            Template::lenient(embedded::INSERT_LEVEL),
            DEFAULT_DEPTH,
        )
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Render all levels into one string.
    pub fn expand(&self) -> Result<String> {
        self.constants.ensure_depth(self.depth)?;

        let mut out = String::with_capacity(self.template.as_str().len() * self.depth);
        for index in 0..self.depth {
            let zero = self.constants.get(index)?;
            debug!(level = index, zero, "expanding level");
            out.push_str(&self.template.render_level(index, zero));
        }

        info!(levels = self.depth, bytes = out.len(), "expanded insertion code");
        Ok(out)
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::poseidon_default()
    }
}
