use std::path::Path;

use anyhow::Result;

use insert_codegen_core::path::{insertion_path, PathStep, Side};

/// Print, per level, which branch of the generated code leaf `index` takes.
pub fn run(
    config_path: Option<&Path>,
    index: u64,
    depth: Option<usize>,
    json: bool,
) -> Result<()> {
    let depth = match depth {
        Some(d) => d,
        None => super::load_config(config_path)?.depth,
    };
    let steps = insertion_path(index, depth)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }
    for step in &steps {
        println!("{}", describe(step));
    }
    Ok(())
}

fn describe(step: &PathStep) -> String {
    let action = match step.side {
        Side::Left => format!(
            "left,  right = zeroes[{}], store filledSubtrees[{}]",
            step.level, step.level
        ),
        Side::Right => format!("right, left = filledSubtrees[{}]", step.level),
    };
    format!(
        "level {:>2}: {action} (pair starts at {})",
        step.level, step.filled_subtree_index
    )
}
