use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use insert_codegen_core::config::GeneratorConfig;

use crate::output;
use crate::GenerateArgs;

/// Expand the template for every level and emit the result.
///
/// Command-line flags override the config file. Stdout output is followed by a
/// single newline; `--output` writes the expansion unchanged.
pub fn run(config_path: Option<&Path>, args: &GenerateArgs) -> Result<()> {
    let config = apply_overrides(super::load_config(config_path)?, args);
    let text = render(&config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!(
                "Wrote {} levels to {}",
                config.depth,
                path.display()
            ));
        }
        None => write_stdout(&mut std::io::stdout().lock(), &text)?,
    }

    Ok(())
}

/// Emit the expansion followed by a single newline.
fn write_stdout(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(path) = &args.template {
        config.template = None;
        config.template_path = Some(path.clone());
    }
    if args.allow_missing_markers {
        config.strict = false;
    }
    config
}

fn render(config: &GeneratorConfig) -> Result<String> {
    let expander = config.expander()?;
    let missing = expander.template().missing_markers();
    if !missing.is_empty() {
        output::print_warning(&format!(
            "template lacks {}; it is repeated unchanged for those markers",
            missing.join(" and ")
        ));
    }
    info!(
        depth = expander.depth(),
        constants = expander.constants().len(),
        "generating insertion levels"
    );
    Ok(expander.expand()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insert_codegen_core::zeros::ZEROES;

    #[test]
    fn test_overrides_take_precedence() {
        let args = GenerateArgs {
            depth: Some(3),
            template: Some("level.tmpl".into()),
            allow_missing_markers: true,
            output: None,
        };
        let config = GeneratorConfig {
            template: Some("inline $index$ $zero$".into()),
            ..GeneratorConfig::default()
        };
        let merged = apply_overrides(config, &args);
        assert_eq!(merged.depth, 3);
        assert!(merged.template.is_none());
        assert_eq!(merged.template_path.as_deref(), Some(Path::new("level.tmpl")));
        assert!(!merged.strict);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let merged = apply_overrides(GeneratorConfig::default(), &GenerateArgs::default());
        assert_eq!(merged, GeneratorConfig::default());
    }

    #[test]
    fn test_render_default() {
        let text = render(&GeneratorConfig::default()).unwrap();
        assert!(text.contains(ZEROES[19]));
        assert!(text.contains("// i == 19\n"));
        assert!(!text.contains("// i == 20\n"));
    }

    #[test]
    fn test_stdout_gets_blocks_and_one_newline() {
        let text = render(&GeneratorConfig::default()).unwrap();
        let expected: String = (0..20)
            .map(|i| {
                format!(
                    "\n// i == {i}\nif (((checkIndex >> {i}) & 1) == 0) {{\n    left = currentHash;\n    right = {z};\n    filledSubtrees[{i}] = currentHash;\n}} else {{\n    left = filledSubtrees[{i}];\n    right = currentHash;\n}}\ncurrentHash = hasher.poseidon([left, right]);\n",
                    z = ZEROES[i]
                )
            })
            .collect();

        let mut buf = Vec::new();
        write_stdout(&mut buf, &text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected + "\n");
    }

    #[test]
    fn test_lenient_template_with_markers_renders() {
        let config = GeneratorConfig {
            template: Some("$index$=$zero$;".into()),
            zeroes: Some(vec!["a".into()]),
            depth: 1,
            strict: false,
            ..GeneratorConfig::default()
        };
        assert!(config.expander().unwrap().template().missing_markers().is_empty());
        assert_eq!(render(&config).unwrap(), "0=a;");
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("levels.sol");
        let args = GenerateArgs {
            depth: Some(2),
            output: Some(out.clone()),
            ..GenerateArgs::default()
        };
        run(None, &args).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.matches("// i == ").count(), 2);
        assert!(written.starts_with('\n'));
    }

    #[test]
    fn test_run_depth_past_table_fails() {
        let args = GenerateArgs {
            depth: Some(ZEROES.len() + 1),
            ..GenerateArgs::default()
        };
        let err = run(None, &args).unwrap_err();
        assert!(err.to_string().contains("level 21"));
    }
}
