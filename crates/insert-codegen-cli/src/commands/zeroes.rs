use std::path::Path;

use anyhow::Result;

use insert_codegen_core::zeros::ConstantTable;

/// Print the constant table selected by the config.
pub fn run(config_path: Option<&Path>, json: bool) -> Result<()> {
    let table = super::load_config(config_path)?.constant_table();
    println!("{}", format_table(&table, json)?);
    Ok(())
}

fn format_table(table: &ConstantTable, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(table.as_slice())?);
    }
    let lines: Vec<String> = table
        .iter()
        .enumerate()
        .map(|(level, zero)| format!("{level:>2}  {zero}"))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain() {
        let table = ConstantTable::new(vec!["11".into(), "22".into()]);
        assert_eq!(format_table(&table, false).unwrap(), " 0  11\n 1  22");
    }

    #[test]
    fn test_format_json() {
        let table = ConstantTable::poseidon();
        let text = format_table(&table, true).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, table.as_slice());
    }
}
