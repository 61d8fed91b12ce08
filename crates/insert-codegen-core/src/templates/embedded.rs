//! Compile-time embedded templates.
//!
//! Paths are relative to this source file
//! (`crates/insert-codegen-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.

/// One level of the unrolled Solidity insertion loop. Starts with its own newline.
pub const INSERT_LEVEL: &str =
    include_str!("../../../../templates/solidity/insert_level.sol.tmpl");
