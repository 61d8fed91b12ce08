//! Core library for insert-codegen.
//!
//! Generates the unrolled body of an incremental Merkle-tree insertion: one
//! block per level, each branching on a bit of the leaf index and pairing the
//! current hash with either the level's filled subtree or its empty-subtree
//! constant.
//!
//! - [`zeros`] — the embedded BN254 Poseidon empty-subtree table
//! - [`templates`] — the embedded insertion-step template and marker substitution
//! - [`expander`] — per-level expansion into a single source string
//! - [`config`] — optional JSON overrides for depth, constants and template
//! - [`path`] — the insertion path a leaf index takes through the generated code

pub mod config;
pub mod error;
pub mod expander;
pub mod path;
pub mod templates;
pub mod zeros;
