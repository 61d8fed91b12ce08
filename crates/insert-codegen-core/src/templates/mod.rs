//! Insertion-step templates.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module and expanded with plain marker substitution by
//! [`renderer::Template`].
//!
//! ## Template markers
//!
//! - `$index$` — the level number, in decimal
//! - `$zero$` — the level's empty-subtree constant
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;

pub use renderer::{Template, INDEX_MARKER, ZERO_MARKER};
