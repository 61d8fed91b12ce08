//! Marker-substitution templates.
//!
//! A template is plain source text containing `$index$` and `$zero$`. Rendering a
//! level replaces every occurrence of each marker verbatim; nothing else in the text
//! is interpreted.
//!
//! Templates are **strict** by default: [`Template::parse`] rejects text that lacks
//! either marker, since a block without `$index$` or `$zero$` renders identically
//! for every level and the generated code would quietly ignore the tree position.
//! [`Template::lenient`] skips the check and passes such text through unchanged.
//!
//! ```ignore
//! use insert_codegen_core::templates::{embedded, Template};
//!
//! let template = Template::parse(embedded::INSERT_LEVEL)?;
//! let block = template.render_level(3, "12818849578198618706853641503807770441784379819766699750158640467167373686827");
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::{CodegenError, Result};

/// Replaced with the level number.
pub const INDEX_MARKER: &str = "$index$";

/// Replaced with the level's empty-subtree constant.
pub const ZERO_MARKER: &str = "$zero$";

/// An immutable insertion-step template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Parse a template in strict mode.
    ///
    /// Fails with [`CodegenError::EmptyTemplate`] on empty text and with
    /// [`CodegenError::MissingMarker`] when either marker is absent.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CodegenError::EmptyTemplate);
        }
        for marker in [ZERO_MARKER, INDEX_MARKER] {
            if !text.contains(marker) {
                return Err(CodegenError::MissingMarker { marker });
            }
        }
        Ok(Self { text })
    }

    /// Accept any text, including text with no markers.
    pub fn lenient(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a template with the given strictness.
    pub fn with_strictness(text: impl Into<String>, strict: bool) -> Result<Self> {
        if strict {
            Self::parse(text)
        } else {
            Ok(Self::lenient(text))
        }
    }

    /// Read a template file from disk.
    pub fn load(path: &Path, strict: bool) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            CodegenError::TemplateNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded template");
        Self::with_strictness(text, strict)
    }

    /// Render one level: `$zero$` becomes `zero`, then `$index$` becomes `index`.
    pub fn render_level(&self, index: usize, zero: &str) -> String {
        self.text
            .replace(ZERO_MARKER, zero)
            .replace(INDEX_MARKER, &index.to_string())
    }

    /// Markers this template does not contain, zero marker first.
    pub fn missing_markers(&self) -> Vec<&'static str> {
        [ZERO_MARKER, INDEX_MARKER]
            .into_iter()
            .filter(|m| !self.text.contains(m))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_level_replaces_every_marker() {
        let t = Template::parse("$index$:$zero$/$index$").unwrap();
        assert_eq!(t.render_level(7, "Z"), "7:Z/7");
    }

    #[test]
    fn test_parse_rejects_missing_zero() {
        match Template::parse("only $index$") {
            Err(CodegenError::MissingMarker { marker }) => assert_eq!(marker, ZERO_MARKER),
            other => panic!("expected MissingMarker, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_index() {
        match Template::parse("only $zero$") {
            Err(CodegenError::MissingMarker { marker }) => assert_eq!(marker, INDEX_MARKER),
            other => panic!("expected MissingMarker, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Template::parse(""), Err(CodegenError::EmptyTemplate)));
    }

    #[test]
    fn test_missing_markers() {
        assert!(Template::lenient("$index$ $zero$").missing_markers().is_empty());
        assert_eq!(Template::lenient("$index$").missing_markers(), vec![ZERO_MARKER]);
        assert_eq!(
            Template::lenient("plain").missing_markers(),
            vec![ZERO_MARKER, INDEX_MARKER]
        );
    }

    #[test]
    fn test_lenient_passes_through() {
        let t = Template::lenient("no markers\n");
        assert_eq!(t.render_level(0, "Z"), "no markers\n");
        assert_eq!(t.render_level(5, "Y"), "no markers\n");
    }

    #[test]
    fn test_zero_value_containing_index_marker_is_substituted() {
        // Zero goes in first, so a marker inside the value is expanded too.
        let t = Template::parse("$zero$ $index$").unwrap();
        assert_eq!(t.render_level(2, "$index$"), "2 2");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("nope.tmpl"), true).unwrap_err();
        assert!(matches!(err, CodegenError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.tmpl");
        std::fs::write(&path, "[$index$]=$zero$\n").unwrap();
        let t = Template::load(&path, true).unwrap();
        assert_eq!(t.render_level(1, "9"), "[1]=9\n");
    }
}
