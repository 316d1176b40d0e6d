//! Raw example records and their metadata sidecars.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A raw example record as produced by the content loader.
///
/// `name` is the unique slug of the example within its collection and
/// is what images and related-example lists match against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRecord {
    /// Unique slug within the collection
    pub name: String,

    /// Slash-delimited "Category/SubCategory" path of the example's
    /// directory, relative to the content root
    #[serde(default)]
    pub relative_directory: String,

    /// Metadata parsed from the example's JSON sidecar
    pub meta: ExampleMeta,
}

impl ExampleRecord {
    /// Create a new example record
    pub fn new(
        name: impl Into<String>,
        relative_directory: impl Into<String>,
        meta: ExampleMeta,
    ) -> Self {
        Self {
            name: name.into(),
            relative_directory: relative_directory.into(),
            meta,
        }
    }
}

/// Metadata carried in an example's JSON sidecar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleMeta {
    /// Human-readable display name
    pub name: String,

    /// Short description shown in listings
    #[serde(default)]
    pub description: Option<String>,

    /// Slugs of curated related examples
    #[serde(default)]
    pub related: Vec<String>,
}

impl ExampleMeta {
    /// Create metadata with just a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            related: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add related example slugs
    pub fn with_related(mut self, related: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.related.extend(related.into_iter().map(Into::into));
        self
    }
}

/// A source file belonging to an example.
///
/// The `name` is the file stem; the file sharing its stem with the
/// example slug is considered the main file for display ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File stem
    pub name: String,

    /// Path on disk
    pub path: PathBuf,
}

impl SourceFile {
    /// Create a new source file record
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults_on_deserialize() {
        let meta: ExampleMeta = serde_json::from_str(r#"{"name": "Hue"}"#).unwrap();

        assert_eq!(meta.name, "Hue");
        assert!(meta.description.is_none());
        assert!(meta.related.is_empty());
    }

    #[test]
    fn test_record_tolerates_missing_directory() {
        let json = r#"{"name": "Hue", "meta": {"name": "Hue"}}"#;
        let record: ExampleRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name, "Hue");
        assert!(record.relative_directory.is_empty());
    }

    #[test]
    fn test_meta_builders() {
        let meta = ExampleMeta::new("Linear Gradient")
            .with_description("Blends two colors along a line")
            .with_related(["RadialGradient", "Hue"]);

        assert_eq!(meta.related, vec!["RadialGradient", "Hue"]);
        assert!(meta.description.is_some());
    }
}
