//! Cover image records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A cover image, matched to an example by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// File stem, matched against example slugs
    pub name: String,

    /// Path on disk
    pub path: PathBuf,
}

impl ImageRecord {
    /// Create a new image record
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
