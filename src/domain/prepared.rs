//! Prepared examples and their display grouping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::image::ImageRecord;

/// Two-level grouping of prepared examples: category, then
/// sub-category, then examples in input order.
///
/// Keys appear in first-encounter order, which is why this is an
/// `IndexMap` rather than a std map.
pub type CategoryTree = IndexMap<String, IndexMap<String, Vec<PreparedExample>>>;

/// An example joined with its cover image and category path, ready
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedExample {
    /// Unique slug (the raw record's name)
    pub slug: String,

    /// Site path of the example's page
    pub path: String,

    /// Display name from the metadata sidecar
    pub name: String,

    /// First segment of the record's directory path
    pub category: Option<String>,

    /// Second segment of the record's directory path
    pub sub_category: Option<String>,

    /// Cover image, when one matches the slug
    pub image: Option<ImageRecord>,
}

impl PreparedExample {
    /// Grouping key for the category level.
    ///
    /// Records without a category group under the empty key.
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Grouping key for the sub-category level.
    pub fn sub_category_key(&self) -> &str {
        self.sub_category.as_deref().unwrap_or_default()
    }
}
