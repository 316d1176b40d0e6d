//! Two-level category grouping of prepared examples.

use crate::domain::{CategoryTree, PreparedExample};

/// Group prepared examples into a category tree.
///
/// Categories and sub-categories appear in the order they are first
/// encountered, and each leaf list keeps input order. No sorting and
/// no deduplication happen at any level. Records without a category
/// or sub-category group under the empty key.
pub fn organize_examples(examples: &[PreparedExample]) -> CategoryTree {
    let mut tree = CategoryTree::default();

    for example in examples {
        tree.entry(example.category_key().to_string())
            .or_default()
            .entry(example.sub_category_key().to_string())
            .or_default()
            .push(example.clone());
    }

    tree
}
