//! Record types for the example catalog.
//!
//! This module contains the core data structures:
//! - Raw records: what the content loader produces (ExampleRecord,
//!   SourceFile, ImageRecord)
//! - Prepared records: examples joined with images and category paths
//! - CategoryTree: the two-level display grouping

pub mod example;
pub mod image;
pub mod prepared;

// Re-export commonly used types
pub use example::{ExampleMeta, ExampleRecord, SourceFile};
pub use image::ImageRecord;
pub use prepared::{CategoryTree, PreparedExample};
