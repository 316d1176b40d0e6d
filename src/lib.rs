//! exhibit - Example catalog shaping for documentation sites
//!
//! Takes the raw records behind a documentation site's example
//! collection (metadata sidecars, cover images, source files) and
//! derives the structures its UI renders:
//!
//! - an example's source files ordered so the main file leads
//! - examples joined with their cover image and site path
//! - a two-level category tree
//! - curated related-example lists
//!
//! Every derived view can be memoized on a fingerprint of its inputs,
//! so consumers are free to re-request views on every render pass and
//! only pay for recomputation when the underlying records change.
//!
//! # Modules
//!
//! - `domain`: record types (ExampleRecord, ImageRecord, PreparedExample)
//! - `core`: the derivations and their memoization
//! - `content`: on-disk content discovery and loading
//! - `routes`: site path construction
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Print the category tree of the configured content directory
//! exhibit tree
//!
//! # Show one example, including its display-ordered source files
//! exhibit show Hue --files
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod routes;

// Re-export main types at crate root for convenience
pub use crate::core::{
    order_files, organize_examples, prepare_examples, related_examples, ExampleIndex,
    Fingerprint, Memo, OrderedFiles,
};
pub use content::ContentError;
pub use domain::{
    CategoryTree, ExampleMeta, ExampleRecord, ImageRecord, PreparedExample, SourceFile,
};
