//! Derived views over the example records.
//!
//! This module contains:
//! - order: source-file display ordering
//! - prepare: joining examples with images and site paths
//! - organize: two-level category grouping
//! - relate: curated related-example selection
//! - memo, index: input-fingerprint memoization of the above

pub mod index;
pub mod memo;
pub mod order;
pub mod organize;
pub mod prepare;
pub mod relate;

// Re-export commonly used types
pub use index::ExampleIndex;
pub use memo::{Fingerprint, Memo};
pub use order::{order_files, OrderedFiles};
pub use organize::organize_examples;
pub use prepare::prepare_examples;
pub use relate::related_examples;
