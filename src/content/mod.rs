//! On-disk content discovery and loading.
//!
//! The content root holds one directory per example, nested under its
//! category and sub-category; the assets root holds cover images
//! matched to examples by file stem.
//!
//! # Layout
//!
//! ```text
//! content/
//! └── Color/
//!     └── Basics/
//!         └── Hue/
//!             ├── Hue.json      # metadata sidecar
//!             ├── Hue.pde       # main source file
//!             └── helpers.pde
//! assets/
//! └── Color/Basics/Hue.png      # cover image (stem matches slug)
//! ```

pub mod loader;

pub use loader::{
    example_dir, load_examples, load_images, load_sources, ContentError,
};
