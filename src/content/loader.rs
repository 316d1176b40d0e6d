//! Loading of example records, images, and source files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::{ExampleMeta, ExampleRecord, ImageRecord, SourceFile};

/// File extensions treated as cover images rather than source files
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Typed failures while reading a single content record.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A metadata sidecar could not be read
    #[error("failed to read sidecar {}", path.display())]
    SidecarRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A metadata sidecar held invalid JSON
    #[error("failed to parse sidecar {}", path.display())]
    SidecarParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A path had no usable file stem
    #[error("no usable file stem in {}", path.display())]
    MissingStem { path: PathBuf },
}

/// Load every example record under `root`.
///
/// Each `*.json` sidecar becomes one record. A sidecar that cannot be
/// read or parsed is logged and skipped; one bad record never aborts
/// the scan.
pub async fn load_examples(root: &Path) -> Result<Vec<ExampleRecord>> {
    let pattern = format!("{}/**/*.json", root.display());
    let paths =
        glob(&pattern).with_context(|| format!("Invalid content pattern: {pattern}"))?;

    let mut examples = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable content path: {e}");
                continue;
            }
        };

        match load_example(root, &path).await {
            Ok(example) => examples.push(example),
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }

    debug!("Loaded {} examples from {}", examples.len(), root.display());
    Ok(examples)
}

/// Load one example record from its metadata sidecar.
async fn load_example(root: &Path, sidecar: &Path) -> Result<ExampleRecord, ContentError> {
    let name = file_stem(sidecar)?;

    let content =
        fs::read_to_string(sidecar)
            .await
            .map_err(|source| ContentError::SidecarRead {
                path: sidecar.to_path_buf(),
                source,
            })?;

    let meta: ExampleMeta =
        serde_json::from_str(&content).map_err(|source| ContentError::SidecarParse {
            path: sidecar.to_path_buf(),
            source,
        })?;

    Ok(ExampleRecord {
        name,
        relative_directory: relative_directory(root, sidecar),
        meta,
    })
}

/// Load every cover image under `root`, in stable path order.
pub fn load_images(root: &Path) -> Result<Vec<ImageRecord>> {
    let mut images = Vec::new();

    for ext in IMAGE_EXTENSIONS {
        let pattern = format!("{}/**/*.{ext}", root.display());
        let paths =
            glob(&pattern).with_context(|| format!("Invalid asset pattern: {pattern}"))?;

        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable asset path: {e}");
                    continue;
                }
            };

            match file_stem(&path) {
                Ok(name) => images.push(ImageRecord { name, path }),
                Err(e) => warn!("Skipping asset: {e}"),
            }
        }
    }

    // Match order must not depend on which extension was globbed first
    images.sort_by(|a, b| a.path.cmp(&b.path));

    debug!("Loaded {} images from {}", images.len(), root.display());
    Ok(images)
}

/// List an example directory's source files in name order, skipping
/// the metadata sidecar and cover images.
pub async fn load_sources(example_dir: &Path) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    let mut entries = fs::read_dir(example_dir)
        .await
        .with_context(|| format!("Failed to read example directory: {}", example_dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if ext == "json" || IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        match file_stem(&path) {
            Ok(name) => sources.push(SourceFile { name, path }),
            Err(e) => warn!("Skipping source file: {e}"),
        }
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

/// Directory of one example under the content root.
pub fn example_dir(root: &Path, example: &ExampleRecord) -> PathBuf {
    root.join(&example.relative_directory).join(&example.name)
}

/// Category path of a sidecar: the example directory's parent,
/// relative to the content root.
fn relative_directory(root: &Path, sidecar: &Path) -> String {
    sidecar
        .parent()
        .and_then(|example_dir| example_dir.parent())
        .and_then(|categories| categories.strip_prefix(root).ok())
        .map(|relative| relative.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> Result<String, ContentError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| ContentError::MissingStem {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_directory_strips_root_and_example_dir() {
        let root = Path::new("/site/content");
        let sidecar = Path::new("/site/content/Color/Basics/Hue/Hue.json");

        assert_eq!(relative_directory(root, sidecar), "Color/Basics");
    }

    #[test]
    fn test_relative_directory_of_shallow_sidecar() {
        let root = Path::new("/site/content");
        let sidecar = Path::new("/site/content/Hue/Hue.json");

        assert_eq!(relative_directory(root, sidecar), "");
    }

    #[test]
    fn test_example_dir_joins_directory_and_slug() {
        let example = ExampleRecord::new("Hue", "Color/Basics", ExampleMeta::new("Hue"));

        assert_eq!(
            example_dir(Path::new("/site/content"), &example),
            Path::new("/site/content/Color/Basics/Hue")
        );
    }

    #[test]
    fn test_file_stem_rejects_empty() {
        assert!(file_stem(Path::new("")).is_err());
        assert_eq!(file_stem(Path::new("/a/Hue.json")).unwrap(), "Hue");
    }
}
