//! Configuration for exhibit paths and site settings.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (EXHIBIT_CONTENT, EXHIBIT_ASSETS)
//! 2. Config file (.exhibit/config.yaml)
//! 3. Defaults (./content for both roots)
//!
//! Config file discovery:
//! - Searches current directory and parents for .exhibit/config.yaml
//! - Paths in the config file are relative to the config file's
//!   project root (the parent of the .exhibit directory)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::routes;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub site: Option<SiteConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Content root holding example directories (relative to project root)
    pub content: Option<String>,
    /// Assets root holding cover images (relative to project root)
    pub assets: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base path under which example pages are served
    pub base_path: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the content root
    pub content: PathBuf,
    /// Absolute path to the assets root
    pub assets: PathBuf,
    /// Base path for example page routes
    pub base_path: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".exhibit").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(&path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_content = std::env::current_dir()
        .context("Failed to determine current directory")?
        .join("content");

    let config_file = find_config_file();

    let (content, assets, base_path) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .exhibit/
        let base_dir = config_path
            .parent() // .exhibit/
            .and_then(|p| p.parent()) // project root
            .unwrap_or(Path::new("."));

        let content = if let Ok(env_content) = std::env::var("EXHIBIT_CONTENT") {
            PathBuf::from(env_content)
        } else if let Some(ref content_path) = config.paths.content {
            resolve_path(base_dir, content_path)
        } else {
            base_dir.join("content")
        };

        let assets = if let Ok(env_assets) = std::env::var("EXHIBIT_ASSETS") {
            PathBuf::from(env_assets)
        } else if let Some(ref assets_path) = config.paths.assets {
            resolve_path(base_dir, assets_path)
        } else {
            content.clone()
        };

        let base_path = config
            .site
            .and_then(|site| site.base_path)
            .unwrap_or_else(|| routes::DEFAULT_BASE_PATH.to_string());

        (content, assets, base_path)
    } else {
        // No config file - use env vars or defaults
        let content = std::env::var("EXHIBIT_CONTENT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_content.clone());

        let assets = std::env::var("EXHIBIT_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| content.clone());

        (content, assets, routes::DEFAULT_BASE_PATH.to_string())
    };

    Ok(ResolvedConfig {
        content,
        assets,
        base_path,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Get the content root directory.
pub fn content_dir() -> Result<PathBuf> {
    Ok(config()?.content.clone())
}

/// Get the assets root directory.
pub fn assets_dir() -> Result<PathBuf> {
    Ok(config()?.assets.clone())
}

/// Get the base path for example page routes.
pub fn base_path() -> Result<String> {
    Ok(config()?.base_path.clone())
}
