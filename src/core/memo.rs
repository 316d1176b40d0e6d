//! Input-identity memoization for derived views.
//!
//! Consumers re-request derived views on every render pass, so each
//! view keeps a single-slot cache keyed on a content fingerprint of
//! its inputs and only recomputes when that fingerprint changes.

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Content fingerprint of a transform's inputs (first 16 hex chars of
/// the SHA256 of their canonical JSON).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint any serializable value.
    pub fn of<T: Serialize>(value: &T) -> Result<Self> {
        let bytes =
            serde_json::to_vec(value).context("Failed to serialize inputs for fingerprinting")?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();

        // Take first 8 bytes (16 hex chars)
        Ok(Self(hex::encode(&digest[..8])))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-slot cache keyed by an input fingerprint.
#[derive(Debug, Clone, Default)]
pub struct Memo<V> {
    entry: Option<(Fingerprint, V)>,
}

impl<V> Memo<V> {
    /// Create an empty memo cell
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// True when the cached entry was computed for `key`.
    pub fn is_fresh(&self, key: &Fingerprint) -> bool {
        matches!(&self.entry, Some((cached, _)) if cached == key)
    }

    /// Return the value cached for `key`, computing and storing it on
    /// a miss. A miss replaces whatever was cached before.
    pub fn get_or_compute(&mut self, key: Fingerprint, compute: impl FnOnce() -> V) -> &V {
        if !self.is_fresh(&key) {
            self.entry = None;
        }

        let (_, value) = self.entry.get_or_insert_with(|| (key, compute()));
        value
    }
}
