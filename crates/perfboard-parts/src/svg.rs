//! SVG asset cache.
//!
//! An owned cache object the rendering layer constructs and passes to
//! whatever needs artwork, keyed by filename. Replaces the ambient
//! process-wide lookup table of older designs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("svg asset `{0}` not found")]
    NotFound(String),
    #[error("failed to read svg asset: {0}")]
    Io(#[from] std::io::Error),
}

/// Filename-keyed cache of raw SVG documents.
#[derive(Debug, Default)]
pub struct SvgCache {
    root: Option<PathBuf>,
    entries: HashMap<String, String>,
}

impl SvgCache {
    /// Cache with no backing directory; entries must be inserted explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache backed by a directory of `.svg` files.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            entries: HashMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a document directly, replacing any cached copy.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(name.into(), content.into());
    }

    /// Cached document, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Fetch a document, reading it from the backing directory on first use.
    pub fn get_or_load(&mut self, name: &str) -> Result<&str, SvgError> {
        if !self.entries.contains_key(name) {
            let Some(root) = &self.root else {
                return Err(SvgError::NotFound(name.to_string()));
            };
            let path = root.join(name);
            if !path.exists() {
                return Err(SvgError::NotFound(name.to_string()));
            }
            log::debug!("loading svg asset {}", path.display());
            let content = read_svg(&path)?;
            self.entries.insert(name.to_string(), content);
        }
        Ok(self.entries[name].as_str())
    }

    /// Drop every cached document. The backing directory is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn read_svg(path: &Path) -> Result<String, SvgError> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = SvgCache::new();
        assert!(cache.is_empty());
        cache.insert("resistor.svg", "<svg/>");
        assert_eq!(cache.get("resistor.svg"), Some("<svg/>"));
        assert!(cache.contains("resistor.svg"));
    }

    #[test]
    fn test_missing_without_root() {
        let mut cache = SvgCache::new();
        assert!(matches!(
            cache.get_or_load("led.svg"),
            Err(SvgError::NotFound(_))
        ));
    }

    #[test]
    fn test_loads_from_root_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("led.svg"), "<svg>led</svg>").unwrap();

        let mut cache = SvgCache::with_root(dir.path());
        assert_eq!(cache.get_or_load("led.svg").unwrap(), "<svg>led</svg>");
        assert_eq!(cache.len(), 1);

        // Backing file can disappear; the cache still serves the entry.
        fs::remove_file(dir.path().join("led.svg")).unwrap();
        assert_eq!(cache.get_or_load("led.svg").unwrap(), "<svg>led</svg>");
    }

    #[test]
    fn test_missing_file_in_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = SvgCache::with_root(dir.path());
        assert!(matches!(
            cache.get_or_load("nope.svg"),
            Err(SvgError::NotFound(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut cache = SvgCache::new();
        cache.insert("a.svg", "<svg/>");
        cache.clear();
        assert!(cache.is_empty());
    }
}
