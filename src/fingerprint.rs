//! Content fingerprint store for incremental builds.
//!
//! Rendering a deck means spinning up the external renderer, which takes
//! seconds per deck. This module persists a `source path → content hash`
//! mapping across runs so the planner can skip decks whose content hasn't
//! changed since the last successful build.
//!
//! # Design
//!
//! - **Content-based, not mtime-based**: hashes are SHA-256 over the raw file
//!   bytes, so fingerprints survive `git checkout` (which resets modification
//!   times).
//! - **Fails soft on load**: a missing or corrupt store file is treated as
//!   "no prior history" and every deck rebuilds. The store is bookkeeping,
//!   never a source of build errors.
//! - **Rewritten whole each run**: the pipeline starts a fresh store, records
//!   skipped decks up front and built decks as each render succeeds, and saves
//!   once at the end. A failed run saves nothing, leaving the previous state
//!   intact so the next run retries exactly what's missing.
//!
//! The on-disk format is a flat JSON object (`{"rel/path.md": "hex…"}`) in
//! `<cache_dir>/build-hashes.json`, keyed by path relative to the content
//! root.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the store file within the cache directory.
const STORE_FILENAME: &str = "build-hashes.json";

/// Persisted mapping from source path (relative to the content root) to the
/// content hash of its last successful build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintStore {
    entries: BTreeMap<String, String>,
}

impl FingerprintStore {
    /// Create an empty store (first build, or `--force` semantics).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from the cache directory. Returns an empty store if the file
    /// doesn't exist or can't be parsed.
    pub fn load(cache_dir: &Path) -> Self {
        let path = cache_dir.join(STORE_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        serde_json::from_str(&content).unwrap_or_else(|_| Self::empty())
    }

    /// Save to the cache directory, creating it if absent.
    pub fn save(&self, cache_dir: &Path) -> io::Result<()> {
        std::fs::create_dir_all(cache_dir)?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(cache_dir.join(STORE_FILENAME), json)
    }

    /// Hash recorded for a source path, if it was ever successfully built.
    pub fn get(&self, rel_path: &str) -> Option<&str> {
        self.entries.get(rel_path).map(String::as_str)
    }

    /// Record the hash of a successfully built or skipped source.
    pub fn insert(&mut self, rel_path: String, hash: String) {
        self.entries.insert(rel_path, hash);
    }

    pub fn contains(&self, rel_path: &str) -> bool {
        self.entries.contains_key(rel_path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(rel_path, hash)` entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// SHA-256 hash of a byte slice, returned as a hex string.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// SHA-256 hash of a file's contents, returned as a hex string.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hash_bytes(&bytes))
}

/// Resolve the store file path for a cache directory.
pub fn store_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(STORE_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // =========================================================================
    // Save / Load roundtrip
    // =========================================================================

    #[test]
    fn empty_store_has_no_entries() {
        let s = FingerprintStore::empty();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut s = FingerprintStore::empty();
        s.insert("rust/intro.md".into(), "abc123".into());
        s.insert("web/css.md".into(), "def456".into());

        s.save(tmp.path()).unwrap();
        let loaded = FingerprintStore::load(tmp.path());

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("rust/intro.md"), Some("abc123"));
        assert_eq!(loaded.get("web/css.md"), Some("def456"));
    }

    #[test]
    fn save_creates_cache_dir() {
        let tmp = TempDir::new().unwrap();
        let cache = tmp.path().join(".deck-cache");
        FingerprintStore::empty().save(&cache).unwrap();
        assert!(store_path(&cache).exists());
    }

    #[test]
    fn on_disk_format_is_a_flat_object() {
        let tmp = TempDir::new().unwrap();
        let mut s = FingerprintStore::empty();
        s.insert("intro.md".into(), "cafe".into());
        s.save(tmp.path()).unwrap();

        let raw = fs::read_to_string(store_path(tmp.path())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["intro.md"], "cafe");
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(FingerprintStore::load(tmp.path()).is_empty());
    }

    #[test]
    fn load_corrupt_json_returns_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(store_path(tmp.path()), "not json").unwrap();
        assert!(FingerprintStore::load(tmp.path()).is_empty());
    }

    // =========================================================================
    // Hashing
    // =========================================================================

    #[test]
    fn hash_file_deterministic() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deck.md");
        fs::write(&path, b"# slides").unwrap();

        let h1 = hash_file(&path).unwrap();
        let h2 = hash_file(&path).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64); // SHA-256 hex is 64 chars
    }

    #[test]
    fn hash_file_changes_with_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deck.md");

        fs::write(&path, b"version 1").unwrap();
        let h1 = hash_file(&path).unwrap();
        fs::write(&path, b"version 2").unwrap();
        let h2 = hash_file(&path).unwrap();

        assert_ne!(h1, h2);
    }

    #[test]
    fn hash_bytes_matches_hash_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deck.md");
        fs::write(&path, b"same bytes").unwrap();

        assert_eq!(hash_bytes(b"same bytes"), hash_file(&path).unwrap());
    }
}
