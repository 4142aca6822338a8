//! High score persistence
//!
//! The store holds one non-negative integer, JSON-encoded in a small file.
//! Nothing here ever fails outward: a missing, unreadable or corrupt file
//! reads as 0, and a failed write leaves the previous value in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Durable storage for the single best score
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing usable is stored
    fn load(&self) -> u64;

    /// Record `candidate` if it beats the stored value.
    ///
    /// Returns the high score after the call: `max(stored, candidate)` on
    /// success, or the previous stored value if the write failed.
    fn save(&mut self, candidate: u64) -> u64;
}

#[derive(Debug, Error)]
enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not a high score: {0}")]
    NotAScore(String),
}

/// Interpret a decoded JSON value as a score
fn score_from_json(value: &Value) -> Result<u64, StoreError> {
    match value {
        Value::Number(n) => {
            if let Some(score) = n.as_u64() {
                return Ok(score);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 0.0 && f < u64::MAX as f64 => Ok(f.trunc() as u64),
                _ => Err(StoreError::NotAScore(n.to_string())),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| StoreError::NotAScore(format!("{s:?}"))),
        other => Err(StoreError::NotAScore(other.to_string())),
    }
}

/// High score kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<u64, StoreError> {
        let text = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&text)?;
        score_from_json(&value)
    }

    /// Write through a sibling temp file so a crash mid-write never leaves a
    /// truncated score behind.
    fn write(&self, score: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string(&score)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u64 {
        match self.read() {
            Ok(score) => score,
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                log::warn!("Ignoring high score in {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, candidate: u64) -> u64 {
        let current = self.load();
        if candidate <= current {
            return current;
        }

        match self.write(candidate) {
            Ok(()) => {
                log::info!("New high score {} saved to {}", candidate, self.path.display());
                candidate
            }
            Err(e) => {
                log::warn!("Could not save high score to {}: {}", self.path.display(), e);
                current
            }
        }
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) value: Option<u64>,
    /// Simulate an unwritable store
    pub fail_writes: bool,
    /// Number of save calls observed
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        Self {
            value: Some(score),
            ..Self::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, candidate: u64) -> u64 {
        self.saves += 1;
        let current = self.load();
        if candidate > current && !self.fail_writes {
            self.value = Some(candidate);
            candidate
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT: AtomicU32 = AtomicU32::new(0);

    fn scratch_path(tag: &str) -> PathBuf {
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "trade_of_life_hs_{}_{}_{}",
            std::process::id(),
            tag,
            n
        ));
        fs::create_dir_all(&dir).unwrap();
        dir.join("high_score.json")
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let mut store = FileStore::new(&path);
        assert_eq!(store.save(42), 42);
        assert_eq!(store.load(), 42);
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");
    }

    #[test]
    fn test_lower_score_never_overwrites() {
        let mut store = FileStore::new(scratch_path("monotone"));
        store.save(42);
        assert_eq!(store.save(10), 42);
        assert_eq!(store.load(), 42);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut store = FileStore::new(scratch_path("idempotent"));
        store.save(7);
        let first = store.save(30);
        let second = store.save(30);
        assert_eq!(first, 30);
        assert_eq!(second, 30);
    }

    #[test]
    fn test_corrupt_content_loads_zero() {
        let path = scratch_path("corrupt");
        for junk in ["not json", "{\"score\": 5}", "[1,2]", "-3", "null", ""] {
            fs::write(&path, junk).unwrap();
            assert_eq!(FileStore::new(&path).load(), 0, "content {junk:?}");
        }
    }

    #[test]
    fn test_lenient_numeric_content() {
        let path = scratch_path("lenient");
        fs::write(&path, "12.9").unwrap();
        assert_eq!(FileStore::new(&path).load(), 12);
        fs::write(&path, "\"33\"").unwrap();
        assert_eq!(FileStore::new(&path).load(), 33);
    }

    #[test]
    fn test_save_over_corrupt_file_replaces_it() {
        let path = scratch_path("replace");
        fs::write(&path, "garbage").unwrap();
        let mut store = FileStore::new(&path);
        assert_eq!(store.save(5), 5);
        assert_eq!(store.load(), 5);
    }

    #[test]
    fn test_unwritable_location_returns_previous() {
        let path = scratch_path("unwritable").join("missing_dir").join("hs.json");
        let mut store = FileStore::new(path);
        assert_eq!(store.save(99), 0);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_memory_store_failed_write() {
        let mut store = MemoryStore::with_score(20);
        store.fail_writes = true;
        assert_eq!(store.save(50), 20);
        assert_eq!(store.load(), 20);
        assert_eq!(store.saves, 1);
    }
}
