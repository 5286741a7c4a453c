//! File-backed swatch cache, keyed by canonical hex color.
//!
//! The cache lives for one process: [`CacheStore::open`] empties the
//! directory before the first request, and entries are only ever created or
//! reused after that.

use crate::error::CacheError;
use crate::rendering::render_swatch_png;
use color_model::Color;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Swatch PNG cache rooted at a single directory.
///
/// All methods take `&self`; the store can be shared between threads. Two
/// concurrent misses for the same color both render identical bytes and the
/// later rename wins, so readers never observe a partially written file.
#[derive(Debug)]
pub struct CacheStore {
    dir: PathBuf,
    swatch_size: u32,
    renders: AtomicUsize,
}

impl CacheStore {
    /// Open the cache directory, creating it if needed and deleting any
    /// files left over from a previous run.
    pub fn open(dir: impl Into<PathBuf>, swatch_size: u32) -> Result<Self, CacheError> {
        let dir = dir.into();

        if dir.is_dir() {
            let purged = purge_files(&dir)?;
            tracing::info!(dir = %dir.display(), purged, "Purged swatch cache");
        } else {
            fs::create_dir_all(&dir)?;
            tracing::info!(dir = %dir.display(), "Created swatch cache directory");
        }

        Ok(Self {
            dir,
            swatch_size,
            renders: AtomicUsize::new(0),
        })
    }

    /// Cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn swatch_size(&self) -> u32 {
        self.swatch_size
    }

    /// Number of swatches this store has rendered and written.
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    /// Path a swatch for `color` is stored at, whether or not it exists yet.
    pub fn entry_path(&self, color: Color) -> PathBuf {
        self.dir.join(format!("{}.png", color.hex_digits()))
    }

    /// Return the swatch path for `color`, rendering it on a miss.
    pub fn swatch_path(&self, color: Color) -> Result<PathBuf, CacheError> {
        let path = self.entry_path(color);

        if path.is_file() {
            tracing::debug!(key = %color, "Swatch cache hit");
            return Ok(path);
        }

        tracing::debug!(key = %color, size = self.swatch_size, "Swatch cache miss, rendering");
        let png_bytes = render_swatch_png(color, self.swatch_size)?;

        // Write beside the target and rename so the entry appears atomically
        let mut tmp = tempfile::Builder::new()
            .prefix(".swatch-")
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        tmp.write_all(&png_bytes)?;
        tmp.persist(&path)?;

        self.renders.fetch_add(1, Ordering::Relaxed);
        Ok(path)
    }
}

/// Delete every regular file directly inside `dir`. Subdirectories are left alone.
fn purge_files(dir: &Path) -> Result<usize, CacheError> {
    let mut purged = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            purged += 1;
        }
    }
    Ok(purged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("cache");

        let store = CacheStore::open(&dir, 32).unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
        assert_eq!(store.renders(), 0);
    }

    #[test]
    fn test_open_purges_existing_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ff0000.png"), b"stale").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"stale").unwrap();
        fs::create_dir(tmp.path().join("keep")).unwrap();

        CacheStore::open(tmp.path(), 32).unwrap();

        let remaining: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(remaining, vec![std::ffi::OsString::from("keep")]);
    }

    #[test]
    fn test_entry_path_uses_lowercase_hex() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::open(tmp.path(), 32).unwrap();

        let path = store.entry_path(Color::from_rgb(0xAB, 0xCD, 0xEF));
        assert_eq!(path, tmp.path().join("abcdef.png"));
    }

    #[test]
    fn test_miss_then_hit_renders_once() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::open(tmp.path(), 32).unwrap();
        let color = Color::from_rgb(99, 197, 34);

        let first = store.swatch_path(color).unwrap();
        let written = fs::metadata(&first).unwrap().modified().unwrap();
        let second = store.swatch_path(color).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.renders(), 1);
        assert_eq!(fs::metadata(&second).unwrap().modified().unwrap(), written);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::open(tmp.path(), 16).unwrap();

        store.swatch_path(Color::from_rgb(1, 2, 3)).unwrap();
        store.swatch_path(Color::from_rgb(4, 5, 6)).unwrap();

        let mut names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["010203.png", "040506.png"]);
    }

    #[test]
    fn test_invalid_size_is_render_error() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::open(tmp.path(), 0).unwrap();

        let result = store.swatch_path(Color::from_rgb(0, 0, 0));
        assert!(matches!(result, Err(CacheError::Render(_))));
        assert_eq!(store.renders(), 0);
    }
}
