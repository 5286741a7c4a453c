//! Test application wrapping a query engine over a scratch cache directory.

use colorq::models::{Messages, ResultRecord};
use colorq::services::{run_query, CacheStore, InfoRecords, QueryEngine, QueryMode};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::ICON_PATH;

pub struct TestApp {
    /// Keeps the cache directory alive for the lifetime of the test
    _dir: TempDir,
    pub cache_dir: PathBuf,
    pub engine: QueryEngine,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_swatch_size(32)
    }

    pub fn with_swatch_size(size: u32) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let cache_dir = dir.path().join("cache");
        let cache = CacheStore::open(&cache_dir, size).expect("open cache");
        let engine = QueryEngine::new(cache, InfoRecords::new(Messages::default(), ICON_PATH));

        Self {
            _dir: dir,
            cache_dir,
            engine,
        }
    }

    /// Query in direct mode through the host-facing facade
    pub fn query(&self, input: &str) -> Vec<ResultRecord> {
        self.engine.query(input, QueryMode::Direct)
    }

    /// Query in ambient (global keyword) mode
    pub fn query_ambient(&self, input: &str) -> Vec<ResultRecord> {
        self.engine.query(input, QueryMode::Ambient)
    }

    /// Query through the core function, surfacing cache errors
    pub fn try_query(&self, input: &str) -> Result<Vec<ResultRecord>, colorq::error::QueryError> {
        run_query(
            input,
            QueryMode::Direct,
            self.engine.cache(),
            self.engine.info(),
        )
    }

    pub fn cache(&self) -> &CacheStore {
        self.engine.cache()
    }

    /// File names currently in the cache directory, sorted
    pub fn cached_files(&self) -> Vec<String> {
        list_files(&self.cache_dir)
    }
}

pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read cache dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
