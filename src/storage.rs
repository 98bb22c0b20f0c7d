// Key-value persistence of whole record collections as JSON files.
//
// Both collections are rewritten in full on every mutation; there is no
// delta format and no transaction log. A missing or unreadable file loads
// as an empty collection so a fresh install and a corrupt store behave the
// same at the API surface.
use crate::context::SharedContext;
use anyhow::Result;
use fs2::FileExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key for the recipe collection.
pub const RECIPES_KEY: &str = "recipes";
/// Storage key for the meal plan collection.
pub const MEAL_PLAN_KEY: &str = "mealPlan";

/// Whole-collection JSON storage addressed by string keys.
///
/// Keys map to `<data_dir>/<key>.json`; values are the JSON encoding of the
/// collection's array of records.
#[derive(Clone)]
pub struct Storage {
    ctx: SharedContext,
}

impl Storage {
    pub fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }

    fn path_for_key(&self, key: &str) -> Result<PathBuf> {
        Ok(self.ctx.get_data_dir()?.join(format!("{key}.json")))
    }

    /// Helper to get a sidecar lock file path.
    fn lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive advisory lock on `file_path`.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp file then rename into place.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Loads the collection stored under `key`. A missing file yields an
    /// empty collection; a corrupt one is logged and treated the same.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("could not load '{key}', starting empty: {e:#}");
                Vec::new()
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.path_for_key(key)?;
        if !path.exists() {
            return Ok(Vec::new());
        }
        Self::with_lock(&path, || {
            let json = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&json)?)
        })
    }

    /// Re-encodes and writes the whole collection stored under `key`.
    pub fn save_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let path = self.path_for_key(key)?;
        Self::with_lock(&path, || {
            let json = serde_json::to_string_pretty(records)?;
            Self::atomic_write(&path, json)
        })
    }
}
