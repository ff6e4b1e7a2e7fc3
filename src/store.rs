//! Demo-mode local persistence
//!
//! A JSON file standing in for the browser's key-value storage: string
//! values under fixed keys, written synchronously, single process, no
//! cross-instance guarantees. Only demo mode touches it; signed-in
//! sessions persist through the backend.

use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::model::Subscription;

/// Key holding the serialized subscription array
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";

/// Key holding the demo-data flag
pub const SAMPLE_FLAG_KEY: &str = "sampleDataActive";

/// File-backed key-value store
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Open a store at `path`. The file is created on first write; a
    /// missing file reads as empty state.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, Error> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let map = serde_json::from_str(&text)?;
        Ok(map)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, text)?;
        debug!("wrote local store at {}", self.path.display());
        Ok(())
    }

    /// Load the persisted subscription list. `None` means the key was
    /// never written, as opposed to an explicitly saved empty list.
    pub fn load_subscriptions(&self) -> Result<Option<Vec<Subscription>>, Error> {
        let map = self.read_map()?;
        match map.get(SUBSCRIPTIONS_KEY) {
            Some(raw) => {
                let subscriptions = serde_json::from_str(raw)?;
                Ok(Some(subscriptions))
            }
            None => Ok(None),
        }
    }

    /// Persist the subscription list.
    pub fn save_subscriptions(&self, subscriptions: &[Subscription]) -> Result<(), Error> {
        let mut map = self.read_map()?;
        map.insert(
            SUBSCRIPTIONS_KEY.to_string(),
            serde_json::to_string(subscriptions)?,
        );
        self.write_map(&map)
    }

    /// Whether demo data is active. An absent key reads as false.
    pub fn sample_data_active(&self) -> Result<bool, Error> {
        let map = self.read_map()?;
        Ok(map
            .get(SAMPLE_FLAG_KEY)
            .map(|raw| raw == "true")
            .unwrap_or(false))
    }

    /// Set or clear the demo-data flag. Clearing removes the key.
    pub fn set_sample_data_active(&self, active: bool) -> Result<(), Error> {
        let mut map = self.read_map()?;
        if active {
            map.insert(SAMPLE_FLAG_KEY.to_string(), "true".to_string());
        } else {
            map.remove(SAMPLE_FLAG_KEY);
        }
        self.write_map(&map)
    }

    /// Raw value under a key, for callers layering their own state on
    /// the same file.
    pub fn get_raw(&self, key: &str) -> Result<Option<Value>, Error> {
        let map = self.read_map()?;
        match map.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }
}
