use crate::store::{StoreError, store_path};
use log::{info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Persisted mapping of launch command to click count.
///
/// Entries keep the order in which they were first recorded; the JSON
/// file's key order is that insertion order, which `top_n` uses to
/// break count ties. Every increment rewrites the whole file.
pub struct UsageCache {
    path: Option<PathBuf>,
    counts: Vec<(String, u32)>,
}

/// Whether a command appears in a `top_n` ranking.
pub fn is_favorite(top: &[(String, u32)], exec: &str) -> bool {
    top.iter().any(|(e, _)| e == exec)
}

impl UsageCache {
    /// Load from the default cache location.
    pub fn load_default() -> Self {
        match store_path("usage.json") {
            Some(path) => Self::load(path),
            None => Self {
                path: None,
                counts: Vec::new(),
            },
        }
    }

    /// Load the store from `path`. A missing or unparsable file yields
    /// an empty store, and an empty store file is written in its place
    /// so the next load succeeds.
    pub fn load(path: PathBuf) -> Self {
        let counts = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(map) => Some(
                    map.into_iter()
                        .map(|(exec, count)| {
                            // Saturate oversized counts; anything that is
                            // not a non-negative integer reads as 0.
                            let count = count
                                .as_u64()
                                .map_or(0, |c| c.min(u64::from(u32::MAX)) as u32);
                            (exec, count)
                        })
                        .collect(),
                ),
                Err(err) => {
                    warn!("Usage cache {:?} is unparsable ({}), starting empty", path, err);
                    None
                }
            },
            Err(_) => {
                info!("Usage cache {:?} not found, creating", path);
                None
            }
        };

        let store = Self {
            path: Some(path),
            counts: counts.unwrap_or_default(),
        };
        if store.is_empty() {
            if let Err(err) = store.save() {
                warn!("Could not create usage cache: {}", err);
            }
        }
        store
    }

    /// Record one launch of `exec` and persist the whole store. A write
    /// failure is a warning; the in-memory count is kept either way.
    pub fn record_launch(&mut self, exec: &str) {
        match self.counts.iter_mut().find(|(e, _)| e == exec) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((exec.to_string(), 1)),
        }
        if let Err(err) = self.save() {
            warn!("Could not persist usage cache: {}", err);
        }
    }

    /// The `n` most-clicked commands, highest first. Ties keep the
    /// order in which the commands were first recorded.
    pub fn top_n(&self, n: usize) -> Vec<(String, u32)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn count(&self, exec: &str) -> u32 {
        self.counts
            .iter()
            .find(|(e, _)| e == exec)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut map = Map::new();
        for (exec, count) in &self.counts {
            map.insert(exec.clone(), Value::from(*count));
        }
        fs::write(path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}
