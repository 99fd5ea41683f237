//! Persisted per-player volume preferences.
//!
//! One JSON document, read whole at startup and rewritten whole on every
//! change. Storage faults degrade to defaults and are logged, never raised:
//! losing a saved volume must not block a session.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Volume used for any player without a saved preference.
pub const DEFAULT_VOLUME: f32 = 1.0;

#[derive(Debug, Serialize, Deserialize)]
struct VolumeRecord {
    name: String,
    volume: f32,
}

/// Keyed by display name (case-sensitive), matching the on-disk format.
pub struct VolumePreferenceStore {
    path: PathBuf,
    volumes: HashMap<String, f32>,
    max_volume: f32,
}

impl VolumePreferenceStore {
    /// Open the store at `path`, loading whatever is there. A missing or
    /// corrupt document yields an empty store.
    pub fn open(path: impl Into<PathBuf>, max_volume: f32) -> Self {
        let path = path.into();
        let volumes = match load_document(&path) {
            Ok(volumes) => volumes,
            Err(err) => {
                warn!(path = %path.display(), "failed to load voice volumes: {err:#}");
                HashMap::new()
            }
        };
        Self {
            path,
            volumes,
            max_volume,
        }
    }

    /// Default per-install document location, `VOICEHUD_VOLUMES` overrides.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("VOICEHUD_VOLUMES") {
            return PathBuf::from(path);
        }
        directories::ProjectDirs::from("", "", "voicehud")
            .map(|dirs| dirs.config_dir().join("voice_volumes.json"))
            .unwrap_or_else(|| std::env::temp_dir().join("voicehud_volumes.json"))
    }

    /// Saved volume for `name`, or [`DEFAULT_VOLUME`].
    pub fn get(&self, name: &str) -> f32 {
        self.lookup(name).unwrap_or(DEFAULT_VOLUME)
    }

    /// Saved volume for `name`, if one exists.
    pub fn lookup(&self, name: &str) -> Option<f32> {
        self.volumes.get(name).copied()
    }

    /// Record a volume and immediately rewrite the document.
    pub fn set(&mut self, name: &str, volume: f32) {
        let volume = volume.clamp(0.0, self.max_volume);
        self.volumes.insert(name.to_string(), volume);
        debug!(name, volume, "voice volume saved");
        self.persist();
    }

    /// Rewrite the document from the in-memory map. Failure is logged only.
    pub fn persist(&self) {
        if let Err(err) = self.save_document() {
            warn!(path = %self.path.display(), "failed to save voice volumes: {err:#}");
        }
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    fn save_document(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut records: Vec<VolumeRecord> = self
            .volumes
            .iter()
            .map(|(name, volume)| VolumeRecord {
                name: name.clone(),
                volume: *volume,
            })
            .collect();
        // Stable record order keeps rewrites diff-friendly.
        records.sort_by(|a, b| a.name.cmp(&b.name));
        let json = serde_json::to_string_pretty(&records).context("encoding voice volumes")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

fn load_document(path: &Path) -> Result<HashMap<String, f32>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<VolumeRecord> =
        serde_json::from_str(&raw).context("parsing voice volumes")?;
    Ok(records
        .into_iter()
        .filter(|record| !record.name.is_empty())
        .map(|record| (record.name, record.volume))
        .collect())
}
