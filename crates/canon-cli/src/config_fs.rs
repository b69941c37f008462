// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` (platform config dir, or an explicit one).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use canon_hash::config::{ConfigError, ConfigService, ConfigStore, HashConfig};
use directories::ProjectDirs;
use tracing::{debug, info, warn};

/// Store configs as `<key>.json` files under one directory.
#[derive(Debug)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the user config directory (e.g. `~/.config/canon`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "canon")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::at(proj.config_dir())
    }

    /// Store rooted at `base`, created if missing.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

/// Hash settings, best-effort.
///
/// An unreadable store or a malformed file falls back to defaults with a
/// warning. When nothing is stored yet the defaults are written back so the
/// file can be edited later.
pub fn load_hash_config(config_dir: Option<&Path>) -> HashConfig {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    let service = match store {
        Ok(store) => ConfigService::new(store),
        Err(err) => {
            warn!(error = %err, "config store unavailable; using default hash settings");
            return HashConfig::default();
        }
    };
    match service.stored_hash_config() {
        Ok(Some(cfg)) => {
            debug!(?cfg, "loaded hash settings");
            cfg
        }
        Ok(None) => {
            let cfg = HashConfig::default();
            match service.save_hash_config(&cfg) {
                Ok(()) => info!("wrote default hash settings"),
                Err(err) => warn!(error = %err, "could not persist default hash settings"),
            }
            cfg
        }
        Err(err) => {
            warn!(error = %err, "unreadable hash settings; using defaults");
            HashConfig::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use canon_hash::config::ModeConfig;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path()).unwrap();
        assert!(matches!(store.load_raw("hash"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn absent_settings_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_hash_config(Some(dir.path()));
        assert_eq!(cfg, HashConfig::default());
        let written = fs::read(dir.path().join("hash.json")).unwrap();
        let parsed: HashConfig = serde_json::from_slice(&written).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn stored_settings_win() {
        let dir = tempfile::tempdir().unwrap();
        let stored = HashConfig {
            mode: ModeConfig::DeriveKey {
                context: "canon tests".into(),
            },
            output_len: 16,
        };
        ConfigService::new(FsConfigStore::at(dir.path()).unwrap())
            .save_hash_config(&stored)
            .unwrap();
        assert_eq!(load_hash_config(Some(dir.path())), stored);
    }

    #[test]
    fn malformed_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash.json");
        fs::write(&path, b"{not json").unwrap();
        assert_eq!(load_hash_config(Some(dir.path())), HashConfig::default());
        assert_eq!(fs::read(&path).unwrap(), b"{not json");
    }
}
