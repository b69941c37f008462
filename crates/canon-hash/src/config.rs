// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hash settings plus the storage port they are loaded through.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Blake3Function, Blake3Mode, HashError, DEFAULT_OUTPUT_LEN};

/// Store key under which [`HashConfig`] is persisted.
pub const HASH_CONFIG_KEY: &str = "hash";

/// Where serialized settings documents live, one blob per key.
pub trait ConfigStore {
    /// Blob stored under `key`, or [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replace whatever is stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure to read, write or apply hash settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("no settings stored")]
    NotFound,
    /// The store could not be read or written.
    #[error("settings store i/o: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not a valid settings document.
    #[error("malformed settings: {0}")]
    Serde(#[from] serde_json::Error),
    /// Settings parsed but describe an invalid hash function.
    #[error("invalid hash settings: {0}")]
    Hash(#[from] HashError),
    /// Store-specific failure, e.g. no config directory.
    #[error("{0}")]
    Other(String),
}

/// Reads and writes [`HashConfig`] as pretty JSON under [`HASH_CONFIG_KEY`].
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Settings service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored settings; `None` when the key is absent or its blob is empty.
    pub fn stored_hash_config(&self) -> Result<Option<HashConfig>, ConfigError> {
        match self.store.load_raw(HASH_CONFIG_KEY) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Settings in effect: the stored ones, else [`HashConfig::default`].
    pub fn load_hash_config(&self) -> Result<HashConfig, ConfigError> {
        Ok(self.stored_hash_config()?.unwrap_or_default())
    }

    /// Overwrite the stored settings.
    pub fn save_hash_config(&self, config: &HashConfig) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(config)?;
        self.store.save_raw(HASH_CONFIG_KEY, &data)
    }

    /// The hash function the settings in effect describe.
    pub fn load_hash_function(&self) -> Result<Blake3Function, ConfigError> {
        Ok(self.load_hash_config()?.build()?)
    }
}

/// Serialized form of [`Blake3Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeConfig {
    /// Unkeyed BLAKE3.
    #[default]
    Plain,
    /// Keyed BLAKE3; the key is 64 hex digits.
    Keyed {
        /// Hex-encoded 32-byte key.
        key_hex: String,
    },
    /// Key derivation under a context string.
    DeriveKey {
        /// Application-specific context string.
        context: String,
    },
}

/// Persisted settings for the hash function used by tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// How hashers are initialized.
    pub mode: ModeConfig,
    /// Digest width in bytes.
    pub output_len: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            mode: ModeConfig::Plain,
            output_len: DEFAULT_OUTPUT_LEN,
        }
    }
}

impl HashConfig {
    /// Build the hash function these settings describe.
    pub fn build(&self) -> Result<Blake3Function, HashError> {
        let mode = match &self.mode {
            ModeConfig::Plain => Blake3Mode::Plain,
            ModeConfig::Keyed { key_hex } => {
                let raw = hex::decode(key_hex)?;
                let key = <[u8; blake3::KEY_LEN]>::try_from(raw.as_slice())
                    .map_err(|_| HashError::InvalidKeyLength(raw.len()))?;
                Blake3Mode::Keyed(key)
            }
            ModeConfig::DeriveKey { context } => Blake3Mode::DeriveKey(context.clone()),
        };
        Blake3Function::with_mode(mode, self.output_len)
    }
}

/// In-memory `ConfigStore`, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut blobs = self.blobs.borrow_mut();
        blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::HashFunction;

    #[test]
    fn missing_config_yields_defaults() {
        let service = ConfigService::new(MemoryConfigStore::new());
        let cfg = service.load_hash_config().unwrap();
        assert_eq!(cfg, HashConfig::default());
        assert_eq!(cfg.build().unwrap(), Blake3Function::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let service = ConfigService::new(MemoryConfigStore::new());
        let cfg = HashConfig {
            mode: ModeConfig::DeriveKey {
                context: "canon tests".into(),
            },
            output_len: 16,
        };
        service.save_hash_config(&cfg).unwrap();
        assert_eq!(service.stored_hash_config().unwrap(), Some(cfg.clone()));
        assert_eq!(service.load_hash_config().unwrap(), cfg);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let store = MemoryConfigStore::new();
        store
            .save_raw(HASH_CONFIG_KEY, br#"{"output_len": 8}"#)
            .unwrap();
        let cfg = ConfigService::new(store).load_hash_config().unwrap();
        assert_eq!(cfg.mode, ModeConfig::Plain);
        assert_eq!(cfg.build().unwrap().bits(), 64);
    }

    #[test]
    fn keyed_config_builds_keyed_function() {
        let cfg = HashConfig {
            mode: ModeConfig::Keyed {
                key_hex: "11".repeat(32),
            },
            output_len: 32,
        };
        let f = cfg.build().unwrap();
        assert_eq!(f, Blake3Function::keyed([0x11; 32]));
    }

    #[test]
    fn bad_settings_are_reported() {
        let short_key = HashConfig {
            mode: ModeConfig::Keyed {
                key_hex: "abcd".into(),
            },
            output_len: 32,
        };
        assert_eq!(
            short_key.build().unwrap_err(),
            HashError::InvalidKeyLength(2)
        );

        let store = MemoryConfigStore::new();
        store.save_raw(HASH_CONFIG_KEY, b"{not json").unwrap();
        let err = ConfigService::new(store).load_hash_config().unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn stored_settings_build_the_hash_function() {
        let service = ConfigService::new(MemoryConfigStore::new());
        let plain = service.load_hash_function().unwrap();
        assert_eq!(plain, Blake3Function::new());

        let derived = HashConfig {
            mode: ModeConfig::DeriveKey {
                context: "canon tests".into(),
            },
            output_len: 16,
        };
        service.save_hash_config(&derived).unwrap();
        assert_eq!(service.load_hash_function().unwrap().bits(), 128);
    }

    #[test]
    fn unbuildable_settings_surface_the_hash_error() {
        let service = ConfigService::new(MemoryConfigStore::new());
        let short_key = HashConfig {
            mode: ModeConfig::Keyed {
                key_hex: "abcd".into(),
            },
            output_len: 32,
        };
        service.save_hash_config(&short_key).unwrap();
        let err = service.load_hash_function().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Hash(HashError::InvalidKeyLength(2))
        ));
        assert_eq!(
            err.to_string(),
            "invalid hash settings: key must be 32 bytes, got 2"
        );

        let too_wide = HashConfig {
            output_len: 65,
            ..HashConfig::default()
        };
        service.save_hash_config(&too_wide).unwrap();
        assert!(matches!(
            service.load_hash_function(),
            Err(ConfigError::Hash(HashError::InvalidOutputLength(65)))
        ));
    }

    #[test]
    fn mode_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ModeConfig::DeriveKey {
            context: "c".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"derive_key","context":"c"}"#);
    }
}
