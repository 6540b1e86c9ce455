//! Operator configuration, read from a TOML file and hot-reloadable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Version written by the current release. Older files still load.
pub const CONFIG_VERSION: u32 = 2;

pub const DEFAULT_CONFIG_PATH: &str = "config/throwing_knives.toml";

#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct KnivesConfig {
    /// Knives per life. Any negative value means unlimited.
    pub amount: i32,
    pub velocity: f32,
    /// Fixed damage dealt by a knife hit, independent of speed.
    pub damage: f32,
    pub elasticity: f32,
    /// Seconds before a thrown knife removes itself.
    pub lifetime: f32,
    /// Seconds a trail segment stays visible. Zero disables trails.
    pub trail_time: f32,
    pub cooldown: f32,
    /// Admin flags or groups allowed to throw. Empty allows everyone.
    pub flags: Vec<String>,
    /// HUD channel for the cooldown text. Negative disables it.
    pub hud_channel: i32,
    pub version: u32,
}

impl Default for KnivesConfig {
    fn default() -> Self {
        Self {
            amount: -1,
            velocity: 2250.0,
            damage: 45.0,
            elasticity: 0.2,
            lifetime: 5.0,
            trail_time: 3.0,
            cooldown: 3.0,
            flags: Vec::new(),
            hud_channel: 1,
            version: CONFIG_VERSION,
        }
    }
}

impl KnivesConfig {
    /// `None` when ammo is unlimited.
    #[inline]
    pub fn ammo_per_life(&self) -> Option<u32> {
        u32::try_from(self.amount).ok()
    }

    #[inline]
    pub fn cooldown(&self) -> Duration {
        seconds(self.cooldown)
    }

    #[inline]
    pub fn lifetime(&self) -> Duration {
        seconds(self.lifetime)
    }

    #[inline]
    pub fn trail_time(&self) -> Duration {
        seconds(self.trail_time)
    }

    #[inline]
    pub fn trails_enabled(&self) -> bool {
        self.trail_time > 0.0
    }

    #[inline]
    pub fn hud_channel(&self) -> Option<u8> {
        u8::try_from(self.hud_channel).ok()
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    /// Logs a warning when the file was written for another version.
    pub fn check_version(&self) {
        if self.version != CONFIG_VERSION {
            warn!(
                "Configuration version mismatch (expected: {} | current: {})",
                CONFIG_VERSION, self.version
            );
        }
    }
}

/// Negative and NaN become zero, anything too large for a `Duration` saturates.
fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::MAX)
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the configuration file lives.
#[derive(Resource, Debug, Clone)]
pub struct ConfigSource(pub PathBuf);

impl Default for ConfigSource {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}
