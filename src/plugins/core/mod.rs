//! Core plugin: shared resources and the operator configuration file.
//!
//! ```text
//! PreStartup: ConfigSource file present -> KnivesConfig
//! PreUpdate:  ReloadConfig              -> re-read, keep the old config on error
//! ```

use bevy::prelude::*;

use crate::common::config::{ConfigSource, KnivesConfig};
use crate::common::tunables::Tunables;

/// Operator request to re-read the configuration file.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ReloadConfig;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>()
        .init_resource::<KnivesConfig>()
        .init_resource::<ConfigSource>()
        .add_message::<ReloadConfig>()
        .add_systems(PreStartup, load_config)
        // Ahead of the player systems so permissions see the new flags this frame.
        .add_systems(PreUpdate, reload_config.before(crate::plugins::players::refresh_permissions));
}

pub fn load_config(source: Res<ConfigSource>, mut config: ResMut<KnivesConfig>) {
    if !source.0.exists() {
        info!("No configuration at {:?}, using defaults", source.0);
        return;
    }

    match KnivesConfig::load(&source.0) {
        Ok(loaded) => {
            loaded.check_version();
            *config = loaded;
            info!("Loaded configuration from {:?}", source.0);
        }
        Err(err) => warn!("{err}. Using defaults."),
    }
}

pub fn reload_config(
    mut requests: MessageReader<ReloadConfig>,
    source: Res<ConfigSource>,
    mut config: ResMut<KnivesConfig>,
) {
    if requests.read().count() == 0 {
        return;
    }

    match KnivesConfig::load(&source.0) {
        Ok(loaded) => {
            loaded.check_version();
            config.set_if_neq(loaded);
            info!("Reloaded configuration from {:?}", source.0);
        }
        Err(err) => warn!("{err}. Keeping the previous configuration."),
    }
}
