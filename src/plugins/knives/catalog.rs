//! Knife item definitions and the models thrown for them.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

const KNIFE_MODELS: &[(u16, &str)] = &[
    (42, "weapons/models/knife/knife_default_ct/weapon_knife_default_ct.vmdl"),
    (59, "weapons/models/knife/knife_default_t/weapon_knife_default_t.vmdl"),
    (500, "weapons/models/knife/knife_bayonet/weapon_knife_bayonet.vmdl"),
    (503, "weapons/models/knife/knife_css/weapon_knife_css.vmdl"),
    (505, "weapons/models/knife/knife_flip/weapon_knife_flip.vmdl"),
    (506, "weapons/models/knife/knife_gut/weapon_knife_gut.vmdl"),
    (507, "weapons/models/knife/knife_karambit/weapon_knife_karambit.vmdl"),
    (508, "weapons/models/knife/knife_m9/weapon_knife_m9.vmdl"),
    (509, "weapons/models/knife/knife_tactical/weapon_knife_tactical.vmdl"),
    (512, "weapons/models/knife/knife_falchion/weapon_knife_falchion.vmdl"),
    (514, "weapons/models/knife/knife_bowie/weapon_knife_bowie.vmdl"),
    (515, "weapons/models/knife/knife_butterfly/weapon_knife_butterfly.vmdl"),
    (516, "weapons/models/knife/knife_push/weapon_knife_push.vmdl"),
    (517, "weapons/models/knife/knife_cord/weapon_knife_cord.vmdl"),
    (518, "weapons/models/knife/knife_canis/weapon_knife_canis.vmdl"),
    (519, "weapons/models/knife/knife_ursus/weapon_knife_ursus.vmdl"),
    (520, "weapons/models/knife/knife_navaja/weapon_knife_navaja.vmdl"),
    (521, "weapons/models/knife/knife_outdoor/weapon_knife_outdoor.vmdl"),
    (522, "weapons/models/knife/knife_stiletto/weapon_knife_stiletto.vmdl"),
    (523, "weapons/models/knife/knife_talon/weapon_knife_talon.vmdl"),
    (525, "weapons/models/knife/knife_skeleton/weapon_knife_skeleton.vmdl"),
    (526, "weapons/models/knife/knife_kukri/weapon_knife_kukri.vmdl"),
];

/// Read-only after startup.
#[derive(Resource, Debug, Clone)]
pub struct KnifeModelCatalog {
    models: HashMap<u16, &'static str>,
}

impl Default for KnifeModelCatalog {
    fn default() -> Self {
        Self {
            models: KNIFE_MODELS.iter().copied().collect(),
        }
    }
}

impl KnifeModelCatalog {
    #[inline]
    pub fn model_for(&self, item_definition: u16) -> Option<&'static str> {
        self.models.get(&item_definition).copied()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
