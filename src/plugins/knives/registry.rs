//! Live thrown knives, keyed by [`KnifeId`].
//!
//! An entry exists exactly as long as its knife entity: it is added on throw and
//! removed when the knife hits someone, expires, or the round restarts. Anything
//! despawned behind our back is swept by `forget_despawned_knives`.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::components::KnifeId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnifeEntry {
    pub entity: Entity,
    /// Weapon held at throw time. Only a lookup key; it may be gone by impact.
    pub source_weapon: Option<Entity>,
    /// Last sampled position, the start of the next trail segment.
    pub last_position: Vec3,
}

#[derive(Resource, Debug, Default)]
pub struct KnifeRegistry {
    next_id: u64,
    entries: HashMap<KnifeId, KnifeEntry>,
}

impl KnifeRegistry {
    /// Ids keep increasing across rounds so an old id never names a new knife.
    pub fn allocate_id(&mut self) -> KnifeId {
        let id = KnifeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn register(&mut self, id: KnifeId, entry: KnifeEntry) {
        self.entries.insert(id, entry);
    }

    #[inline]
    pub fn get(&self, id: KnifeId) -> Option<&KnifeEntry> {
        self.entries.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: KnifeId) -> Option<&mut KnifeEntry> {
        self.entries.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: KnifeId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Removing an absent id is a no-op returning `None`.
    pub fn unregister(&mut self, id: KnifeId) -> Option<KnifeEntry> {
        self.entries.remove(&id)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(KnifeId, &KnifeEntry) -> bool) {
        self.entries.retain(|id, entry| keep(*id, entry));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
