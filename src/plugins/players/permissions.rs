//! Admin flags and groups attached to a controller by the host admin system.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

#[derive(Component, Debug, Clone, Default)]
pub struct PlayerPermissions {
    pub flags: HashSet<String>,
    pub groups: HashSet<String>,
}

impl PlayerPermissions {
    pub fn with_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flags: flags.into_iter().map(Into::into).collect(),
            groups: HashSet::default(),
        }
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    fn holds(&self, entry: &str) -> bool {
        self.flags.contains(entry) || self.groups.contains(entry)
    }
}

/// Empty `required` allows everyone; otherwise any single match is enough.
/// A blank entry in `required` also allows everyone.
pub fn has_permission(perms: Option<&PlayerPermissions>, required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }

    required.iter().any(|entry| {
        entry.trim().is_empty() || perms.is_some_and(|p| p.holds(entry))
    })
}
