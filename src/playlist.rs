//! # Playlists
//!
//! A playlist is a named list of services. Playlists can `extends` another
//! playlist, in which case the parent's services come first and the
//! playlist's own services are appended after them.
//!
//! Two sources of playlists exist:
//!
//! - **Registry playlists**, stored in a [`Collection`] and addressed by short
//!   or full name. The registry loader normalizes their `extends` and
//!   `services` entries to full names before they are stored.
//! - **Custom playlists**, written by the user in the rc file. They have no
//!   registry, are looked up by their exact bare name, and take priority over
//!   registry playlists.
//!
//! ## Resolution
//!
//! [`PlaylistCollection::service_names`] walks the `extends` chain depth
//! first. Each playlist is marked as visited before its parent is resolved,
//! so an `extends` edge pointing back into the current chain is reported as
//! a `CircularDependency` instead of recursing forever. The flattened list is
//! then deduplicated keeping the first occurrence of every service.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::{Error, ResourceKind, Result};
use crate::resource::Resource;

/// A named, extendable list of services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub registry_name: String,
    /// Name of the parent playlist, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl Resource for Playlist {
    const KIND: ResourceKind = ResourceKind::Playlist;

    fn name(&self) -> &str {
        &self.name
    }

    fn registry_name(&self) -> &str {
        &self.registry_name
    }
}

/// Registry playlists plus the user's custom playlists.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCollection {
    playlists: Collection<Playlist>,
    custom: HashMap<String, Playlist>,
}

impl PlaylistCollection {
    pub fn new(playlists: Collection<Playlist>) -> Self {
        Self {
            playlists,
            custom: HashMap::new(),
        }
    }

    /// Store a registry playlist.
    pub fn set(&mut self, playlist: Playlist) -> Result<()> {
        self.playlists.set(playlist)
    }

    /// Store a custom playlist under its bare name, replacing any previous one.
    pub fn set_custom(&mut self, playlist: Playlist) {
        self.custom.insert(playlist.name.clone(), playlist);
    }

    /// Look up a playlist, checking custom playlists first.
    pub fn get(&self, name: &str) -> Result<&Playlist> {
        self.lookup(name).map(|(_, playlist)| playlist)
    }

    /// Number of registry playlists.
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty() && self.custom.is_empty()
    }

    /// Full names of all registry playlists, in unspecified order.
    pub fn names(&self) -> Vec<String> {
        self.playlists.names().collect()
    }

    /// Names of all custom playlists, in unspecified order.
    pub fn custom_names(&self) -> Vec<String> {
        self.custom.keys().cloned().collect()
    }

    /// The registry-backed collection.
    pub fn registry_playlists(&self) -> &Collection<Playlist> {
        &self.playlists
    }

    /// Resolve `name` into the deduplicated list of service names it contains,
    /// following `extends` links.
    pub fn service_names(&self, name: &str) -> Result<Vec<String>> {
        let mut visited = HashSet::new();
        let services = self
            .resolve(name, &mut visited)
            .map_err(|e| Error::Playlist {
                name: name.to_string(),
                extended_by: None,
                source: Box::new(e),
            })?;
        Ok(dedup_stable(services))
    }

    /// Returns the playlist together with the key used for cycle detection:
    /// the bare name for custom playlists, the full name otherwise.
    fn lookup(&self, name: &str) -> Result<(String, &Playlist)> {
        if let Some(playlist) = self.custom.get(name) {
            return Ok((name.to_string(), playlist));
        }
        let playlist = self.playlists.get(name)?;
        Ok((playlist.full_name(), playlist))
    }

    fn resolve(&self, name: &str, visited: &mut HashSet<String>) -> Result<Vec<String>> {
        let (key, playlist) = self.lookup(name)?;
        visited.insert(key.clone());

        let Some(extends) = playlist.extends.as_deref() else {
            return Ok(playlist.services.clone());
        };

        let wrap = |e: Error| Error::Playlist {
            name: extends.to_string(),
            extended_by: Some(key.clone()),
            source: Box::new(e),
        };

        let (parent_key, _) = self.lookup(extends).map_err(wrap)?;
        if visited.contains(&parent_key) {
            return Err(Error::CircularDependency {
                playlist: key,
                extends: parent_key,
            });
        }

        let mut services = self.resolve(extends, visited).map_err(wrap)?;
        services.extend(playlist.services.iter().cloned());
        Ok(services)
    }
}

/// Remove duplicates, keeping the first occurrence of each element in order.
pub fn dedup_stable(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
