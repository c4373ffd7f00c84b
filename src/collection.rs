//! # Resource Collections
//!
//! A `Collection<T>` stores resources of one kind (services, playlists or
//! apps) loaded from any number of registries. Resources are grouped into
//! **buckets** keyed by their bare item name, so the same item name can exist
//! once per registry.
//!
//! Lookups accept both name forms:
//!
//! - a full name `<org>/<repo>/<item>` always identifies at most one resource,
//! - a short name `<item>` only resolves when exactly one registry defines it.
//!   When several do, the lookup fails with `MultipleResources` instead of
//!   picking one.
//!
//! Iteration order is unspecified. Callers that print or compare lists must
//! sort them.

use std::collections::hash_map;
use std::collections::HashMap;
use std::iter::Flatten;

use crate::error::{Error, Result};
use crate::resource::{parse_name, Resource};

/// A set of resources addressable by short or full name.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    buckets: HashMap<String, Vec<T>>,
    len: usize,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }
}

impl<T: Resource> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`, replacing any resource with the same full name in place.
    ///
    /// The resource must already have both its name and registry name set.
    pub fn set(&mut self, value: T) -> Result<()> {
        let full_name = value.full_name();
        let (registry_name, item_name) = parse_name(&full_name).map_err(|e| Error::Internal {
            message: format!("cannot store {} with malformed name: {}", T::KIND, e),
        })?;
        if registry_name.is_empty() {
            return Err(Error::MissingRegistry {
                kind: T::KIND,
                name: item_name,
            });
        }
        if item_name != value.name() {
            return Err(Error::Internal {
                message: format!("cannot store {} {}: name contains a registry", T::KIND, full_name),
            });
        }

        let bucket = self.buckets.entry(item_name).or_default();
        match bucket
            .iter()
            .position(|existing| existing.registry_name() == registry_name)
        {
            Some(index) => bucket[index] = value,
            None => {
                bucket.push(value);
                self.len += 1;
            }
        }
        Ok(())
    }

    /// Look up a resource by short or full name.
    pub fn get(&self, name: &str) -> Result<&T> {
        let (registry_name, item_name) = parse_name(name)?;
        let not_found = || Error::NotFound {
            kind: T::KIND,
            name: name.to_string(),
        };

        let bucket = self.buckets.get(&item_name).ok_or_else(not_found)?;
        if registry_name.is_empty() {
            return match bucket.as_slice() {
                [] => Err(not_found()),
                [only] => Ok(only),
                many => Err(Error::MultipleResources {
                    kind: T::KIND,
                    name: name.to_string(),
                    registries: self
                        .registries_for(&item_name)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                }),
            };
        }

        bucket
            .iter()
            .find(|r| r.registry_name() == registry_name)
            .ok_or_else(not_found)
    }

    /// Full names of every resource, in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(Resource::full_name)
    }

    /// Registries that define a resource with the bare name `item_name`.
    pub fn registries_for(&self, item_name: &str) -> Vec<&str> {
        self.buckets
            .get(item_name)
            .map(|bucket| bucket.iter().map(Resource::registry_name).collect())
            .unwrap_or_default()
    }
}

impl<T> Collection<T> {
    /// Total number of resources across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over every resource once, in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buckets.values().flatten(),
            remaining: self.len,
        }
    }
}

/// Iterator over the resources of a [`Collection`].
pub struct Iter<'a, T> {
    inner: Flatten<hash_map::Values<'a, String, Vec<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
