//! # Resource Names
//!
//! Every service, playlist and app is addressed by a two-level name:
//!
//! - a **short name** `<item>`, e.g. `postgres`
//! - a **full name** `<org>/<repo>/<item>`, e.g. `TouchBistro/tb-registry/postgres`
//!
//! The `<org>/<repo>` prefix is the registry the item was loaded from. This
//! module parses and joins those names and defines the `Resource` trait
//! implemented by every entity stored in a [`Collection`](crate::collection::Collection).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, ResourceKind, Result};

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([\w-]+/[\w-]+)/)?([\w-]+)$").expect("name pattern is valid")
});

static REGISTRY_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+/[\w-]+$").expect("registry pattern is valid"));

/// Split a name into `(registry_name, item_name)`.
///
/// `registry_name` is empty for short names. Anything that is neither a short
/// nor a full name is rejected with [`Error::InvalidName`].
///
/// ```
/// use tb::resource::parse_name;
///
/// let (registry, item) = parse_name("TouchBistro/tb-registry/postgres").unwrap();
/// assert_eq!(registry, "TouchBistro/tb-registry");
/// assert_eq!(item, "postgres");
///
/// assert!(parse_name("TouchBistro/postgres").is_err());
/// ```
pub fn parse_name(name: &str) -> Result<(String, String)> {
    let captures = NAME_REGEX.captures(name).ok_or_else(|| Error::InvalidName {
        name: name.to_string(),
    })?;

    let registry_name = captures.get(1).map_or("", |m| m.as_str());
    let item_name = captures.get(2).map_or("", |m| m.as_str());
    Ok((registry_name.to_string(), item_name.to_string()))
}

/// Join a registry name and an item name. Inverse of [`parse_name`].
pub fn full_name(registry_name: &str, item_name: &str) -> String {
    if registry_name.is_empty() {
        return item_name.to_string();
    }
    format!("{}/{}", registry_name, item_name)
}

/// Check that `name` has the `<org>/<repo>` shape of a registry name.
pub fn validate_registry_name(name: &str) -> Result<()> {
    if REGISTRY_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Qualify `name` with `registry_name` unless it already carries a registry.
///
/// Used by the registry loader to normalize playlist references.
pub fn qualify(registry_name: &str, name: &str) -> Result<String> {
    let (registry, item) = parse_name(name)?;
    if registry.is_empty() {
        Ok(full_name(registry_name, &item))
    } else {
        Ok(name.to_string())
    }
}

/// A named entity that belongs to a registry.
pub trait Resource {
    /// Which kind of resource this is, used in error messages.
    const KIND: ResourceKind;

    /// The bare item name.
    fn name(&self) -> &str;

    /// The owning registry, `<org>/<repo>`. Empty until assigned by the loader.
    fn registry_name(&self) -> &str;

    fn full_name(&self) -> String {
        full_name(self.registry_name(), self.name())
    }
}
