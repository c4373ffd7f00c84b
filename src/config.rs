//! # User Configuration
//!
//! This module defines the schema of the user's rc file (`~/.tbrc.yml`) and
//! the logic for reading and writing it.
//!
//! ## Key Components
//!
//! - **`Config`**: The whole file: which registries to load, the user's custom
//!   playlists, and per-service overrides.
//! - **`RegistryConfig`**: One registry entry. A `localPath` makes `tb` read
//!   the registry from that directory instead of its managed git checkout.
//!
//! Parsing is strict: unknown keys are rejected so that typos surface as
//! errors instead of silently doing nothing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::playlist::Playlist;
use crate::resource::{parse_name, validate_registry_name};
use crate::service::ServiceOverride;

/// A registry the user has added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistryConfig {
    /// `<org>/<repo>` of the registry on GitHub.
    pub name: String,
    /// Read the registry from this directory and never sync it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

/// A custom playlist as written in the rc file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomPlaylist {
    /// Name of the parent playlist, short or full.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Contents of the rc file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    /// Not read by `tb` itself; kept so rewriting the file preserves it.
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub registries: Vec<RegistryConfig>,
    /// Custom playlists, keyed by bare name.
    #[serde(default)]
    pub playlists: BTreeMap<String, CustomPlaylist>,
    /// Service overrides, keyed by short or full service name.
    #[serde(default)]
    pub overrides: BTreeMap<String, ServiceOverride>,
}

impl Config {
    /// Custom playlists with their names filled in.
    pub fn custom_playlists(&self) -> impl Iterator<Item = Playlist> + '_ {
        self.playlists.iter().map(|(name, playlist)| Playlist {
            name: name.clone(),
            registry_name: String::new(),
            extends: playlist.extends.clone(),
            services: playlist.services.clone(),
        })
    }

    /// Add a registry unless one with the same name is already configured.
    ///
    /// Returns `false` if the registry was already present.
    pub fn add_registry(&mut self, name: &str) -> Result<bool> {
        validate_registry_name(name)?;
        if self.registries.iter().any(|r| r.name == name) {
            return Ok(false);
        }
        self.registries.push(RegistryConfig {
            name: name.to_string(),
            local_path: None,
        });
        Ok(true)
    }

    fn validate(&self) -> Result<()> {
        for registry in &self.registries {
            validate_registry_name(&registry.name).map_err(|_| Error::ConfigParse {
                message: format!("invalid registry name {:?}", registry.name),
                hint: Some("Registry names have the form <org>/<repo>".to_string()),
            })?;
        }

        for name in self.playlists.keys() {
            let valid = matches!(parse_name(name), Ok((registry, _)) if registry.is_empty());
            if !valid {
                return Err(Error::ConfigParse {
                    message: format!("invalid custom playlist name {:?}", name),
                    hint: Some(
                        "Custom playlist names cannot contain a registry prefix".to_string(),
                    ),
                });
            }
        }

        for name in self.overrides.keys() {
            parse_name(name).map_err(|_| Error::ConfigParse {
                message: format!("invalid service name {:?} in overrides", name),
                hint: None,
            })?;
        }
        Ok(())
    }
}

/// Parse an rc file from a YAML string.
pub fn parse(yaml_content: &str) -> Result<Config> {
    // An empty file is a valid, empty configuration
    if yaml_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: None,
    })?;
    config.validate()?;
    Ok(config)
}

/// Read the rc file at `path`. A missing file yields the default configuration.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("no rc file at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    parse(&content).map_err(|e| match e {
        Error::ConfigParse { message, hint } => Error::ConfigParse {
            message: format!("{}: {}", path.display(), message),
            hint,
        },
        other => other,
    })
}

/// Write `config` to `path`, replacing the file.
pub fn save<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
