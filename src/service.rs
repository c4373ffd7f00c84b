//! # Services
//!
//! A service is one container in the development environment. It either runs
//! a prebuilt image pulled from a remote registry (`mode: remote`) or is built
//! locally from a Git checkout (`mode: build`).
//!
//! Users can override parts of a service from their rc file. Overrides are
//! applied to a copy of the loaded service, which is then stored back into the
//! collection under the same full name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ResourceKind, Result};
use crate::resource::Resource;

/// Where a service's image comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Build the image locally from the service's git repo.
    Build,
    /// Pull a prebuilt image.
    #[default]
    Remote,
}

/// Local build configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(default)]
    pub args: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default)]
    pub dockerfile_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

/// Remote image configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

impl Default for Remote {
    fn default() -> Self {
        Self {
            command: None,
            enabled: true,
            image: String::new(),
            tag: None,
            volumes: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// A volume mounted into the container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub value: String,
    #[serde(default)]
    pub is_named: bool,
}

/// Git repository holding a service's source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepo {
    /// `<org>/<repo>` on GitHub.
    #[serde(default)]
    pub name: String,
}

/// A container definition loaded from a registry's `services.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub registry_name: String,
    #[serde(default)]
    pub build: Build,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub entrypoint: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default)]
    pub git_repo: GitRepo,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_run: Option<String>,
    #[serde(default)]
    pub remote: Remote,
}

impl Resource for Service {
    const KIND: ResourceKind = ResourceKind::Service;

    fn name(&self) -> &str {
        &self.name
    }

    fn registry_name(&self) -> &str {
        &self.registry_name
    }
}

/// User overrides for a service, read from the rc file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_run: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoteOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Service {
    pub fn is_remote(&self) -> bool {
        self.mode == Mode::Remote
    }

    pub fn has_git_repo(&self) -> bool {
        !self.git_repo.name.is_empty()
    }

    /// Name used for the compose service and container.
    ///
    /// `TouchBistro/tb-registry/postgres` becomes `touchbistro-tb-registry-postgres`.
    pub fn docker_name(&self) -> String {
        self.full_name().replace('/', "-").to_lowercase()
    }

    /// Remote image reference, `image:tag` or just `image` when untagged.
    pub fn image_uri(&self) -> String {
        match &self.remote.tag {
            Some(tag) => format!("{}:{}", self.remote.image, tag),
            None => self.remote.image.clone(),
        }
    }

    /// Check that the service can run in its configured mode.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Error::Validation {
            resource: format!("service {}", self.full_name()),
            message: message.to_string(),
        };

        match self.mode {
            Mode::Remote => {
                if !self.remote.enabled {
                    return Err(invalid("mode is remote but remote is disabled"));
                }
                if self.remote.image.is_empty() {
                    return Err(invalid("mode is remote but remote.image is empty"));
                }
            }
            Mode::Build => {
                if self.build.dockerfile_path.is_empty() {
                    return Err(invalid("mode is build but build.dockerfilePath is empty"));
                }
            }
        }
        Ok(())
    }

    /// Apply user overrides and return the updated service.
    ///
    /// The result is validated so an override cannot switch a service into a
    /// mode it has no configuration for.
    pub fn with_override(mut self, o: &ServiceOverride) -> Result<Self> {
        if let Some(mode) = o.mode {
            self.mode = mode;
        }
        for (key, value) in &o.env_vars {
            self.env_vars.insert(key.clone(), value.clone());
        }
        if let Some(pre_run) = &o.pre_run {
            self.pre_run = Some(pre_run.clone());
        }
        if let Some(build) = &o.build {
            if build.command.is_some() {
                self.build.command = build.command.clone();
            }
            if build.target.is_some() {
                self.build.target = build.target.clone();
            }
        }
        if let Some(remote) = &o.remote {
            if remote.command.is_some() {
                self.remote.command = remote.command.clone();
            }
            if remote.tag.is_some() {
                self.remote.tag = remote.tag.clone();
            }
        }

        self.validate()?;
        Ok(self)
    }
}
