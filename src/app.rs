//! # Apps
//!
//! Apps are iOS or desktop builds distributed through blob storage. `tb`
//! only needs their metadata here: which device family an iOS app runs on,
//! its bundle id, and where builds are stored.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ResourceKind, Result};
use crate::resource::Resource;

/// Device family an iOS app supports.
///
/// An unrecognized value is rejected when `apps.yml` is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunsOn {
    #[default]
    All,
    Ipad,
    Iphone,
}

impl RunsOn {
    /// Whether a simulator of `device_type` (e.g. `iPad Air 2`) can run the app.
    pub fn supports(self, device_type: &str) -> bool {
        let device_type = device_type.to_lowercase();
        match self {
            RunsOn::All => true,
            RunsOn::Ipad => device_type.starts_with("ipad"),
            RunsOn::Iphone => device_type.starts_with("iphone"),
        }
    }
}

impl fmt::Display for RunsOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunsOn::All => "all",
            RunsOn::Ipad => "ipad",
            RunsOn::Iphone => "iphone",
        };
        f.write_str(s)
    }
}

/// Blob storage location of app builds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub bucket: String,
}

/// An iOS or desktop app.
///
/// The same type is stored in two collections; `kind` records which one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub registry_name: String,
    #[serde(skip, default = "default_kind")]
    pub kind: AppKind,
    #[serde(default, rename = "bundleID")]
    pub bundle_id: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub git_repo: String,
    #[serde(default)]
    pub runs_on: RunsOn,
    #[serde(default)]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default)]
    pub storage: Storage,
}

/// Platform of an app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Ios,
    Desktop,
}

fn default_kind() -> AppKind {
    AppKind::Ios
}

fn default_branch() -> String {
    "master".to_string()
}

impl Resource for App {
    const KIND: ResourceKind = ResourceKind::App;

    fn name(&self) -> &str {
        &self.name
    }

    fn registry_name(&self) -> &str {
        &self.registry_name
    }
}

impl App {
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Error::Validation {
            resource: format!("app {}", self.full_name()),
            message: message.to_string(),
        };

        if self.kind == AppKind::Ios && self.bundle_id.is_empty() {
            return Err(invalid("bundleID is required for iOS apps"));
        }
        if self.storage.provider.is_empty() || self.storage.bucket.is_empty() {
            return Err(invalid("storage.provider and storage.bucket are required"));
        }
        Ok(())
    }
}
