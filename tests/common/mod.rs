//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_registry(REGISTRY, registries::SERVICES, "", "");
//!     fixture.command().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::registries;
    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::{OTHER_REGISTRY, REGISTRY};
}

pub const REGISTRY: &str = "TouchBistro/tb-registry";
pub const OTHER_REGISTRY: &str = "ExampleZone/tb-registry";

/// Registry file contents for testing.
#[allow(dead_code)]
pub mod registries {
    pub const SERVICES: &str = r#"
global:
  baseImages:
    - touchbistro/alpine-node:12-runtime
  loginStrategies:
    - ecr
services:
  postgres:
    remote:
      image: postgres
      tag: 10.6-alpine
  redis:
    remote:
      image: redis
  venue-core-service:
    gitRepo:
      name: TouchBistro/venue-core-service
    mode: build
    build:
      dockerfilePath: ${@REPOPATH}
"#;

    pub const PLAYLISTS: &str = r#"
core:
  services:
    - postgres
    - venue-core-service
vaf-core:
  extends: core
  services:
    - redis
    - postgres
"#;

    pub const CYCLIC_PLAYLISTS: &str = r#"
core:
  extends: core-2
  services: [postgres]
core-2:
  extends: core
  services: [redis]
"#;

    pub const APPS: &str = r#"
iosApps:
  TouchBistro:
    bundleID: com.touchbistro.TouchBistro
    runsOn: ipad
    storage:
      provider: s3
      bucket: tb-ios-builds
desktopApps:
  TouchBistroServer:
    storage:
      provider: s3
      bucket: tb-desktop-builds
"#;
}

/// A temporary tb root, rc file and local registries.
///
/// Registries are added with `localPath`, so commands never touch the
/// network.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    registries: Vec<(String, PathBuf)>,
    rc_extra: String,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            registries: Vec::new(),
            rc_extra: String::new(),
        }
    }

    /// Add a local registry with the given file contents. Empty contents
    /// leave the file out.
    pub fn with_registry(mut self, name: &str, services: &str, playlists: &str, apps: &str) -> Self {
        let dir = self.temp_dir.child("registries-src").child(name);
        dir.create_dir_all().expect("Failed to create registry dir");
        for (file, content) in [
            ("services.yml", services),
            ("playlists.yml", playlists),
            ("apps.yml", apps),
        ] {
            if !content.is_empty() {
                dir.child(file)
                    .write_str(content)
                    .expect("Failed to write registry file");
            }
        }
        self.registries.push((name.to_string(), dir.path().to_path_buf()));
        self.write_rc();
        self
    }

    /// The standard test registry.
    pub fn with_default_registry(self) -> Self {
        self.with_registry(
            REGISTRY,
            registries::SERVICES,
            registries::PLAYLISTS,
            registries::APPS,
        )
    }

    /// Append raw YAML (custom playlists, overrides) to the rc file.
    #[allow(dead_code)]
    pub fn with_rc(mut self, yaml: &str) -> Self {
        self.rc_extra.push_str(yaml);
        self.write_rc();
        self
    }

    fn write_rc(&self) {
        let mut rc = String::new();
        if !self.registries.is_empty() {
            rc.push_str("registries:\n");
            for (name, path) in &self.registries {
                rc.push_str(&format!(
                    "  - name: {}\n    localPath: {}\n",
                    name,
                    path.display()
                ));
            }
        }
        rc.push_str(&self.rc_extra);
        std::fs::write(self.rc_path(), rc).expect("Failed to write rc file");
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn rc_path(&self) -> PathBuf {
        self.temp_dir.path().join(".tbrc.yml")
    }

    pub fn tb_home(&self) -> PathBuf {
        self.temp_dir.path().join(".tb")
    }

    /// Path of a registry added with `with_registry`.
    #[allow(dead_code)]
    pub fn registry_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join("registries-src").join(name)
    }

    /// Create an empty directory inside the fixture.
    #[allow(dead_code)]
    pub fn child_dir(&self, path: &str) -> PathBuf {
        let child = self.temp_dir.child(path);
        child.create_dir_all().expect("Failed to create directory");
        child.path().to_path_buf()
    }

    /// Create a `tb` command pointed at this fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tb");
        cmd.current_dir(self.path())
            .env("TB_HOME", self.tb_home())
            .env("TB_RC", self.rc_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("TB_CONCURRENCY")
            .arg("--log-level")
            .arg("warn");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
