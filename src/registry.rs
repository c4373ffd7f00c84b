//! # Registries
//!
//! A registry is a Git repository, named `<org>/<repo>`, that defines
//! resources in up to three YAML files:
//!
//! - `services.yml`: global settings and services
//! - `playlists.yml`: playlists
//! - `apps.yml`: iOS and desktop apps
//!
//! Reading a registry assigns every resource its name and registry, expands
//! variables in service paths and environment values, and normalizes playlist
//! references to full names. The resulting collections are ready to be queried;
//! nothing downstream needs to know which file a resource came from.
//!
//! ## Variables
//!
//! Service strings may reference `${@ROOTPATH}` (the tb root),
//! `${@REPOPATH}` (the service's source checkout) and any variable defined
//! under `global.variables` as `${NAME}`. Unknown variables are an error.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::app::{App, AppKind};
use crate::collection::Collection;
use crate::config::RegistryConfig;
use crate::defaults::{registries_dir, repos_dir};
use crate::error::{Error, Result};
use crate::git::GitOperations;
use crate::parallel::{self, BatchOptions};
use crate::playlist::{Playlist, PlaylistCollection};
use crate::resource::{qualify, validate_registry_name, Resource};
use crate::service::Service;

pub const SERVICES_FILENAME: &str = "services.yml";
pub const PLAYLISTS_FILENAME: &str = "playlists.yml";
pub const APPS_FILENAME: &str = "apps.yml";

static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(@?[\w-]+)\}").expect("variable pattern is valid"));

/// A registry and where it lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// `<org>/<repo>`
    pub name: String,
    pub path: PathBuf,
    /// Local registries are read in place and never synced.
    pub local: bool,
}

impl Registry {
    /// Resolve a configured registry to its location under `root`.
    pub fn from_config(config: &RegistryConfig, root: &Path) -> Self {
        match &config.local_path {
            Some(path) => Self {
                name: config.name.clone(),
                path: path.clone(),
                local: true,
            },
            None => Self {
                name: config.name.clone(),
                path: registries_dir(root).join(&config.name),
                local: false,
            },
        }
    }
}

/// Options for reading registries
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// The tb root, used for `${@ROOTPATH}` and `${@REPOPATH}`.
    pub root: PathBuf,
}

/// Everything loaded from a set of registries.
#[derive(Debug, Clone, Default)]
pub struct RegistryResult {
    pub services: Collection<Service>,
    pub playlists: Collection<Playlist>,
    pub ios_apps: Collection<App>,
    pub desktop_apps: Collection<App>,
    pub base_images: Vec<String>,
    pub login_strategies: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalConfig {
    #[serde(default)]
    base_images: Vec<String>,
    #[serde(default)]
    login_strategies: Vec<String>,
    #[serde(default)]
    variables: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServicesFile {
    #[serde(default)]
    global: GlobalConfig,
    #[serde(default)]
    services: BTreeMap<String, Service>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppsFile {
    #[serde(default)]
    ios_apps: BTreeMap<String, App>,
    #[serde(default)]
    desktop_apps: BTreeMap<String, App>,
}

/// Read a YAML file from a registry; a missing file reads as the default.
fn read_file<T: DeserializeOwned + Default>(registry: &Registry, filename: &str) -> Result<T> {
    let path = registry.path.join(filename);
    if !path.exists() {
        log::debug!("{} has no {}", registry.name, filename);
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| Error::Registry {
        registry: registry.name.clone(),
        message: format!("failed to read {}: {}", filename, e),
    })?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&content).map_err(|e| Error::Registry {
        registry: registry.name.clone(),
        message: format!("failed to parse {}: {}", filename, e),
    })
}

/// Replace `${...}` references in `value` using `lookup`.
pub fn expand<F>(value: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut expanded = String::with_capacity(value.len());
    let mut last = 0;
    for captures in VARIABLE_REGEX.captures_iter(value) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let replacement = lookup(name.as_str()).ok_or_else(|| Error::Variable {
            message: "undefined variable".to_string(),
            variable: Some(name.as_str().to_string()),
        })?;
        expanded.push_str(&value[last..whole.start()]);
        expanded.push_str(&replacement);
        last = whole.end();
    }
    expanded.push_str(&value[last..]);
    Ok(expanded)
}

fn expand_service(
    service: &mut Service,
    root: &Path,
    variables: &HashMap<String, String>,
) -> Result<()> {
    let repo_path = service
        .has_git_repo()
        .then(|| repos_dir(root).join(&service.git_repo.name));
    let lookup = |name: &str| match name {
        "@ROOTPATH" => Some(root.display().to_string()),
        "@REPOPATH" => repo_path.as_ref().map(|p| p.display().to_string()),
        _ => variables.get(name).cloned(),
    };

    let resource = format!("service {}", service.name);
    let context = |e: Error| Error::Validation {
        resource: resource.clone(),
        message: e.to_string(),
    };

    let mut strings: Vec<&mut String> = Vec::new();
    strings.extend(service.env_vars.values_mut());
    strings.extend(service.build.args.values_mut());
    strings.push(&mut service.build.dockerfile_path);
    strings.extend(service.build.volumes.iter_mut().map(|v| &mut v.value));
    strings.extend(service.remote.volumes.iter_mut().map(|v| &mut v.value));
    if let Some(env_file) = service.env_file.as_mut() {
        strings.push(env_file);
    }

    for value in strings {
        *value = expand(value, lookup).map_err(context)?;
    }
    Ok(())
}

fn read_registry(registry: &Registry, options: &ReadOptions, result: &mut RegistryResult) -> Result<()> {
    validate_registry_name(&registry.name)?;
    log::debug!("reading registry {} from {}", registry.name, registry.path.display());

    let services_file: ServicesFile = read_file(registry, SERVICES_FILENAME)?;
    let global = services_file.global;
    result.base_images.extend(global.base_images);
    result.login_strategies.extend(global.login_strategies);

    for (name, mut service) in services_file.services {
        service.name = name;
        service.registry_name = registry.name.clone();
        expand_service(&mut service, &options.root, &global.variables)?;
        result.services.set(service)?;
    }

    let playlists: BTreeMap<String, Playlist> = read_file(registry, PLAYLISTS_FILENAME)?;
    for (name, mut playlist) in playlists {
        let invalid = |e: Error| Error::Registry {
            registry: registry.name.clone(),
            message: format!("playlist {} in {}: {}", name, PLAYLISTS_FILENAME, e),
        };
        playlist.extends = playlist
            .extends
            .map(|extends| qualify(&registry.name, &extends))
            .transpose()
            .map_err(invalid)?;
        playlist.services = playlist
            .services
            .iter()
            .map(|service| qualify(&registry.name, service))
            .collect::<Result<_>>()
            .map_err(invalid)?;
        playlist.name = name;
        playlist.registry_name = registry.name.clone();
        result.playlists.set(playlist)?;
    }

    let apps: AppsFile = read_file(registry, APPS_FILENAME)?;
    for (kind, apps, collection) in [
        (AppKind::Ios, apps.ios_apps, &mut result.ios_apps),
        (AppKind::Desktop, apps.desktop_apps, &mut result.desktop_apps),
    ] {
        for (name, mut app) in apps {
            app.name = name;
            app.registry_name = registry.name.clone();
            app.kind = kind;
            collection.set(app)?;
        }
    }
    Ok(())
}

/// Read every registry, in order, into one set of collections.
pub fn read_registries(registries: &[Registry], options: &ReadOptions) -> Result<RegistryResult> {
    let mut result = RegistryResult::default();
    for registry in registries {
        read_registry(registry, options, &mut result)?;
    }

    result.base_images.sort();
    result.base_images.dedup();
    result.login_strategies.sort();
    result.login_strategies.dedup();

    log::info!(
        "loaded {} services, {} playlists and {} apps from {} registries",
        result.services.len(),
        result.playlists.len(),
        result.ios_apps.len() + result.desktop_apps.len(),
        registries.len()
    );
    Ok(result)
}

/// Clone missing registries and pull existing ones. Local registries are skipped.
pub fn sync(
    registries: &[Registry],
    git: Arc<dyn GitOperations>,
    options: &BatchOptions,
) -> Result<()> {
    let remote: Vec<Registry> = registries.iter().filter(|r| !r.local).cloned().collect();
    parallel::for_each("syncing registries", remote, options, move |registry| {
        if registry.path.exists() {
            log::info!("pulling registry {}", registry.name);
            git.pull(&registry.path)
        } else {
            log::info!("cloning registry {}", registry.name);
            git.clone_repo(&registry.name, &registry.path)
        }
    })
}

/// Outcome of validating a registry directory.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub services: usize,
    pub playlists: usize,
    pub apps: usize,
    pub problems: Vec<Error>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Load one registry and check every resource in it.
///
/// Errors that stop the registry from loading at all are returned directly.
/// Problems with individual resources are collected in the report.
pub fn validate(registry: &Registry, options: &ReadOptions) -> Result<ValidationReport> {
    let result = read_registries(std::slice::from_ref(registry), options)?;
    let mut report = ValidationReport {
        services: result.services.len(),
        playlists: result.playlists.len(),
        apps: result.ios_apps.len() + result.desktop_apps.len(),
        problems: Vec::new(),
    };

    let mut services: Vec<&Service> = result.services.iter().collect();
    services.sort_by_key(|s| s.full_name());
    for service in services {
        if let Err(e) = service.validate() {
            report.problems.push(e);
        }
    }

    let mut apps: Vec<&App> = result.ios_apps.iter().chain(&result.desktop_apps).collect();
    apps.sort_by_key(|a| a.full_name());
    for app in apps {
        if let Err(e) = app.validate() {
            report.problems.push(e);
        }
    }

    let playlists = PlaylistCollection::new(result.playlists.clone());
    let mut names = playlists.names();
    names.sort();
    for name in names {
        match playlists.service_names(&name) {
            Ok(service_names) => {
                for service_name in service_names {
                    if let Err(e) = result.services.get(&service_name) {
                        report.problems.push(Error::Validation {
                            resource: format!("playlist {}", name),
                            message: e.to_string(),
                        });
                    }
                }
            }
            Err(e) => report.problems.push(e),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Mode;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    const SERVICES: &str = r#"
global:
  baseImages:
    - touchbistro/alpine-node:12-runtime
  loginStrategies:
    - ecr
  variables:
    DB_HOST: postgres
services:
  postgres:
    envVars:
      POSTGRES_USER: core
    remote:
      image: postgres
      tag: 10.6-alpine
      volumes:
        - value: ${@ROOTPATH}/data/postgres:/var/lib/postgresql/data
  venue-core-service:
    envVars:
      DB_HOST: ${DB_HOST}
    gitRepo:
      name: TouchBistro/venue-core-service
    mode: build
    build:
      dockerfilePath: ${@REPOPATH}
"#;

    const PLAYLISTS: &str = r#"
core:
  services:
    - postgres
    - venue-core-service
vaf-core:
  extends: core
  services:
    - venue-admin-frontend
    - ExampleZone/tb-registry/partners-config-service
"#;

    const APPS: &str = r#"
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

    fn write_registry(dir: &Path, services: &str, playlists: &str, apps: &str) {
        fs::write(dir.join(SERVICES_FILENAME), services).unwrap();
        fs::write(dir.join(PLAYLISTS_FILENAME), playlists).unwrap();
        fs::write(dir.join(APPS_FILENAME), apps).unwrap();
    }

    fn local_registry(name: &str, dir: &Path) -> Registry {
        Registry {
            name: name.to_string(),
            path: dir.to_path_buf(),
            local: true,
        }
    }

    fn options() -> ReadOptions {
        ReadOptions {
            root: PathBuf::from("/home/dev/.tb"),
        }
    }

    #[test]
    fn test_read_registry() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), SERVICES, PLAYLISTS, APPS);

        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let result = read_registries(&[registry], &options()).unwrap();

        assert_eq!(result.services.len(), 2);
        assert_eq!(result.playlists.len(), 2);
        assert_eq!(result.ios_apps.len(), 1);
        assert_eq!(result.desktop_apps.len(), 1);
        assert_eq!(result.base_images, vec!["touchbistro/alpine-node:12-runtime"]);
        assert_eq!(result.login_strategies, vec!["ecr"]);

        let postgres = result.services.get("postgres").unwrap();
        assert_eq!(postgres.registry_name, "TouchBistro/tb-registry");
        assert_eq!(
            postgres.remote.volumes[0].value,
            "/home/dev/.tb/data/postgres:/var/lib/postgresql/data"
        );

        let core = result
            .services
            .get("TouchBistro/tb-registry/venue-core-service")
            .unwrap();
        assert_eq!(core.mode, Mode::Build);
        assert_eq!(core.env_vars["DB_HOST"], "postgres");
        assert_eq!(
            core.build.dockerfile_path,
            "/home/dev/.tb/repos/TouchBistro/venue-core-service"
        );

        let server = result.desktop_apps.get("TouchBistroServer").unwrap();
        assert_eq!(server.kind, AppKind::Desktop);
    }

    #[test]
    fn test_playlists_are_normalized() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "", PLAYLISTS, "");

        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let result = read_registries(&[registry], &options()).unwrap();

        let vaf = result.playlists.get("vaf-core").unwrap();
        assert_eq!(vaf.extends.as_deref(), Some("TouchBistro/tb-registry/core"));
        assert_eq!(
            vaf.services,
            vec![
                "TouchBistro/tb-registry/venue-admin-frontend",
                "ExampleZone/tb-registry/partners-config-service"
            ]
        );
    }

    #[test]
    fn test_missing_files_are_empty() {
        let temp_dir = TempDir::new().unwrap();
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let result = read_registries(&[registry], &options()).unwrap();
        assert!(result.services.is_empty());
        assert!(result.playlists.is_empty());
    }

    #[test]
    fn test_same_names_across_registries() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_registry(first.path(), SERVICES, "", "");
        write_registry(second.path(), SERVICES, "", "");

        let registries = [
            local_registry("TouchBistro/tb-registry", first.path()),
            local_registry("ExampleZone/tb-registry", second.path()),
        ];
        let result = read_registries(&registries, &options()).unwrap();

        assert_eq!(result.services.len(), 4);
        assert!(result
            .services
            .get("postgres")
            .unwrap_err()
            .is_multiple_resources());
        assert!(result
            .services
            .get("ExampleZone/tb-registry/postgres")
            .is_ok());
        // Global lists are merged without duplicates
        assert_eq!(result.login_strategies, vec!["ecr"]);
    }

    #[test]
    fn test_invalid_registry_name() {
        let temp_dir = TempDir::new().unwrap();
        let registry = local_registry("tb-registry", temp_dir.path());
        assert!(read_registries(&[registry], &options())
            .unwrap_err()
            .is_invalid_name());
    }

    #[test]
    fn test_parse_error_names_registry_and_file() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "services: [\n", "", "");
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());

        let message = read_registries(&[registry], &options())
            .unwrap_err()
            .to_string();
        assert!(message.contains("TouchBistro/tb-registry"));
        assert!(message.contains(SERVICES_FILENAME));
    }

    #[test]
    fn test_unknown_runs_on_fails_loading() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "", "", "iosApps:\n  A:\n    runsOn: watch\n");
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());

        let message = read_registries(&[registry], &options())
            .unwrap_err()
            .to_string();
        assert!(message.contains(APPS_FILENAME));
    }

    #[test]
    fn test_invalid_playlist_names_report_registry() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(
            temp_dir.path(),
            "",
            "core:\n  extends: TouchBistro/core\n  services: [postgres]\n",
            "",
        );
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());

        let err = read_registries(&[registry], &options()).unwrap_err();
        assert!(matches!(err, Error::Registry { .. }));
        let message = err.to_string();
        assert!(message.starts_with("registry TouchBistro/tb-registry: playlist core in playlists.yml"));
        assert!(message.contains("TouchBistro/core"));
    }

    #[test]
    fn test_invalid_playlist_service_reports_registry() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "", "core:\n  services: [\"bad name\"]\n", "");
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());

        let message = read_registries(&[registry], &options())
            .unwrap_err()
            .to_string();
        assert!(message.contains("playlist core in playlists.yml"));
    }

    #[test]
    fn test_loaded_playlist_cycle() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(
            temp_dir.path(),
            "",
            "a:\n  extends: b\nb:\n  extends: c\nc:\n  extends: a\n  services: [redis]\n",
            "",
        );
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let result = read_registries(&[registry], &options()).unwrap();

        let playlists = PlaylistCollection::new(result.playlists);
        let resolved = playlists.service_names("a");
        assert!(resolved.as_ref().ok().is_none());
        assert!(resolved.unwrap_err().is_circular_dependency());
    }

    #[test]
    fn test_loaded_playlist_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(temp_dir.path(), "", "vaf-core:\n  extends: core\n", "");
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let result = read_registries(&[registry], &options()).unwrap();

        let playlists = PlaylistCollection::new(result.playlists);
        let err = playlists.service_names("vaf-core").unwrap_err();
        assert!(err.is_not_found());
        assert!(err
            .to_string()
            .ends_with("playlist TouchBistro/tb-registry/core not found"));
    }

    #[test]
    fn test_expand() {
        let lookup = |name: &str| (name == "A").then(|| "1".to_string());
        assert_eq!(expand("x-${A}-${A}", lookup).unwrap(), "x-1-1");
        assert_eq!(expand("no variables", lookup).unwrap(), "no variables");
        assert_eq!(expand("$A {A}", lookup).unwrap(), "$A {A}");

        let err = expand("${B}", lookup).unwrap_err();
        assert!(err.to_string().contains("(variable: B)"));
    }

    #[test]
    fn test_repopath_without_git_repo() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(
            temp_dir.path(),
            "services:\n  redis:\n    envVars:\n      DIR: ${@REPOPATH}\n",
            "",
            "",
        );
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let message = read_registries(&[registry], &options())
            .unwrap_err()
            .to_string();
        assert!(message.contains("service redis"));
        assert!(message.contains("@REPOPATH"));
    }

    #[test]
    fn test_registry_from_config() {
        let root = Path::new("/home/dev/.tb");
        let managed = Registry::from_config(
            &RegistryConfig {
                name: "TouchBistro/tb-registry".to_string(),
                local_path: None,
            },
            root,
        );
        assert!(!managed.local);
        assert_eq!(
            managed.path,
            PathBuf::from("/home/dev/.tb/registries/TouchBistro/tb-registry")
        );

        let local = Registry::from_config(
            &RegistryConfig {
                name: "TouchBistro/tb-registry".to_string(),
                local_path: Some(PathBuf::from("/src/tb-registry")),
            },
            root,
        );
        assert!(local.local);
        assert_eq!(local.path, PathBuf::from("/src/tb-registry"));
    }

    #[derive(Default)]
    struct RecordingGit {
        calls: Mutex<Vec<String>>,
    }

    impl GitOperations for RecordingGit {
        fn clone_repo(&self, repo: &str, _target_dir: &Path) -> Result<()> {
            self.calls.lock().unwrap().push(format!("clone {}", repo));
            Ok(())
        }

        fn pull(&self, dir: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("pull {}", dir.display()));
            Ok(())
        }
    }

    #[test]
    fn test_sync() {
        let existing = TempDir::new().unwrap();
        let registries = vec![
            Registry {
                name: "TouchBistro/tb-registry".to_string(),
                path: existing.path().to_path_buf(),
                local: false,
            },
            Registry {
                name: "ExampleZone/tb-registry".to_string(),
                path: existing.path().join("missing"),
                local: false,
            },
            local_registry("Local/registry", existing.path()),
        ];

        let git = Arc::new(RecordingGit::default());
        let options = BatchOptions {
            concurrency: 2,
            timeout: Duration::from_secs(5),
        };
        sync(&registries, git.clone(), &options).unwrap();

        let mut calls = git.calls.lock().unwrap().clone();
        calls.sort();
        assert_eq!(
            calls,
            vec![
                "clone ExampleZone/tb-registry".to_string(),
                format!("pull {}", existing.path().display()),
            ]
        );
    }

    #[test]
    fn test_validate_reports_problems() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(
            temp_dir.path(),
            SERVICES,
            r#"
core:
  services: [postgres, missing-service]
loop-a:
  extends: loop-b
loop-b:
  extends: loop-a
"#,
            "iosApps:\n  NoBundle:\n    storage: {provider: s3, bucket: b}\n",
        );
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let report = validate(&registry, &options()).unwrap();

        assert_eq!(report.services, 2);
        assert_eq!(report.playlists, 3);
        assert_eq!(report.apps, 1);
        assert!(!report.is_valid());

        let messages: Vec<String> = report.problems.iter().map(|e| e.to_string()).collect();
        assert!(messages.iter().any(|m| m.contains("bundleID")));
        assert!(messages.iter().any(|m| m.contains("missing-service")));
        assert_eq!(
            report
                .problems
                .iter()
                .filter(|e| e.is_circular_dependency())
                .count(),
            2
        );
    }

    #[test]
    fn test_validate_clean_registry() {
        let temp_dir = TempDir::new().unwrap();
        write_registry(
            temp_dir.path(),
            SERVICES,
            "core:\n  services: [postgres, venue-core-service]\n",
            APPS,
        );
        let registry = local_registry("TouchBistro/tb-registry", temp_dir.path());
        let report = validate(&registry, &options()).unwrap();
        assert!(report.is_valid(), "{:?}", report.problems);
    }
}
