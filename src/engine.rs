//! # Engine
//!
//! The engine owns everything loaded from registries and the rc file, and
//! turns names typed by the user into concrete services it can hand to Git
//! and Docker Compose.
//!
//! ## `up`
//!
//! Starting services runs these steps in order. Each step is a parallel
//! batch; a failing step stops the flow.
//!
//! 1. Clone missing source repos of build-mode services (and pull existing
//!    ones unless disabled).
//! 2. Pull images of remote-mode services.
//! 3. Build images of build-mode services.
//! 4. Run each service's pre-run command.
//! 5. `docker compose up` all of them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::App;
use crate::collection::Collection;
use crate::compose::ComposeOperations;
use crate::config::Config;
use crate::defaults::repos_dir;
use crate::error::Result;
use crate::git::GitOperations;
use crate::parallel::{self, BatchOptions};
use crate::playlist::{dedup_stable, PlaylistCollection};
use crate::registry::RegistryResult;
use crate::resource::Resource;
use crate::service::Service;

/// External collaborators and limits used by the engine.
pub struct EngineOptions {
    pub root: PathBuf,
    pub git: Arc<dyn GitOperations>,
    pub compose: Arc<dyn ComposeOperations>,
    pub batch: BatchOptions,
}

/// Switches for [`Engine::up`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpOptions {
    /// Pull source repos that are already cloned.
    pub git_pull: bool,
    /// Pull images of remote services.
    pub remote_pull: bool,
    /// Run pre-run commands.
    pub pre_run: bool,
}

impl Default for UpOptions {
    fn default() -> Self {
        Self {
            git_pull: true,
            remote_pull: true,
            pre_run: true,
        }
    }
}

pub struct Engine {
    root: PathBuf,
    services: Collection<Service>,
    playlists: PlaylistCollection,
    ios_apps: Collection<App>,
    desktop_apps: Collection<App>,
    base_images: Vec<String>,
    login_strategies: Vec<String>,
    git: Arc<dyn GitOperations>,
    compose: Arc<dyn ComposeOperations>,
    batch: BatchOptions,
}

impl Engine {
    /// Build an engine from loaded registries and the user's config.
    ///
    /// Service overrides are applied and custom playlists registered here, so
    /// every later lookup sees the user's view of the registries.
    pub fn new(loaded: RegistryResult, config: &Config, options: EngineOptions) -> Result<Self> {
        let mut services = loaded.services;
        for (name, service_override) in &config.overrides {
            let service = services.get(name)?.clone();
            log::debug!("applying override to {}", service.full_name());
            services.set(service.with_override(service_override)?)?;
        }

        let mut playlists = PlaylistCollection::new(loaded.playlists);
        for playlist in config.custom_playlists() {
            playlists.set_custom(playlist);
        }

        Ok(Self {
            root: options.root,
            services,
            playlists,
            ios_apps: loaded.ios_apps,
            desktop_apps: loaded.desktop_apps,
            base_images: loaded.base_images,
            login_strategies: loaded.login_strategies,
            git: options.git,
            compose: options.compose,
            batch: options.batch,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn services(&self) -> &Collection<Service> {
        &self.services
    }

    pub fn playlists(&self) -> &PlaylistCollection {
        &self.playlists
    }

    pub fn ios_apps(&self) -> &Collection<App> {
        &self.ios_apps
    }

    pub fn desktop_apps(&self) -> &Collection<App> {
        &self.desktop_apps
    }

    pub fn base_images(&self) -> &[String] {
        &self.base_images
    }

    pub fn login_strategies(&self) -> &[String] {
        &self.login_strategies
    }

    /// Resolve service names and an optional playlist into services.
    ///
    /// The playlist's services come first, followed by `names`. A service
    /// named more than once is returned once, at its first position.
    pub fn resolve_services(&self, names: &[String], playlist: Option<&str>) -> Result<Vec<Service>> {
        let mut all = match playlist {
            Some(playlist) => self.playlists.service_names(playlist)?,
            None => Vec::new(),
        };
        all.extend(names.iter().cloned());

        let mut services: Vec<Service> = Vec::with_capacity(all.len());
        for name in dedup_stable(all) {
            let service = self.services.get(&name)?;
            // Short and full names of the same service
            if !services.iter().any(|s| s.full_name() == service.full_name()) {
                services.push(service.clone());
            }
        }
        Ok(services)
    }

    /// Where a service's source repo is checked out.
    pub fn repo_path(&self, service: &Service) -> PathBuf {
        repos_dir(&self.root).join(&service.git_repo.name)
    }

    /// Prepare and start `services`.
    ///
    /// Every service is validated before anything runs. `progress` is called
    /// with a short description before each step.
    pub fn up<P>(&self, services: &[Service], options: &UpOptions, mut progress: P) -> Result<()>
    where
        P: FnMut(&str),
    {
        if services.is_empty() {
            return Ok(());
        }
        for service in services {
            service.validate()?;
        }

        let mut repos: Vec<(String, PathBuf)> = services
            .iter()
            .filter(|s| !s.is_remote() && s.has_git_repo())
            .map(|s| (s.git_repo.name.clone(), self.repo_path(s)))
            .collect();
        repos.sort();
        repos.dedup();
        if !repos.is_empty() {
            progress("Cloning and pulling repos");
            let git = Arc::clone(&self.git);
            let git_pull = options.git_pull;
            parallel::for_each("cloning repos", repos, &self.batch, move |(repo, path)| {
                if !path.exists() {
                    log::info!("cloning {}", repo);
                    git.clone_repo(&repo, &path)
                } else if git_pull {
                    log::info!("pulling {}", repo);
                    git.pull(&path)
                } else {
                    Ok(())
                }
            })?;
        }

        let remote: Vec<(String, String)> = services
            .iter()
            .filter(|s| s.is_remote())
            .map(|s| (s.docker_name(), s.image_uri()))
            .collect();
        if options.remote_pull && !remote.is_empty() {
            progress("Pulling images");
            let compose = Arc::clone(&self.compose);
            parallel::for_each("pulling images", remote, &self.batch, move |(name, image)| {
                log::info!("pulling {} for {}", image, name);
                compose.pull(&name)
            })?;
        }

        let build: Vec<String> = services
            .iter()
            .filter(|s| !s.is_remote())
            .map(Service::docker_name)
            .collect();
        if !build.is_empty() {
            progress("Building images");
            let compose = Arc::clone(&self.compose);
            parallel::for_each("building images", build, &self.batch, move |name| {
                log::info!("building image for {}", name);
                compose.build(&name)
            })?;
        }

        let pre_run: Vec<(String, String)> = services
            .iter()
            .filter_map(|s| s.pre_run.as_ref().map(|cmd| (s.docker_name(), cmd.clone())))
            .collect();
        if options.pre_run && !pre_run.is_empty() {
            progress("Running pre-run steps");
            let compose = Arc::clone(&self.compose);
            parallel::for_each("running pre-run steps", pre_run, &self.batch, move |(name, cmd)| {
                log::info!("running pre-run for {}: {}", name, cmd);
                compose.run(&name, &cmd)
            })?;
        }

        progress("Starting containers");
        let names: Vec<String> = services.iter().map(Service::docker_name).collect();
        self.compose.up(&names)
    }

    /// Stop and remove the containers of `services`, or of everything if empty.
    pub fn down(&self, services: &[Service]) -> Result<()> {
        let names: Vec<String> = services.iter().map(Service::docker_name).collect();
        if names.is_empty() {
            log::info!("stopping all containers");
        }
        self.compose.stop(&names)?;
        self.compose.rm(&names)
    }
}
