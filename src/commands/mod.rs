//! # CLI Command Implementations
//!
//! Each subcommand of `tb` lives in its own file with:
//! - an `Args` struct derived with `clap`,
//! - an `execute` function taking the args and the shared [`Context`].
//!
//! Commands are thin: they load an [`Engine`], call into the `tb` library
//! and render the result.

pub mod completions;
pub mod down;
pub mod list;
pub mod registry;
pub mod up;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use tb::compose::DockerCompose;
use tb::config::{self, Config};
use tb::defaults::COMPOSE_FILENAME;
use tb::engine::{Engine, EngineOptions};
use tb::error::ResourceKind;
use tb::git::SystemGit;
use tb::output::OutputConfig;
use tb::parallel::BatchOptions;
use tb::registry::{read_registries, sync, ReadOptions, Registry};
use tb::suggestions;

/// Settings shared by every command, resolved from global flags.
#[derive(Debug, Clone)]
pub struct Context {
    pub out: OutputConfig,
    pub root: PathBuf,
    pub rc_path: PathBuf,
    pub offline: bool,
    pub batch: BatchOptions,
}

impl Context {
    pub fn config(&self) -> Result<Config> {
        config::from_file(&self.rc_path)
            .with_context(|| format!("failed to read {}", self.rc_path.display()))
    }

    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            root: self.root.clone(),
        }
    }

    /// Read the rc file, sync registries unless offline, and load everything.
    pub fn load_engine(&self) -> Result<Engine> {
        let config = self.config()?;
        if config.registries.is_empty() {
            return Err(suggestions::no_registries());
        }

        let registries: Vec<Registry> = config
            .registries
            .iter()
            .map(|r| Registry::from_config(r, &self.root))
            .collect();

        let git = Arc::new(SystemGit);
        if self.offline {
            log::debug!("offline, not syncing registries");
        } else {
            sync(&registries, git.clone(), &self.batch)
                .map_err(|e| suggestions::for_error(e, |_| Vec::new()))?;
        }

        let loaded = read_registries(&registries, &self.read_options())?;
        let options = EngineOptions {
            root: self.root.clone(),
            git,
            compose: Arc::new(DockerCompose::new(self.root.join(COMPOSE_FILENAME))),
            batch: self.batch,
        };
        Engine::new(loaded, &config, options)
            .with_context(|| format!("failed to apply {}", self.rc_path.display()))
    }
}

/// Known full names of `kind`, for "did you mean" hints.
pub fn candidates(engine: &Engine, kind: ResourceKind) -> Vec<String> {
    match kind {
        ResourceKind::Service => engine.services().names().collect(),
        ResourceKind::Playlist => {
            let mut names = engine.playlists().names();
            names.extend(engine.playlists().custom_names());
            names
        }
        ResourceKind::App => engine
            .ios_apps()
            .names()
            .chain(engine.desktop_apps().names())
            .collect(),
    }
}
