//! # tb
//!
//! This library provides the core of `tb`, a tool that runs a local
//! development environment of containerized services described in Git
//! registries. It is used by the `tb` command-line tool but the resolution
//! layer can be used on its own.
//!
//! ## Quick Example
//!
//! ```
//! use tb::collection::Collection;
//! use tb::playlist::{Playlist, PlaylistCollection};
//!
//! let mut playlists = PlaylistCollection::new(Collection::new());
//! playlists
//!     .set(Playlist {
//!         name: "core".to_string(),
//!         registry_name: "TouchBistro/tb-registry".to_string(),
//!         extends: None,
//!         services: vec!["TouchBistro/tb-registry/postgres".to_string()],
//!     })
//!     .unwrap();
//! playlists.set_custom(Playlist {
//!     name: "mine".to_string(),
//!     extends: Some("core".to_string()),
//!     services: vec!["TouchBistro/tb-registry/redis".to_string()],
//!     ..Default::default()
//! });
//!
//! let services = playlists.service_names("mine").unwrap();
//! assert_eq!(
//!     services,
//!     vec!["TouchBistro/tb-registry/postgres", "TouchBistro/tb-registry/redis"]
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Names (`resource`)**: every resource has a short name (`postgres`) and
//!   a full name qualified by its registry (`TouchBistro/tb-registry/postgres`).
//! - **Collections (`collection`)**: resources of one kind from all
//!   registries. A short name resolves only when exactly one registry defines
//!   it.
//! - **Playlists (`playlist`)**: named service lists that can extend each
//!   other. Resolution detects cycles and deduplicates services.
//! - **Registries (`registry`)**: Git repositories holding `services.yml`,
//!   `playlists.yml` and `apps.yml`.
//! - **Engine (`engine`)**: applies the user's rc file on top of the loaded
//!   registries and drives Git and Docker Compose through the `git` and
//!   `compose` traits.
//!
//! ## Execution Flow
//!
//! 1. Read the rc file (`config`).
//! 2. Sync registries with Git unless offline (`registry::sync`).
//! 3. Load every registry into collections (`registry::read_registries`).
//! 4. Build the `Engine`, applying overrides and custom playlists.
//! 5. Resolve names and playlists into services and run the requested flow.

pub mod app;
pub mod collection;
pub mod compose;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod git;
pub mod output;
pub mod parallel;
pub mod playlist;
pub mod registry;
pub mod resource;
pub mod service;
pub mod suggestions;

#[cfg(test)]
mod resource_proptest;
