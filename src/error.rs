//! # Error Handling
//!
//! This module defines the centralized error type for `tb`. It uses the
//! `thiserror` library to build one `Error` enum covering every failure the
//! library can report, from name resolution to spawning `docker compose`.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Resolution failures (`InvalidName`,
//!   `NotFound`, `MultipleResources`, `CircularDependency`, `Internal`) are
//!   the ones callers usually branch on; the `is_*` predicates look through
//!   the `Playlist` wrapper so a kind survives being wrapped with context.
//!
//! - **`ResourceKind`**: Which collection a name was looked up in. It is only
//!   used to render messages such as `playlist core not found`.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The library never prints or exits on error. Turning an `Error` into a hint
//! for the user is the job of the CLI (see `suggestions`).

use std::fmt;

use thiserror::Error;

/// The kind of resource a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Service,
    Playlist,
    App,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Service => "service",
            ResourceKind::Playlist => "playlist",
            ResourceKind::App => "app",
        };
        f.write_str(s)
    }
}

/// Main error type for tb operations
#[derive(Error, Debug)]
pub enum Error {
    /// A string did not match the `<org>/<repo>/<item>` or `<item>` pattern.
    #[error("invalid name: {name:?}")]
    InvalidName { name: String },

    /// A short or full name did not resolve to any stored resource.
    #[error("{kind} {name} not found")]
    NotFound { kind: ResourceKind, name: String },

    /// A short name is defined by more than one registry.
    #[error("multiple {kind}s named {name} found in registries: {}", registries.join(", "))]
    MultipleResources {
        kind: ResourceKind,
        name: String,
        registries: Vec<String>,
    },

    /// A playlist `extends` chain revisits a playlist already on the path.
    #[error("circular dependency: playlist {playlist} extends {extends}, which is already being resolved")]
    CircularDependency { playlist: String, extends: String },

    /// A resource could not be stored because its full name is malformed.
    ///
    /// This is a programming error in the caller, not bad user input.
    #[error("internal error: {message}")]
    Internal { message: String },

    /// A resource was stored before being assigned to a registry.
    #[error("internal error: {kind} {name} has no registry")]
    MissingRegistry { kind: ResourceKind, name: String },

    /// Context wrapper added at each step of playlist resolution.
    #[error("failed to resolve playlist {name}{}: {source}", extended_by.as_ref().map(|p| format!(" (extended by {})", p)).unwrap_or_default())]
    Playlist {
        name: String,
        extended_by: Option<String>,
        #[source]
        source: Box<Error>,
    },

    /// An error occurred while parsing the rc file or a registry file.
    #[error("configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A registry could not be read.
    #[error("registry {registry}: {message}")]
    Registry { registry: String, message: String },

    /// A loaded resource failed validation.
    #[error("invalid {resource}: {message}")]
    Validation { resource: String, message: String },

    /// Variable expansion failed.
    #[error("variable expansion error: {message}{}", variable.as_ref().map(|v| format!(" (variable: {})", v)).unwrap_or_default())]
    Variable {
        message: String,
        /// The variable that caused the error, if applicable
        variable: Option<String>,
    },

    /// An error occurred while cloning a Git repository.
    #[error("git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// An error occurred while executing a Git command.
    #[error("git command failed in {dir}: {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// `docker compose` could not be spawned or exited unsuccessfully.
    #[error("docker compose {command} failed: {stderr}")]
    Compose { command: String, stderr: String },

    /// A parallel batch did not finish within its deadline.
    #[error("timed out after {seconds}s while {operation}")]
    Timeout { operation: String, seconds: u64 },

    /// Several units of a parallel batch failed.
    #[error("{} failures while {operation}:{}", errors.len(), errors.iter().map(|e| format!("\n  - {}", e)).collect::<String>())]
    Batch { operation: String, errors: Vec<Error> },

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("lock poisoned: {context}")]
    LockPoisoned { context: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Returns the innermost error, skipping `Playlist` context wrappers.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Error::Playlist { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn is_invalid_name(&self) -> bool {
        matches!(self.root(), Error::InvalidName { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Error::NotFound { .. })
    }

    pub fn is_multiple_resources(&self) -> bool {
        matches!(self.root(), Error::MultipleResources { .. })
    }

    pub fn is_circular_dependency(&self) -> bool {
        matches!(self.root(), Error::CircularDependency { .. })
    }

    /// True for both `Internal` and `MissingRegistry`.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.root(),
            Error::Internal { .. } | Error::MissingRegistry { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
