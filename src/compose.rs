//! # Docker Compose Operations
//!
//! Containers are managed with `docker compose` against the compose file in
//! the tb root. Service arguments are compose service names, i.e.
//! [`Service::docker_name`](crate::service::Service::docker_name).
//!
//! Like Git, compose access is behind a trait so the engine can be tested
//! with a recording double.

use std::path::PathBuf;
use std::process::Command;

use crate::defaults::COMPOSE_PROJECT;
use crate::error::{Error, Result};

/// Trait for docker compose operations - allows mocking in tests
pub trait ComposeOperations: Send + Sync {
    /// Pull the image of one service.
    fn pull(&self, service: &str) -> Result<()>;

    /// Build the image of one service.
    fn build(&self, service: &str) -> Result<()>;

    /// Run a one-off command in a fresh container of `service`.
    fn run(&self, service: &str, command: &str) -> Result<()>;

    /// Start containers in the background.
    fn up(&self, services: &[String]) -> Result<()>;

    /// Stop containers. An empty list stops everything.
    fn stop(&self, services: &[String]) -> Result<()>;

    /// Remove stopped containers. An empty list removes everything.
    fn rm(&self, services: &[String]) -> Result<()>;
}

/// `ComposeOperations` backed by the `docker compose` CLI.
#[derive(Debug, Clone)]
pub struct DockerCompose {
    compose_file: PathBuf,
}

impl DockerCompose {
    pub fn new(compose_file: PathBuf) -> Self {
        Self { compose_file }
    }

    fn args(&self, subcommand: &[&str], services: &[String]) -> Vec<String> {
        let mut args = vec![
            "compose".to_string(),
            "--file".to_string(),
            self.compose_file.display().to_string(),
            "--project-name".to_string(),
            COMPOSE_PROJECT.to_string(),
        ];
        args.extend(subcommand.iter().map(|s| s.to_string()));
        args.extend(services.iter().cloned());
        args
    }

    fn exec(&self, subcommand: &[&str], services: &[String]) -> Result<()> {
        let args = self.args(subcommand, services);
        let command = args[5..].join(" ");
        log::debug!("docker {}", args.join(" "));

        let output = Command::new("docker")
            .args(&args)
            .output()
            .map_err(|e| Error::Compose {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::Compose {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl ComposeOperations for DockerCompose {
    fn pull(&self, service: &str) -> Result<()> {
        self.exec(&["pull"], &[service.to_string()])
    }

    fn build(&self, service: &str) -> Result<()> {
        self.exec(&["build"], &[service.to_string()])
    }

    fn run(&self, service: &str, command: &str) -> Result<()> {
        self.exec(
            &["run", "--rm", service],
            &["sh".to_string(), "-c".to_string(), command.to_string()],
        )
    }

    fn up(&self, services: &[String]) -> Result<()> {
        self.exec(&["up", "--detach"], services)
    }

    fn stop(&self, services: &[String]) -> Result<()> {
        self.exec(&["stop"], services)
    }

    fn rm(&self, services: &[String]) -> Result<()> {
        self.exec(&["rm", "--force"], services)
    }
}
