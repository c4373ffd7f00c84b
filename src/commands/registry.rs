//! # Registry Command Implementation
//!
//! - `tb registry add <org/repo>` adds a registry to the rc file. It is
//!   cloned the next time a command syncs registries.
//! - `tb registry validate <PATH>` loads a registry directory without any
//!   network access and checks every service, app and playlist in it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use tb::config;
use tb::registry::{self, Registry};
use tb::resource::validate_registry_name;

use super::Context;

/// Manage registries
#[derive(Args, Debug)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommand,
}

#[derive(Subcommand, Debug)]
pub enum RegistryCommand {
    /// Add a registry to the rc file
    Add(AddArgs),

    /// Validate a registry checkout
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Registry to add, as <org>/<repo>
    #[arg(value_name = "ORG/REPO")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing services.yml, playlists.yml and apps.yml
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Registry name to load the directory as [default: last two path components]
    #[arg(long, value_name = "ORG/REPO")]
    pub name: Option<String>,
}

/// Execute the `registry` command.
pub fn execute(args: RegistryArgs, ctx: &Context) -> Result<()> {
    match args.command {
        RegistryCommand::Add(args) => add(args, ctx),
        RegistryCommand::Validate(args) => validate(args, ctx),
    }
}

fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config()?;
    if !config.add_registry(&args.name)? {
        println!(
            "Registry {} is already in {}",
            ctx.out.name(&args.name),
            ctx.rc_path.display()
        );
        return Ok(());
    }

    config::save(&config, &ctx.rc_path)?;
    println!(
        "{}",
        ctx.out.success(&format!(
            "Added registry {} to {}",
            args.name,
            ctx.rc_path.display()
        ))
    );
    Ok(())
}

/// Registry name implied by a checkout path, e.g. `.../TouchBistro/tb-registry`.
fn name_from_path(path: &Path) -> Option<String> {
    let repo = path.file_name()?.to_str()?;
    let org = path.parent()?.file_name()?.to_str()?;
    let name = format!("{}/{}", org, repo);
    validate_registry_name(&name).ok().map(|_| name)
}

fn validate(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let out = &ctx.out;
    if !args.path.is_dir() {
        anyhow::bail!("Registry directory not found: {}", args.path.display());
    }

    let path = args.path.canonicalize()?;
    let name = match args.name {
        Some(name) => name,
        None => name_from_path(&path).unwrap_or_else(|| "local/registry".to_string()),
    };
    let registry = Registry {
        name,
        path,
        local: true,
    };

    println!(
        "{} Validating registry {} at {}",
        out.symbol("🔍", "[SCAN]"),
        out.name(&registry.name),
        registry.path.display()
    );

    let report = registry::validate(&registry, &ctx.read_options())?;
    println!(
        "   {} services, {} playlists, {} apps",
        report.services, report.playlists, report.apps
    );

    if report.is_valid() {
        println!("{}", out.success("Registry is valid"));
        return Ok(());
    }

    for problem in &report.problems {
        println!("{}", out.failure(&problem.to_string()));
    }
    anyhow::bail!(
        "Registry {} has {} problems",
        registry.name,
        report.problems.len()
    )
}
