//! # Up Command Implementation
//!
//! Resolves the requested services and playlist, then hands them to
//! [`Engine::up`](tb::engine::Engine::up): repos are cloned or pulled, images
//! pulled or built, pre-run steps run and containers started.
//!
//! A spinner shows the current step when stderr is an interactive terminal.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use tb::engine::UpOptions;
use tb::suggestions;

use super::{candidates, Context};

/// Start services and playlists
#[derive(Args, Debug)]
pub struct UpArgs {
    /// Services to start, by short or full name
    #[arg(value_name = "SERVICES")]
    pub services: Vec<String>,

    /// Playlist to start; its services come before any listed explicitly
    #[arg(short, long, value_name = "PLAYLIST")]
    pub playlist: Option<String>,

    /// Do not pull source repos that are already cloned
    #[arg(long)]
    pub no_git_pull: bool,

    /// Do not pull images of remote services
    #[arg(long)]
    pub no_remote_pull: bool,

    /// Skip pre-run steps
    #[arg(long)]
    pub skip_prerun: bool,
}

fn spinner(ctx: &Context) -> ProgressBar {
    if !ctx.out.show_progress() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{elapsed}]") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Execute the `up` command.
pub fn execute(args: UpArgs, ctx: &Context) -> Result<()> {
    if args.services.is_empty() && args.playlist.is_none() {
        return Err(suggestions::nothing_to_start());
    }

    let engine = ctx.load_engine()?;
    let services = engine
        .resolve_services(&args.services, args.playlist.as_deref())
        .map_err(|e| suggestions::for_error(e, |kind| candidates(&engine, kind)))?;

    let options = UpOptions {
        git_pull: !args.no_git_pull,
        remote_pull: !args.no_remote_pull,
        pre_run: !args.skip_prerun,
    };

    let bar = spinner(ctx);
    let result = engine.up(&services, &options, |step| {
        log::debug!("{}", step);
        bar.set_message(step.to_string());
    });
    bar.finish_and_clear();
    result.map_err(|e| suggestions::for_error(e, |kind| candidates(&engine, kind)))?;

    println!(
        "{}",
        ctx.out
            .success(&format!("Started {} services", services.len()))
    );
    for service in &services {
        println!("  {}", ctx.out.name(&service.docker_name()));
    }
    Ok(())
}
