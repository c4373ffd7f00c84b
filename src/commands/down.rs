//! # Down Command Implementation
//!
//! Stops and removes containers. With no service names, every container in
//! the compose project is stopped.

use anyhow::Result;
use clap::Args;

use tb::suggestions;

use super::{candidates, Context};

/// Stop and remove service containers
#[derive(Args, Debug)]
pub struct DownArgs {
    /// Services to stop; all services when omitted
    #[arg(value_name = "SERVICES")]
    pub services: Vec<String>,
}

/// Execute the `down` command.
pub fn execute(args: DownArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.load_engine()?;
    let services = engine
        .resolve_services(&args.services, None)
        .map_err(|e| suggestions::for_error(e, |kind| candidates(&engine, kind)))?;

    engine.down(&services)?;

    let message = if services.is_empty() {
        "Stopped all services".to_string()
    } else {
        format!("Stopped {} services", services.len())
    };
    println!("{}", ctx.out.success(&message));
    Ok(())
}
