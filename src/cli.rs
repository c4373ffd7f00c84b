//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tb::config;
use tb::defaults::{default_rc_path, default_tb_root, BATCH_TIMEOUT};
use tb::output::{ColorChoice, OutputConfig};
use tb::parallel::BatchOptions;

use crate::commands::{self, Context};

const DEFAULT_LOG_LEVEL: &str = "info";

/// tb - Run a local development environment from service registries
#[derive(Parser, Debug)]
#[command(name = "tb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Do not clone or pull registries before loading them
    #[arg(long, global = true)]
    offline: bool,

    /// Maximum number of parallel git and docker operations
    #[arg(long, global = true, value_name = "N", env = "TB_CONCURRENCY")]
    concurrency: Option<usize>,

    /// Seconds to wait for one batch of parallel operations
    #[arg(long, global = true, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Root directory for registries, repos and the compose file [default: ~/.tb]
    #[arg(long, global = true, value_name = "DIR", env = "TB_HOME")]
    tb_home: Option<PathBuf>,

    /// Path to the rc file [default: ~/.tbrc.yml]
    #[arg(long, global = true, value_name = "FILE", env = "TB_RC")]
    rc: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List services, playlists and apps from all registries
    List(commands::list::ListArgs),

    /// Start services and playlists
    Up(commands::up::UpArgs),

    /// Stop and remove service containers
    Down(commands::down::DownArgs),

    /// Manage registries
    Registry(commands::registry::RegistryArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let rc_path = self.rc.clone().unwrap_or_else(default_rc_path);
        self.init_logging(&rc_path);

        let mut batch = BatchOptions::default();
        if let Some(concurrency) = self.concurrency {
            batch.concurrency = concurrency.max(1);
        }
        batch.timeout = self.timeout.map_or(BATCH_TIMEOUT, Duration::from_secs);

        let ctx = Context {
            out: OutputConfig::new(self.color),
            root: self.tb_home.clone().unwrap_or_else(default_tb_root),
            rc_path,
            offline: self.offline,
            batch,
        };

        match self.command {
            Commands::List(args) => commands::list::execute(args, &ctx),
            Commands::Up(args) => commands::up::execute(args, &ctx),
            Commands::Down(args) => commands::down::execute(args, &ctx),
            Commands::Registry(args) => commands::registry::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }

    /// `debug: true` in the rc file raises the default level to debug.
    fn init_logging(&self, rc_path: &std::path::Path) {
        let mut level = self.log_level.as_str();
        if level == DEFAULT_LOG_LEVEL && config::from_file(rc_path).is_ok_and(|c| c.debug) {
            level = "debug";
        }

        let env = env_logger::Env::default().default_filter_or(level);
        // Tests may run several CLIs in one process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_target(false)
            .try_init();
    }
}
