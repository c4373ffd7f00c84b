//! Default locations and limits.
//!
//! Everything `tb` manages lives under its root directory, `~/.tb` unless
//! `TB_HOME` says otherwise:
//!
//! ```text
//! ~/.tb/
//!   registries/<org>/<repo>/   registry checkouts
//!   repos/<org>/<repo>/        service source checkouts
//!   docker-compose.yml
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the user's rc file in their home directory.
pub const RC_FILENAME: &str = ".tbrc.yml";

/// Name of the compose file inside the tb root.
pub const COMPOSE_FILENAME: &str = "docker-compose.yml";

/// Compose project name, shared by every container tb starts.
pub const COMPOSE_PROJECT: &str = "tb";

/// Deadline for one parallel batch of git or docker work.
pub const BATCH_TIMEOUT: Duration = Duration::from_secs(5 * 60);

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default tb root directory, `~/.tb`.
///
/// Overridden by the `--tb-home` flag or the `TB_HOME` environment variable.
pub fn default_tb_root() -> PathBuf {
    home_dir().join(".tb")
}

/// Returns the default rc file path, `~/.tbrc.yml`.
pub fn default_rc_path() -> PathBuf {
    home_dir().join(RC_FILENAME)
}

/// Number of parallel workers when none is configured.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

pub fn registries_dir(root: &Path) -> PathBuf {
    root.join("registries")
}

pub fn repos_dir(root: &Path) -> PathBuf {
    root.join("repos")
}
