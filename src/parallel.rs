//! # Parallel Batches
//!
//! The engine runs independent pieces of work (cloning repos, pulling images,
//! running pre-run steps) as batches. A batch:
//!
//! - runs on its own `rayon` pool limited to `concurrency` threads,
//! - never stops early: every unit runs and every failure is collected,
//! - is abandoned with `Error::Timeout` if it has not finished by `timeout`.
//!
//! Work items and the closure are moved onto the pool, so they must be
//! `'static`. Callers clone what they need out of the collections.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rayon::prelude::*;

use crate::defaults::{default_concurrency, BATCH_TIMEOUT};
use crate::error::{Error, Result};

/// Limits applied to a parallel batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Maximum number of units running at once.
    pub concurrency: usize,
    /// Deadline for the whole batch.
    pub timeout: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout: BATCH_TIMEOUT,
        }
    }
}

/// Run `f` on every item in parallel and wait for all of them.
///
/// `operation` describes the batch in errors, e.g. `"pulling images"`.
/// A single failure is returned unchanged; several are combined into
/// `Error::Batch`.
pub fn for_each<T, F>(operation: &str, items: Vec<T>, options: &BatchOptions, f: F) -> Result<()>
where
    T: Send + 'static,
    F: Fn(T) -> Result<()> + Send + Sync + 'static,
{
    if items.is_empty() {
        return Ok(());
    }

    let count = items.len();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.concurrency.max(1))
        .build()
        .map_err(|e| Error::Internal {
            message: format!("failed to start worker pool: {}", e),
        })?;

    log::debug!(
        "{}: {} units on {} workers",
        operation,
        count,
        options.concurrency
    );

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let errors: Vec<Error> = pool.install(|| {
            items
                .into_par_iter()
                .filter_map(|item| f(item).err())
                .collect()
        });
        // The receiver is gone if the batch already timed out
        let _ = tx.send(errors);
    });

    let mut errors = match rx.recv_timeout(options.timeout) {
        Ok(errors) => errors,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            log::warn!("{} did not finish within {:?}", operation, options.timeout);
            return Err(Error::Timeout {
                operation: operation.to_string(),
                seconds: options.timeout.as_secs(),
            });
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            return Err(Error::Internal {
                message: format!("worker for {} exited without reporting", operation),
            });
        }
    };

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(Error::Batch {
            operation: operation.to_string(),
            errors,
        }),
    }
}
