//! Cross-adapter collection: bounded fan-out with an optional deadline.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;

use crate::network::ProviderError;

use super::{Inspector, ReportRow, assemble};

/// Which adapters an inventory run covers.
///
/// The default of "all adapters when none are named" is resolved by the
/// CLI layer into an explicit variant; the core never guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every adapter the enumerator reports.
    All,
    /// Exactly the named adapters, resolved individually.
    Named(Vec<String>),
}

/// Default bound on concurrently inspected adapters.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Tuning for a gather run.
#[derive(Debug, Clone)]
pub struct GatherOptions {
    /// Maximum number of adapters inspected concurrently.
    pub concurrency: NonZeroUsize,
    /// Overall time budget for the whole inventory; in-flight adapters are
    /// cancelled on expiry and the partial result is returned.
    pub deadline: Option<Duration>,
}

impl Default for GatherOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            deadline: None,
        }
    }
}

/// Error type for failures that abort a whole inventory run.
///
/// Per-adapter failures never surface here; they degrade to rows or
/// diagnostics inside the inspector.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The enumerator itself failed while listing all adapters.
    #[error("Failed to enumerate network adapters: {0}")]
    Enumeration(#[source] ProviderError),
}

/// A unit of per-adapter work for the fan-out.
enum Job {
    /// Resolve by name, then inspect.
    Name(String),
    /// Already resolved during enumeration.
    Resolved(crate::network::AdapterInfo),
}

/// Collects report rows for the selected adapters.
///
/// Adapters are inspected through a semaphore-bounded `JoinSet` of blocking
/// tasks; a concurrency of 1 degenerates to sequential processing. Results
/// are sorted after collection, so the fan-out is invisible in the output
/// ordering.
///
/// # Errors
///
/// Returns [`InventoryError::Enumeration`] only when `selection` is
/// [`Selection::All`] and the enumerator fails outright - with no adapter
/// list there is nothing to degrade to.
pub async fn gather(
    inspector: Arc<Inspector>,
    selection: Selection,
    options: &GatherOptions,
) -> Result<Vec<ReportRow>, InventoryError> {
    let jobs = match selection {
        Selection::Named(names) => names.into_iter().map(Job::Name).collect(),
        Selection::All => {
            let adapters = inspector
                .enumerator()
                .list_all()
                .map_err(InventoryError::Enumeration)?;
            adapters.into_iter().map(Job::Resolved).collect::<Vec<_>>()
        }
    };

    let deadline = options.deadline.map(|budget| Instant::now() + budget);
    let semaphore = Arc::new(Semaphore::new(options.concurrency.get()));
    let mut tasks = JoinSet::new();

    for job in jobs {
        let inspector = Arc::clone(&inspector);
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            // The semaphore is never closed, so acquisition only fails if
            // the whole set is being torn down.
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return Vec::new();
            };
            let handle = tokio::task::spawn_blocking(move || match job {
                Job::Name(name) => inspector.inspect(&name),
                Job::Resolved(adapter) => inspector.inspect_resolved(&adapter),
            });
            handle.await.unwrap_or_default()
        });
    }

    let groups = drain(&mut tasks, deadline).await;
    Ok(assemble(groups))
}

/// Awaits all inspection tasks, cancelling the remainder on deadline expiry.
async fn drain(tasks: &mut JoinSet<Vec<ReportRow>>, deadline: Option<Instant>) -> Vec<Vec<ReportRow>> {
    let mut groups = Vec::new();

    loop {
        let joined = match deadline {
            Some(at) => match tokio::time::timeout_at(at, tasks.join_next()).await {
                Ok(joined) => joined,
                Err(_elapsed) => {
                    tracing::warn!(
                        pending = tasks.len(),
                        "inventory deadline exceeded; returning partial results"
                    );
                    tasks.abort_all();
                    break;
                }
            },
            None => tasks.join_next().await,
        };

        match joined {
            Some(Ok(rows)) => groups.push(rows),
            Some(Err(error)) => {
                if error.is_panic() {
                    tracing::warn!(%error, "adapter inspection task panicked");
                }
            }
            None => break,
        }
    }

    groups
}

#[cfg(test)]
#[path = "gather_tests.rs"]
mod tests;
