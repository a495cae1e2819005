//! Executors that run blocking index calls off the async caller's thread.
//!
//! The default async operations of
//! [`AsyncVectorIndex`](crate::AsyncVectorIndex) hand the blocking primitive
//! to an [`Executor`] and await the result. That hand-off is their only
//! suspension point.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::error::{Error, Result};

/// A unit of blocking work.
pub type BlockingTask = Box<dyn FnOnce() + Send + 'static>;

/// Schedules blocking tasks somewhere other than the calling task.
pub trait Executor: Send + Sync {
    /// Submits a task. Returns once the task is scheduled, not once it ran.
    fn execute(&self, task: BlockingTask) -> Result<()>;
}

/// Runs `f` on `executor` and waits for its result without blocking.
///
/// A task that panics or is dropped unrun surfaces as [`Error::Executor`].
pub async fn run_blocking<F, T>(executor: &dyn Executor, f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    executor.execute(Box::new(move || {
        // the receiver may be gone if the caller stopped waiting
        let _ = tx.send(f());
    }))?;
    tracing::trace!("blocking task submitted");

    rx.await
        .map_err(|_| Error::Executor("blocking task did not complete".to_string()))
}

/// Runs tasks on tokio's blocking thread pool.
///
/// Without an explicit handle, the runtime driving the current task is used.
#[derive(Debug, Clone, Default)]
pub struct TokioExecutor {
    handle: Option<Handle>,
}

impl TokioExecutor {
    /// Uses the runtime that is current when a task is submitted.
    pub fn current() -> Self {
        Self::default()
    }

    /// Pins the executor to a specific runtime.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl Executor for TokioExecutor {
    fn execute(&self, task: BlockingTask) -> Result<()> {
        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current()
                .map_err(|e| Error::Executor(format!("no tokio runtime: {}", e)))?,
        };
        // detached; completion is observed through run_blocking's channel
        drop(handle.spawn_blocking(task));
        Ok(())
    }
}

/// Runs each task on a freshly spawned, named OS thread.
#[derive(Debug)]
pub struct ThreadExecutor {
    name_prefix: String,
    spawned: AtomicU64,
}

impl ThreadExecutor {
    pub fn new(name_prefix: impl Into<String>) -> Self {
        Self {
            name_prefix: name_prefix.into(),
            spawned: AtomicU64::new(0),
        }
    }

    /// Number of threads spawned so far.
    pub fn spawned(&self) -> u64 {
        self.spawned.load(Ordering::Relaxed)
    }
}

impl Default for ThreadExecutor {
    fn default() -> Self {
        Self::new("docindex-blocking")
    }
}

impl Executor for ThreadExecutor {
    fn execute(&self, task: BlockingTask) -> Result<()> {
        let n = self.spawned.fetch_add(1, Ordering::Relaxed);
        std::thread::Builder::new()
            .name(format!("{}-{}", self.name_prefix, n))
            .spawn(task)
            .map(drop)
            .map_err(|e| Error::Executor(format!("spawn thread failed: {}", e)))
    }
}
