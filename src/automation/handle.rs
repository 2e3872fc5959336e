//! Spawned import runner with cooperative shutdown.
//!
//! [`RunnerHandle`] drives an [`ImportRunner`] the way the host does: `run`
//! executes on the tokio runtime until [`RunnerHandle::stop`] cancels the
//! token, then the runner is disposed. Dropping the handle cancels the token
//! too, and the detached task still disposes the runner.

use crate::automation::runner::ImportRunner;
use crate::core::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

/// Results of `run` and `dispose`.
type RunnerOutcome = (Result<()>, Result<()>);

/// Handle to a running import runner.
pub struct RunnerHandle {
    cancellation: CancellationToken,
    run_finished: Arc<AtomicBool>,
    task: JoinHandle<RunnerOutcome>,
    _cancel_on_drop: DropGuard,
}

impl RunnerHandle {
    /// Spawn `runner` on the current tokio runtime.
    pub fn spawn(mut runner: Box<dyn ImportRunner>) -> Self {
        let cancellation = CancellationToken::new();
        let token = cancellation.clone();
        let run_finished = Arc::new(AtomicBool::new(false));
        let finished = run_finished.clone();

        let task = tokio::spawn(async move {
            debug!("Import runner started");
            let result = runner.run(token.clone()).await;
            finished.store(true, Ordering::SeqCst);
            if let Err(e) = &result {
                warn!(error = %e, "Import runner failed");
            }
            if !token.is_cancelled() {
                warn!("Import runner finished before it was stopped");
            }

            // Dispose only once the owner asked to stop.
            token.cancelled().await;
            let disposed = runner.dispose().await;
            if let Err(e) = &disposed {
                warn!(error = %e, "Import runner dispose failed");
            }
            (result, disposed)
        });

        Self {
            _cancel_on_drop: cancellation.clone().drop_guard(),
            cancellation,
            run_finished,
            task,
        }
    }

    /// Token cancelled when the runner is asked to stop.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Whether `run` has completed.
    pub fn is_finished(&self) -> bool {
        self.run_finished.load(Ordering::SeqCst)
    }

    /// Cancel the runner, wait for `run` to complete and dispose the runner.
    ///
    /// An error from `run` takes precedence over an error from `dispose`.
    pub async fn stop(self) -> Result<()> {
        self.cancellation.cancel();

        let (result, disposed) = self
            .task
            .await
            .map_err(|e| Error::Runner(format!("import runner task failed: {}", e)))?;

        info!("Import runner stopped");
        result.and(disposed)
    }
}
