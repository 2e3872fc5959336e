//! Import runner trait definition.

use crate::core::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Runs custom import logic.
///
/// `run` is called when the user starts an import plan. The returned future
/// represents the executing automation and must not complete until the user
/// stops the plan, which cancels `cancellation`. After cancellation the future
/// is expected to complete eventually, but the current import activity should
/// be finished first.
///
/// Implementations must not block the executor. Blocking work belongs in
/// `tokio::task::spawn_blocking`.
#[async_trait]
pub trait ImportRunner: Send {
    /// Execute the import automation until `cancellation` is cancelled.
    async fn run(&mut self, cancellation: CancellationToken) -> Result<()>;

    /// Release resources after `run` has completed.
    async fn dispose(&mut self) -> Result<()> {
        Ok(())
    }
}
