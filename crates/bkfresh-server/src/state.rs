//! Session state: the deal board currently served by the API.

use std::sync::Arc;

use bkfresh_sources::DealBoard;
use tokio::sync::RwLock;

/// Shared handle to the active [`DealBoard`].
///
/// Starts on the sample deals and is replaced wholesale when a resolution
/// run finishes. Readers get a cloned snapshot, so a commit never tears a
/// response in half.
#[derive(Debug, Clone)]
pub struct SessionState {
    board: Arc<RwLock<DealBoard>>,
}

impl SessionState {
    #[must_use]
    pub fn new(board: DealBoard) -> Self {
        Self {
            board: Arc::new(RwLock::new(board)),
        }
    }

    /// Swap in a freshly resolved board.
    pub async fn commit(&self, board: DealBoard) {
        tracing::info!(
            source = %board.source,
            count = board.deals.len(),
            last_updated = board.last_updated.as_deref().unwrap_or("-"),
            "committing deal board"
        );
        *self.board.write().await = board;
    }

    pub async fn snapshot(&self) -> DealBoard {
        self.board.read().await.clone()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DealBoard::fallback())
    }
}
