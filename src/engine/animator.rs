//! Flip animation playback, as seen by the engine.

use crate::board::{DiskColor, Position};
use std::time::Duration;
use tracing::{debug, instrument};

/// Plays the flip of one disk.
///
/// The returned future resolving is the "flip finished" report; the engine
/// starts a whole wave concurrently and waits for every flip in it.
#[async_trait::async_trait]
pub trait FlipAnimator: Send + Sync {
    /// Animates the disk at `position` turning over to `to`.
    async fn flip(&self, position: Position, to: DiskColor);
}

/// Completes every flip immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantAnimator;

#[async_trait::async_trait]
impl FlipAnimator for InstantAnimator {
    async fn flip(&self, _position: Position, _to: DiskColor) {}
}

/// Takes a fixed time per flip.
#[derive(Debug, Clone, Copy)]
pub struct PacedAnimator {
    duration: Duration,
}

impl PacedAnimator {
    /// Creates an animator whose flips each last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait::async_trait]
impl FlipAnimator for PacedAnimator {
    #[instrument(skip(self))]
    async fn flip(&self, position: Position, to: DiskColor) {
        tokio::time::sleep(self.duration).await;
        debug!(%position, %to, "Flip finished");
    }
}
