//! Contract for the remote decision service.
//!
//! The service is the sole authority on legality, move resolution and the
//! bot's choices. The engine only exchanges snapshots with it.

mod http;

pub use http::HttpDecisionClient;

use crate::board::{Position, Snapshot};
use crate::error::SyncError;
use crate::player::{Outcome, Player};
use derive_new::new;
use std::collections::HashSet;

/// The board after a move was applied, and whether that ended the game.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Resolution {
    /// Resulting board.
    pub snapshot: Snapshot,
    /// Present only when the game is over.
    pub outcome: Option<Outcome>,
}

impl Resolution {
    /// Whether the game ended with this resolution.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The bot's choice and its consequence.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Decision {
    /// Where the bot played; `None` means it passed.
    pub choice: Option<Position>,
    /// Board after the choice.
    pub resolution: Resolution,
}

/// Stateless request/response adapter to the decision service.
///
/// Every call may fail with a transport error; callers treat any failure as
/// fatal for the current turn and never retry.
#[async_trait::async_trait]
pub trait DecisionService: Send + Sync {
    /// The board a new game starts from.
    async fn initial_board(&self) -> Result<Snapshot, SyncError>;

    /// Applies `player`'s move at `position` to `board`.
    async fn result(
        &self,
        board: &Snapshot,
        player: Player,
        position: Position,
    ) -> Result<Resolution, SyncError>;

    /// Legal positions for `player` on `board`.
    async fn actions(&self, board: &Snapshot, player: Player)
    -> Result<HashSet<Position>, SyncError>;

    /// Lets the bot choose a move on `board` at the given difficulty.
    async fn decide(&self, board: &Snapshot, difficulty: u32) -> Result<Decision, SyncError>;
}
