//! States of the turn-flow machine.

use crate::board::{Position, Snapshot};
use crate::player::{Outcome, Player};
use derive_new::new;
use std::time::Duration;

/// A resolved move waiting to be shown on the grid.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PendingAnimation {
    /// Who made the move; the opponent acts next.
    pub mover: Player,
    /// Board to reconcile the grid to.
    pub target: Snapshot,
    /// Cell just played; `None` when the bot passed.
    pub origin: Option<Position>,
    /// Present when the resolution ended the game.
    pub outcome: Option<Outcome>,
}

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Phase {
    /// Fetching and painting the initial board.
    Initializing,
    /// Asking the service which cells the human may play.
    AwaitingActions,
    /// Idle until the human submits an eligible cell.
    AwaitingHumanMove,
    /// Waiting for the service to apply the human's move.
    ResolvingMove(Position),
    /// About to ask the bot for a move.
    ThinkingBot,
    /// Waiting for the bot's decision.
    ResolvingBotMove,
    /// Applying a resolved board to the grid.
    Animating(PendingAnimation),
    /// Terminal: the game ended.
    GameOver(Outcome),
    /// Terminal: a turn failed and the session is stalled.
    Failed,
}

impl Phase {
    /// Variant name, for logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether no further transitions happen from here.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver(_) | Self::Failed)
    }
}

/// Knobs the engine needs from the session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct EngineSettings {
    /// Difficulty passed to the bot's decide call.
    pub difficulty: u32,
    /// Pause before each flip wave farther out than the previous one.
    pub wave_pause: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        crate::config::SessionConfig::default().engine_settings()
    }
}
