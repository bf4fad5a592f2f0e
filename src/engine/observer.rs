//! Lifecycle notifications for presentation collaborators.
//!
//! Any number of observers may subscribe. Delivery order between observers
//! is unspecified and carries no game-logic meaning.

use crate::board::{Position, Snapshot};
use crate::error::SyncError;
use crate::player::{Outcome, Player};
use tokio::sync::mpsc;
use tracing::debug;

/// Receives engine lifecycle notifications. Every method defaults to a no-op.
pub trait SessionObserver: Send + Sync {
    /// The bot started deciding.
    fn thinking(&self) {}

    /// The bot's choice is known, before the board changes. `None` is a pass.
    fn decided(&self, _choice: Option<Position>) {}

    /// `player` had no legal move and control passed to the opponent.
    fn passed(&self, _player: Player) {}

    /// Input is open for the human on these cells.
    fn awaiting_move(&self, _eligible: &[Position]) {}

    /// A move finished animating; the grid now shows `snapshot`.
    fn board_settled(&self, _snapshot: &Snapshot) {}

    /// The game ended.
    fn game_over(&self, _outcome: Outcome) {}

    /// The in-flight turn failed; the session is stalled.
    fn failed(&self, _error: &SyncError) {}
}

/// Messages sent from the engine to a UI task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Bot is thinking.
    Thinking,
    /// Bot chose a cell, or passed.
    Decided(Option<Position>),
    /// A player passed.
    Passed(Player),
    /// Human may move on these cells.
    AwaitingMove(Vec<Position>),
    /// Board settled after a move.
    BoardSettled(Snapshot),
    /// Game ended.
    GameOver(Outcome),
    /// Turn failed.
    Failed(String),
}

/// Forwards notifications as [`SessionEvent`]s over a channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    event_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelObserver {
    /// Creates an observer and the receiving end of its events.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (Self { event_tx }, event_rx)
    }

    fn send(&self, event: SessionEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Session event receiver dropped");
        }
    }
}

impl SessionObserver for ChannelObserver {
    fn thinking(&self) {
        self.send(SessionEvent::Thinking);
    }

    fn decided(&self, choice: Option<Position>) {
        self.send(SessionEvent::Decided(choice));
    }

    fn passed(&self, player: Player) {
        self.send(SessionEvent::Passed(player));
    }

    fn awaiting_move(&self, eligible: &[Position]) {
        self.send(SessionEvent::AwaitingMove(eligible.to_vec()));
    }

    fn board_settled(&self, snapshot: &Snapshot) {
        self.send(SessionEvent::BoardSettled(*snapshot));
    }

    fn game_over(&self, outcome: Outcome) {
        self.send(SessionEvent::GameOver(outcome));
    }

    fn failed(&self, error: &SyncError) {
        self.send(SessionEvent::Failed(error.to_string()));
    }
}
