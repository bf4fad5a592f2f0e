//! Application state and logic.

use desdemona::{DiskColor, Outcome, Player, Position, SessionEvent, Snapshot};
use tracing::debug;

/// Main application state.
pub struct App {
    cursor: Position,
    status_message: String,
    dark: usize,
    light: usize,
    finished: bool,
}

impl App {
    /// Creates a new application with the cursor at `cursor`.
    pub fn new(cursor: Position) -> Self {
        Self {
            cursor,
            status_message: "Connecting to the decision service...".to_string(),
            dark: 0,
            light: 0,
            finished: false,
        }
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Disk counts as of the last settled board, dark first.
    pub fn score(&self) -> (usize, usize) {
        (self.dark, self.light)
    }

    /// Whether the session ended, by game over or failure.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Handles a session event from the engine.
    pub fn handle_event(&mut self, event: SessionEvent) {
        debug!(?event, "Handling session event");

        match event {
            SessionEvent::Thinking => {
                self.status_message = "Bot is thinking...".to_string();
            }
            SessionEvent::Decided(Some(position)) => {
                self.status_message = format!("Bot played {}", position);
            }
            SessionEvent::Decided(None) => {
                self.status_message = "Bot has no move".to_string();
            }
            SessionEvent::Passed(Player::Human) => {
                self.status_message = "You have no move; the bot plays again".to_string();
            }
            SessionEvent::Passed(Player::Bot) => {
                self.status_message = "Bot passes; your turn again".to_string();
            }
            SessionEvent::AwaitingMove(eligible) => {
                self.status_message = format!(
                    "Your move ({} options). Arrows move, Enter plays, 'q' quits.",
                    eligible.len()
                );
            }
            SessionEvent::BoardSettled(snapshot) => self.update_score(&snapshot),
            SessionEvent::GameOver(outcome) => {
                self.finished = true;
                self.status_message = match outcome {
                    Outcome::Winner(Player::Human) => "You win! Press 'q' to quit.".to_string(),
                    Outcome::Winner(Player::Bot) => "Bot wins! Press 'q' to quit.".to_string(),
                    Outcome::Draw => "Game ended in a draw! Press 'q' to quit.".to_string(),
                };
            }
            SessionEvent::Failed(message) => {
                self.finished = true;
                self.status_message = format!("Session stalled: {}. Press 'q' to quit.", message);
            }
        }
    }

    fn update_score(&mut self, snapshot: &Snapshot) {
        self.dark = snapshot.count(DiskColor::Dark);
        self.light = snapshot.count(DiskColor::Light);
    }
}
