//! The two sides of a session and how a game can end.

use crate::board::DiskColor;
use crate::error::MalformedSnapshotError;
use tracing::instrument;

/// Wire tag for the human player.
pub const HUMAN_CHAR: char = 'H';
/// Wire tag for the bot.
pub const BOT_CHAR: char = 'B';

/// A participant in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Player {
    /// The local player, always dark.
    Human,
    /// The remote decision service, always light.
    Bot,
}

impl Player {
    /// Parses a wire tag.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSnapshotError`] for anything but `H`/`B`.
    #[instrument]
    pub fn parse(ch: char) -> Result<Self, MalformedSnapshotError> {
        match ch {
            HUMAN_CHAR => Ok(Self::Human),
            BOT_CHAR => Ok(Self::Bot),
            _ => Err(MalformedSnapshotError::new(format!(
                "Invalid character to parse into a player: {}",
                ch
            ))),
        }
    }

    /// Wire tag for this player.
    pub fn to_char(self) -> char {
        match self {
            Self::Human => HUMAN_CHAR,
            Self::Bot => BOT_CHAR,
        }
    }

    /// The disk color this player places; fixed for the whole session.
    pub fn disk(self) -> DiskColor {
        match self {
            Self::Human => DiskColor::Dark,
            Self::Bot => DiskColor::Light,
        }
    }

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Bot,
            Self::Bot => Self::Human,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// One player has more disks.
    Winner(Player),
    /// Equal disk counts.
    Draw,
}

impl Outcome {
    /// Decodes the service's winner field: a player tag, or empty for a draw.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSnapshotError`] if the field is neither empty nor a
    /// single player tag.
    #[instrument]
    pub fn from_winner_field(field: Option<&str>) -> Result<Self, MalformedSnapshotError> {
        let field = field.map(str::trim).unwrap_or_default();
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::Draw),
            (Some(ch), None) => Player::parse(ch).map(Self::Winner),
            _ => Err(MalformedSnapshotError::new(format!(
                "Invalid winner field: '{}'",
                field
            ))),
        }
    }

    /// The winning player, or `None` for a draw.
    pub fn winner(self) -> Option<Player> {
        match self {
            Self::Winner(player) => Some(player),
            Self::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(Player::Human) => write!(f, "human wins"),
            Self::Winner(Player::Bot) => write!(f, "bot wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
