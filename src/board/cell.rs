//! Disk colors and per-cell content.

/// Character tag for a dark disk.
pub const DARK_CHAR: char = 'D';
/// Character tag for a light disk.
pub const LIGHT_CHAR: char = 'L';
/// Character tag for an empty cell.
pub const EMPTY_CHAR: char = 'E';

/// Color of a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum DiskColor {
    /// Dark disk (the human's color).
    Dark,
    /// Light disk (the bot's color).
    Light,
}

impl DiskColor {
    /// Parses a wire tag, returning `None` for anything but `D`/`L`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            DARK_CHAR => Some(Self::Dark),
            LIGHT_CHAR => Some(Self::Light),
            _ => None,
        }
    }

    /// Wire tag for this color.
    pub fn to_char(self) -> char {
        match self {
            Self::Dark => DARK_CHAR,
            Self::Light => LIGHT_CHAR,
        }
    }

    /// The other color.
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for DiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Content of one cell: empty or holding a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// No disk.
    #[default]
    Empty,
    /// A disk of the given color.
    Occupied(DiskColor),
}

impl CellState {
    /// Parses a wire tag; anything other than `D`/`L` is empty.
    pub fn from_char(ch: char) -> Self {
        DiskColor::from_char(ch).map_or(Self::Empty, Self::Occupied)
    }

    /// Wire tag for this cell.
    pub fn to_char(self) -> char {
        match self {
            Self::Empty => EMPTY_CHAR,
            Self::Occupied(color) => color.to_char(),
        }
    }

    /// The disk color, if any.
    pub fn color(self) -> Option<DiskColor> {
        match self {
            Self::Empty => None,
            Self::Occupied(color) => Some(color),
        }
    }

    /// Whether the cell holds no disk.
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<DiskColor>> for CellState {
    fn from(color: Option<DiskColor>) -> Self {
        color.map_or(Self::Empty, Self::Occupied)
    }
}
