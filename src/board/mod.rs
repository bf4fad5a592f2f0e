mod cell;
mod position;
mod snapshot;

pub use cell::{CellState, DARK_CHAR, DiskColor, EMPTY_CHAR, LIGHT_CHAR};
pub use position::{BreadthFirst, Neighbours, Position};
pub use snapshot::Snapshot;

/// Width and height of the board.
pub const GRID_SIZE: usize = 8;
