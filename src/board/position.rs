//! Grid coordinates with Moore-neighbourhood adjacency.

use super::GRID_SIZE;
use crate::error::{MalformedSnapshotError, OutOfRangeError, SyncError};
use std::collections::{HashSet, VecDeque};
use tracing::instrument;

/// Row/column offsets of the eight surrounding cells, row-major.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell coordinate on the board, always inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, validating both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if either coordinate is `>= GRID_SIZE`.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfRangeError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(OutOfRangeError::new(row, col));
        }
        Ok(Self { row, col })
    }

    /// Offsets this position, returning `None` when the result leaves the grid.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Self { row, col })
    }

    /// Row index (0-based, top to bottom).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-based, left to right).
    pub fn col(self) -> usize {
        self.col
    }

    /// The in-bounds cells surrounding this one (at most 8).
    ///
    /// The iterator is lazy and can be restarted by cloning it.
    pub fn neighbours(self) -> Neighbours {
        Neighbours {
            center: self,
            next: 0,
        }
    }

    /// Chebyshev distance: `max(|Δrow|, |Δcol|)`.
    pub fn distance(self, other: Position) -> u32 {
        let rows = self.row.abs_diff(other.row);
        let cols = self.col.abs_diff(other.col);
        rows.max(cols) as u32
    }

    /// Stable `"row,col"` form used as a cell identifier and on the wire.
    pub fn key(self) -> String {
        format!("{},{}", self.row, self.col)
    }

    /// Parses a `"row,col"` key.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MalformedSnapshot`] if the key is not two
    /// comma-separated integers, or [`SyncError::OutOfRange`] if it names a
    /// cell outside the grid.
    #[instrument]
    pub fn from_key(key: &str) -> Result<Self, SyncError> {
        let (row, col) = key
            .trim()
            .split_once(',')
            .ok_or_else(|| MalformedSnapshotError::new(format!("Invalid position key: '{}'", key)))?;

        let parse = |s: &str| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| MalformedSnapshotError::new(format!("Invalid position key: '{}'", key)))
        };

        Ok(Self::new(parse(row)?, parse(col)?)?)
    }

    /// Every position on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position { row, col }))
    }

    /// Visits every cell breadth-first, spreading outward from `origin`.
    pub fn breadth_first(origin: Position) -> BreadthFirst {
        let mut visited = HashSet::new();
        visited.insert(origin);
        BreadthFirst {
            queue: VecDeque::from([origin]),
            visited,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl std::str::FromStr for Position {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Iterator over the neighbours of a position.
#[derive(Debug, Clone)]
pub struct Neighbours {
    center: Position,
    next: usize,
}

impl Iterator for Neighbours {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(d_row, d_col)) = NEIGHBOUR_OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(position) = self.center.offset(d_row, d_col) {
                return Some(position);
            }
        }
        None
    }
}

/// Breadth-first traversal of the whole grid from an origin cell.
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    queue: VecDeque<Position>,
    visited: HashSet<Position>,
}

impl Iterator for BreadthFirst {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.queue.pop_front()?;
        for neighbour in position.neighbours() {
            if self.visited.insert(neighbour) {
                self.queue.push_back(neighbour);
            }
        }
        Some(position)
    }
}
