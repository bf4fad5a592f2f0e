//! Full-board snapshots and their canonical text form.
//!
//! The canonical form is one line per row, one character per column
//! (`D`, `L` or `E`), rows joined by `\n` with no trailing separator. It is
//! both the wire format exchanged with the decision service and the value
//! compared when diffing boards.

use super::{CellState, DiskColor, GRID_SIZE, Position};
use crate::error::MalformedSnapshotError;
use tracing::{debug, instrument};

/// An N×N grid of cell states at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Snapshot {
    /// A board with no disks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard Othello setup: two light disks on the main diagonal of
    /// the centre square, two dark disks on the anti-diagonal.
    pub fn standard_opening() -> Self {
        let mut snapshot = Self::empty();
        let low = GRID_SIZE / 2 - 1;
        let high = GRID_SIZE / 2;
        snapshot.cells[low][low] = CellState::Occupied(DiskColor::Light);
        snapshot.cells[low][high] = CellState::Occupied(DiskColor::Dark);
        snapshot.cells[high][low] = CellState::Occupied(DiskColor::Dark);
        snapshot.cells[high][high] = CellState::Occupied(DiskColor::Light);
        snapshot
    }

    /// State of the cell at `position`.
    pub fn get(&self, position: Position) -> CellState {
        self.cells[position.row()][position.col()]
    }

    /// Overwrites the cell at `position`.
    pub fn set(&mut self, position: Position, state: CellState) {
        self.cells[position.row()][position.col()] = state;
    }

    /// Builder-style [`Snapshot::set`].
    pub fn with(mut self, position: Position, state: CellState) -> Self {
        self.set(position, state);
        self
    }

    /// Number of disks of the given color.
    pub fn count(&self, color: DiskColor) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.color() == Some(color))
            .count()
    }

    /// Parses the canonical text form.
    ///
    /// Trailing whitespace is ignored and `\r\n` line breaks are accepted.
    /// Any character other than `D`/`L` decodes as an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSnapshotError`] if the text does not have exactly
    /// `GRID_SIZE` rows of `GRID_SIZE` characters each.
    #[instrument(skip(text), fields(len = text.len()))]
    pub fn parse(text: &str) -> Result<Self, MalformedSnapshotError> {
        let rows: Vec<&str> = text.trim_end().lines().collect();
        if rows.len() != GRID_SIZE {
            return Err(MalformedSnapshotError::new(format!(
                "expected {} rows, got {}",
                GRID_SIZE,
                rows.len()
            )));
        }

        let mut snapshot = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let line = line.trim_end_matches('\r');
            let width = line.chars().count();
            if width != GRID_SIZE {
                return Err(MalformedSnapshotError::new(format!(
                    "row {} has {} columns, expected {}",
                    row, width, GRID_SIZE
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                snapshot.cells[row][col] = CellState::from_char(ch);
            }
        }

        debug!(
            dark = snapshot.count(DiskColor::Dark),
            light = snapshot.count(DiskColor::Light),
            "Parsed snapshot"
        );
        Ok(snapshot)
    }

    /// Canonical text form; the inverse of [`Snapshot::parse`].
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Snapshot {
    type Err = MalformedSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
