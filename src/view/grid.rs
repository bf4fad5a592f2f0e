//! The live board the player sees.
//!
//! Renderers read [`CellView`]s as plain data; only the session engine
//! commits disks or toggles eligibility. Hover previews live in a separate
//! field so they can never leak into a snapshot.

use super::DiskView;
use crate::board::{CellState, DiskColor, GRID_SIZE, Position, Snapshot};
use crate::error::{GridError, SyncError};
use crate::player::Player;
use derive_getters::Getters;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// A grid view shared between the engine and presentation layers.
pub type SharedGrid = Arc<Mutex<GridView>>;

/// Locks a shared grid, recovering the guard if a holder panicked.
pub fn lock_grid(grid: &SharedGrid) -> MutexGuard<'_, GridView> {
    grid.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Display state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct CellView {
    /// Committed disk, if any.
    disk: Option<DiskView>,
    /// Whether the human may currently play here.
    eligible: bool,
    /// Uncommitted hover preview.
    preview: Option<DiskColor>,
}

impl CellView {
    /// Committed content of this cell, ignoring previews.
    pub fn state(&self) -> CellState {
        self.disk.map(|disk| *disk.color()).into()
    }
}

/// N×N interactive cells plus the "move submitted" notification channel.
#[derive(Debug)]
pub struct GridView {
    cells: [[CellView; GRID_SIZE]; GRID_SIZE],
    submissions: mpsc::UnboundedSender<Position>,
}

impl GridView {
    /// Creates an empty, fully ineligible grid and the receiving end of its
    /// move-submitted notifications.
    #[instrument]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Position>) {
        let (submissions, rx) = mpsc::unbounded_channel();
        let grid = Self {
            cells: [[CellView::default(); GRID_SIZE]; GRID_SIZE],
            submissions,
        };
        (grid, rx)
    }

    /// Wraps this grid for sharing.
    pub fn into_shared(self) -> SharedGrid {
        Arc::new(Mutex::new(self))
    }

    /// The cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.row()][position.col()]
    }

    fn cell_mut(&mut self, position: Position) -> &mut CellView {
        &mut self.cells[position.row()][position.col()]
    }

    /// All cells with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &CellView)> {
        Position::all().map(move |position| (position, self.cell(position)))
    }

    /// Places a resting disk on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Occupied`] if the cell already holds a disk.
    #[instrument(skip(self))]
    pub fn place_disk(&mut self, position: Position, color: DiskColor) -> Result<(), GridError> {
        let cell = self.cell_mut(position);
        if cell.disk.is_some() {
            return Err(GridError::Occupied(position));
        }
        cell.disk = Some(DiskView::new(color));
        cell.preview = None;
        debug!(%position, %color, "Placed disk");
        Ok(())
    }

    /// Removes the disk from a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Vacant`] if the cell holds no disk.
    #[instrument(skip(self))]
    pub fn clear_disk(&mut self, position: Position) -> Result<(), GridError> {
        let cell = self.cell_mut(position);
        if cell.disk.take().is_none() {
            return Err(GridError::Vacant(position));
        }
        debug!(%position, "Cleared disk");
        Ok(())
    }

    /// Marks the disk at `position` as flipping.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Vacant`] if the cell holds no disk.
    pub fn begin_flip(&mut self, position: Position) -> Result<(), GridError> {
        let disk = self
            .cell_mut(position)
            .disk
            .as_mut()
            .ok_or(GridError::Vacant(position))?;
        disk.begin_flip();
        Ok(())
    }

    /// Completes the flip of the disk at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Vacant`] if the cell holds no disk.
    pub fn finish_flip(&mut self, position: Position) -> Result<(), GridError> {
        let disk = self
            .cell_mut(position)
            .disk
            .as_mut()
            .ok_or(GridError::Vacant(position))?;
        disk.finish_flip();
        Ok(())
    }

    /// Whether any disk is mid-flip.
    pub fn is_flipping(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| cell.disk.is_some_and(|disk| *disk.flipping()))
    }

    /// Makes exactly the given positions eligible; every other cell is closed.
    #[instrument(skip(self, eligible), fields(count = eligible.len()))]
    pub fn set_eligible(&mut self, eligible: &HashSet<Position>) {
        for position in Position::all() {
            let cell = self.cell_mut(position);
            cell.eligible = eligible.contains(&position);
            if !cell.eligible {
                cell.preview = None;
            }
        }
    }

    /// Marks every cell ineligible and drops hover previews.
    pub fn close_eligibility(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.eligible = false;
            cell.preview = None;
        }
    }

    /// Whether the human may play at `position`.
    pub fn is_eligible(&self, position: Position) -> bool {
        self.cell(position).eligible
    }

    /// Positions currently open to the human, row-major.
    pub fn eligible_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.eligible)
            .map(|(position, _)| position)
            .collect()
    }

    /// Pointer entered a cell: preview the human's disk if it could go there.
    pub fn hover(&mut self, position: Position) {
        let cell = self.cell_mut(position);
        if cell.disk.is_none() && cell.eligible {
            cell.preview = Some(Player::Human.disk());
        }
    }

    /// Pointer left a cell: drop any preview.
    pub fn unhover(&mut self, position: Position) {
        self.cell_mut(position).preview = None;
    }

    /// Emits a "move submitted" notification for `position`.
    ///
    /// The grid does not judge the move; the engine drops submissions for
    /// ineligible cells or that arrive while input is closed.
    #[instrument(skip(self))]
    pub fn submit(&self, position: Position) {
        debug!(%position, "Move submitted");
        if self.submissions.send(position).is_err() {
            debug!(%position, "No engine listening for submissions");
        }
    }

    /// Looks up a cell by its `"row,col"` key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is malformed or outside the grid.
    pub fn find(&self, key: &str) -> Result<Position, SyncError> {
        Position::from_key(key)
    }

    /// The committed board, ignoring previews and in-progress flips.
    pub fn snapshot(&self) -> Snapshot {
        Position::all().fold(Snapshot::empty(), |snapshot, position| {
            snapshot.with(position, self.cell(position).state())
        })
    }
}

impl std::fmt::Display for GridView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
