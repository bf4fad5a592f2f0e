//! Error taxonomy for the session engine.
//!
//! Every concrete error records the source location that raised it, so a
//! failure surfaced to the player can be traced back without a backtrace.

use crate::board::{GRID_SIZE, Position};
use derive_more::{Display, Error, From};
use tracing::{error, instrument};

/// A position was constructed outside the grid bounds.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Position ({}, {}) is outside the {}x{} grid at {}:{}",
    row,
    col,
    GRID_SIZE,
    GRID_SIZE,
    file,
    line
)]
pub struct OutOfRangeError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl OutOfRangeError {
    /// Creates a new out-of-range error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, col: usize) -> Self {
        let loc = std::panic::Location::caller();
        error!(row, col, "Position out of range");
        Self {
            row,
            col,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A snapshot (or a position key) did not decode to a well-formed grid value.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Malformed snapshot: {} at {}:{}", message, file, line)]
pub struct MalformedSnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MalformedSnapshotError {
    /// Creates a new malformed-snapshot error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(error_message = %message, "Malformed snapshot");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A call to the decision service did not complete successfully.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(error_message = %message, "Transport error");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(format!("Request timed out: {}", err))
        } else {
            Self::new(format!("HTTP error: {}", err))
        }
    }
}

/// A move submission arrived when the engine could not accept it.
///
/// Never surfaced to the player: duplicate or stale UI events are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid transition: {} at {}:{}", message, file, line)]
pub struct InvalidTransitionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidTransitionError {
    /// Creates a new invalid-transition error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A grid mutation that contradicts the cell's committed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridError {
    /// A disk was placed on a cell that already holds one.
    #[display("Cell {} is occupied by another disk", _0)]
    Occupied(Position),

    /// A disk was cleared or flipped on a cell that holds none.
    #[display("There is no disk on cell {}", _0)]
    Vacant(Position),
}

impl std::error::Error for GridError {}

/// Errors that abort the in-flight turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SyncError {
    /// A position outside the grid.
    #[display("{}", _0)]
    OutOfRange(OutOfRangeError),

    /// The service sent something that does not decode to a grid.
    #[display("{}", _0)]
    MalformedSnapshot(MalformedSnapshotError),

    /// The service could not be reached or answered with a failure.
    #[display("{}", _0)]
    Transport(TransportError),

    /// The grid view disagrees with the snapshot being applied.
    #[display("Lost synchronization: {}", _0)]
    Grid(GridError),

    /// The session cannot make progress any more.
    #[display("Session closed")]
    #[from(ignore)]
    SessionClosed,
}

impl From<reqwest::Error> for SyncError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::from(err))
    }
}
