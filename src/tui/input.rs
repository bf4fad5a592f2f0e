//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use desdemona::{GRID_SIZE, Position};

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(GRID_SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(GRID_SIZE - 1)),
        _ => return cursor,
    };
    Position::new(row, col).unwrap_or(cursor)
}
