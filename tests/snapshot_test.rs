//! Tests for the board snapshot text codec.

use desdemona::{CellState, DiskColor, Position, Snapshot};
use strum::IntoEnumIterator;

const OPENING: &str = "EEEEEEEE\nEEEEEEEE\nEEEEEEEE\nEEELDEEE\nEEEDLEEE\nEEEEEEEE\nEEEEEEEE\nEEEEEEEE";

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn test_parse_standard_opening() {
    let snapshot = Snapshot::parse(OPENING).unwrap();
    assert_eq!(snapshot, Snapshot::standard_opening());
    assert_eq!(snapshot.get(pos(3, 3)), CellState::Occupied(DiskColor::Light));
    assert_eq!(snapshot.get(pos(3, 4)), CellState::Occupied(DiskColor::Dark));
    assert_eq!(snapshot.get(pos(0, 0)), CellState::Empty);
    for color in DiskColor::iter() {
        assert_eq!(snapshot.count(color), 2);
    }
}

#[test]
fn test_serialize_has_no_trailing_line_break() {
    let text = Snapshot::standard_opening().serialize();
    assert_eq!(text, OPENING);
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_round_trip_preserves_snapshots() {
    let boards = [
        Snapshot::empty(),
        Snapshot::standard_opening(),
        Position::all().fold(Snapshot::empty(), |board, p| {
            let state = match (p.row() + p.col()) % 3 {
                0 => CellState::Empty,
                1 => CellState::Occupied(DiskColor::Dark),
                _ => CellState::Occupied(DiskColor::Light),
            };
            board.with(p, state)
        }),
    ];
    for board in boards {
        assert_eq!(Snapshot::parse(&board.serialize()).unwrap(), board);
    }
}

#[test]
fn test_unknown_characters_are_empty() {
    let text = OPENING.replace('E', ".").replacen('.', "x", 1);
    assert_eq!(Snapshot::parse(&text).unwrap(), Snapshot::standard_opening());
}

#[test]
fn test_trailing_newline_and_crlf_accepted() {
    let crlf = format!("{}\r\n", OPENING.replace('\n', "\r\n"));
    assert_eq!(Snapshot::parse(&crlf).unwrap(), Snapshot::standard_opening());
}

#[test]
fn test_wrong_dimensions_are_malformed() {
    let short_row = OPENING.replacen("EEEEEEEE", "EEEEEEE", 1);
    let err = Snapshot::parse(&short_row).unwrap_err();
    assert!(err.message.contains("row 0"));

    let missing_row = OPENING.rsplit_once('\n').unwrap().0;
    assert!(Snapshot::parse(missing_row).is_err());

    let extra_row = format!("{}\nEEEEEEEE", OPENING);
    assert!(Snapshot::parse(&extra_row).is_err());

    assert!(Snapshot::parse("").is_err());
}

#[test]
fn test_set_and_count() {
    let mut board = Snapshot::empty();
    board.set(pos(0, 0), CellState::Occupied(DiskColor::Dark));
    board.set(pos(7, 7), CellState::Occupied(DiskColor::Dark));
    board.set(pos(7, 7), CellState::Empty);
    assert_eq!(board.count(DiskColor::Dark), 1);
    assert_eq!(board.count(DiskColor::Light), 0);
}
