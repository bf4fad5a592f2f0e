//! Tests for grid coordinates, adjacency and distance.

use desdemona::{GRID_SIZE, Position, SyncError};

#[test]
fn test_every_in_range_position_is_valid() {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let position = Position::new(row, col).unwrap();
            assert_eq!((position.row(), position.col()), (row, col));
        }
    }
    assert_eq!(Position::all().count(), GRID_SIZE * GRID_SIZE);
}

#[test]
fn test_out_of_range_position_fails() {
    let err = Position::new(GRID_SIZE, 0).unwrap_err();
    assert_eq!((err.row, err.col), (GRID_SIZE, 0));
    assert!(Position::new(0, GRID_SIZE).is_err());
    assert!(Position::new(GRID_SIZE + 3, GRID_SIZE + 3).is_err());
    assert!(err.to_string().contains("outside"));
}

#[test]
fn test_neighbour_counts() {
    let count = |row, col| Position::new(row, col).unwrap().neighbours().count();

    for (row, col) in [(0, 0), (0, 7), (7, 0), (7, 7)] {
        assert_eq!(count(row, col), 3, "corner ({}, {})", row, col);
    }
    for (row, col) in [(0, 3), (7, 4), (2, 0), (5, 7)] {
        assert_eq!(count(row, col), 5, "edge ({}, {})", row, col);
    }
    for (row, col) in [(1, 1), (3, 4), (6, 6)] {
        assert_eq!(count(row, col), 8, "interior ({}, {})", row, col);
    }
}

#[test]
fn test_neighbours_are_row_major_and_adjacent() {
    let center = Position::new(4, 4).unwrap();
    let neighbours: Vec<String> = center.neighbours().map(Position::key).collect();
    assert_eq!(
        neighbours,
        ["3,3", "3,4", "3,5", "4,3", "4,5", "5,3", "5,4", "5,5"]
    );
    assert!(center.neighbours().all(|n| center.distance(n) == 1));
}

#[test]
fn test_distance_is_symmetric_chebyshev() {
    for p in Position::all() {
        assert_eq!(p.distance(p), 0);
        for q in Position::all() {
            assert_eq!(p.distance(q), q.distance(p));
        }
    }
    let a = Position::new(2, 2).unwrap();
    assert_eq!(a.distance(Position::new(2, 4).unwrap()), 2);
    assert_eq!(a.distance(Position::new(5, 3).unwrap()), 3);
    assert_eq!(a.distance(Position::new(7, 7).unwrap()), 5);
}

#[test]
fn test_key_round_trip() {
    let position: Position = "5,2".parse().unwrap();
    assert_eq!(position, Position::new(5, 2).unwrap());
    assert_eq!(position.key(), "5,2");
    assert_eq!(position.to_string(), "5,2");
    assert_eq!(Position::from_key(" 0 , 7 ").unwrap(), Position::new(0, 7).unwrap());
}

#[test]
fn test_bad_keys_are_rejected() {
    assert!(matches!(
        Position::from_key("3;4"),
        Err(SyncError::MalformedSnapshot(_))
    ));
    assert!(matches!(
        Position::from_key("a,1"),
        Err(SyncError::MalformedSnapshot(_))
    ));
    assert!(matches!(
        Position::from_key("8,1"),
        Err(SyncError::OutOfRange(_))
    ));
}

#[test]
fn test_breadth_first_covers_grid_in_distance_order() {
    let origin = Position::new(2, 5).unwrap();
    let order: Vec<Position> = Position::breadth_first(origin).collect();

    assert_eq!(order.len(), GRID_SIZE * GRID_SIZE);
    assert_eq!(order[0], origin);
    assert!(
        order
            .windows(2)
            .all(|pair| origin.distance(pair[0]) <= origin.distance(pair[1]))
    );
}
