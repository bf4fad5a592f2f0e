//! Diffing two snapshots into immediate edits and ordered flip waves.
//!
//! Flips are grouped by Chebyshev distance from the cell just played, so
//! captured disks turn over outward from the move like a chain reaction.

use crate::board::{CellState, DiskColor, Position, Snapshot};
use derive_new::new;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// One disk turning over to a new color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Flip {
    /// Cell whose disk flips.
    pub position: Position,
    /// Color after the flip.
    pub to: DiskColor,
}

/// Flips triggered together because they share a distance from the origin.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Wave {
    /// Distance from the origin shared by every flip in the wave.
    pub distance: u32,
    /// Flips in traversal order.
    pub flips: Vec<Flip>,
}

/// Everything needed to move the grid from one snapshot to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconcilePlan {
    /// Cells to empty immediately.
    pub clears: Vec<Position>,
    /// Disks to place immediately.
    pub placements: Vec<(Position, DiskColor)>,
    /// Flip waves in ascending distance.
    pub waves: Vec<Wave>,
}

impl ReconcilePlan {
    /// Total number of flips across all waves.
    pub fn flip_count(&self) -> usize {
        self.waves.iter().map(|wave| wave.flips.len()).sum()
    }

    /// Whether applying the plan changes nothing.
    pub fn is_empty(&self) -> bool {
        self.clears.is_empty() && self.placements.is_empty() && self.waves.is_empty()
    }
}

/// Diffs `old` against `new` relative to the cell just played.
///
/// With an origin the grid is scanned breadth-first from it and flips are
/// bucketed by distance. Without one (the bot passed) every flip lands in a
/// single wave at distance 0.
#[instrument(skip(old, new))]
pub fn reconcile(old: &Snapshot, new: &Snapshot, origin: Option<Position>) -> ReconcilePlan {
    let scan: Box<dyn Iterator<Item = Position>> = match origin {
        Some(origin) => Box::new(Position::breadth_first(origin)),
        None => Box::new(Position::all()),
    };

    let mut plan = ReconcilePlan::default();
    let mut buckets: BTreeMap<u32, Vec<Flip>> = BTreeMap::new();

    for position in scan {
        match (old.get(position), new.get(position)) {
            (CellState::Occupied(_), CellState::Empty) => plan.clears.push(position),
            (CellState::Empty, CellState::Occupied(color)) => {
                plan.placements.push((position, color))
            }
            (CellState::Occupied(before), CellState::Occupied(after)) if before != after => {
                let distance = origin.map_or(0, |origin| origin.distance(position));
                buckets
                    .entry(distance)
                    .or_default()
                    .push(Flip::new(position, after));
            }
            _ => {}
        }
    }

    plan.waves = buckets
        .into_iter()
        .map(|(distance, flips)| Wave::new(distance, flips))
        .collect();

    debug!(
        clears = plan.clears.len(),
        placements = plan.placements.len(),
        waves = plan.waves.len(),
        flips = plan.flip_count(),
        "Reconciled snapshots"
    );
    plan
}
