//! Shared fixtures: a scripted decision service and board helpers.

#![allow(dead_code)]

use desdemona::{
    CellState, Decision, DecisionService, DiskColor, Player, Position, Resolution, SessionEvent,
    Snapshot, SyncError, TransportError,
};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A request the engine made, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    InitialBoard,
    Result {
        board: Snapshot,
        player: Player,
        position: Position,
    },
    Actions {
        board: Snapshot,
        player: Player,
    },
    Decide {
        board: Snapshot,
        difficulty: u32,
    },
}

#[derive(Default)]
struct Script {
    initial: VecDeque<Result<Snapshot, SyncError>>,
    results: VecDeque<Result<Resolution, SyncError>>,
    actions: VecDeque<Result<HashSet<Position>, SyncError>>,
    decisions: VecDeque<Result<Decision, SyncError>>,
}

/// Answers each operation from a queue; an exhausted queue is a transport error.
#[derive(Clone, Default)]
pub struct ScriptedService {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedService {
    pub fn new(initial: Snapshot) -> Self {
        let service = Self::default();
        service.script.lock().unwrap().initial.push_back(Ok(initial));
        service
    }

    pub fn with_actions(self, actions: &[Position]) -> Self {
        self.script
            .lock()
            .unwrap()
            .actions
            .push_back(Ok(actions.iter().copied().collect()));
        self
    }

    pub fn with_result(self, snapshot: Snapshot, outcome: Option<desdemona::Outcome>) -> Self {
        self.script
            .lock()
            .unwrap()
            .results
            .push_back(Ok(Resolution::new(snapshot, outcome)));
        self
    }

    pub fn with_decision(
        self,
        choice: Option<Position>,
        snapshot: Snapshot,
        outcome: Option<desdemona::Outcome>,
    ) -> Self {
        self.script
            .lock()
            .unwrap()
            .decisions
            .push_back(Ok(Decision::new(choice, Resolution::new(snapshot, outcome))));
        self
    }

    pub fn with_result_failure(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .results
            .push_back(Err(TransportError::new(message).into()));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn exhausted(operation: &str) -> SyncError {
    TransportError::new(format!("no scripted response for {}", operation)).into()
}

#[async_trait::async_trait]
impl DecisionService for ScriptedService {
    async fn initial_board(&self) -> Result<Snapshot, SyncError> {
        self.record(Call::InitialBoard);
        let next = self.script.lock().unwrap().initial.pop_front();
        next.unwrap_or_else(|| Err(exhausted("initial_board")))
    }

    async fn result(
        &self,
        board: &Snapshot,
        player: Player,
        position: Position,
    ) -> Result<Resolution, SyncError> {
        self.record(Call::Result {
            board: *board,
            player,
            position,
        });
        let next = self.script.lock().unwrap().results.pop_front();
        next.unwrap_or_else(|| Err(exhausted("result")))
    }

    async fn actions(
        &self,
        board: &Snapshot,
        player: Player,
    ) -> Result<HashSet<Position>, SyncError> {
        self.record(Call::Actions {
            board: *board,
            player,
        });
        let next = self.script.lock().unwrap().actions.pop_front();
        next.unwrap_or_else(|| Err(exhausted("actions")))
    }

    async fn decide(&self, board: &Snapshot, difficulty: u32) -> Result<Decision, SyncError> {
        self.record(Call::Decide {
            board: *board,
            difficulty,
        });
        let next = self.script.lock().unwrap().decisions.pop_front();
        next.unwrap_or_else(|| Err(exhausted("decide")))
    }
}

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

pub fn dark() -> CellState {
    CellState::Occupied(DiskColor::Dark)
}

pub fn light() -> CellState {
    CellState::Occupied(DiskColor::Light)
}

/// Opening after dark (the human) plays (2,3), flipping (3,3).
pub fn after_human_opening() -> Snapshot {
    Snapshot::standard_opening()
        .with(pos(2, 3), dark())
        .with(pos(3, 3), dark())
}

/// Then light (the bot) plays (2,2), flipping (3,3) back.
pub fn after_bot_reply() -> Snapshot {
    after_human_opening()
        .with(pos(2, 2), light())
        .with(pos(3, 3), light())
}

/// Drains every event delivered so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
