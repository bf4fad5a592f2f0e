//! The synchronization engine: one session's turn cycle.
//!
//! Human move → service resolution → animation → bot decision → service
//! resolution → animation → legal-move query, repeated until the service
//! declares a winner. Exactly one service call or animation sequence is in
//! flight at a time; grid eligibility is the interlock that keeps a second
//! human submission out while one is being resolved.

use super::animator::FlipAnimator;
use super::observer::SessionObserver;
use super::phase::{EngineSettings, PendingAnimation, Phase};
use super::reconcile::{ReconcilePlan, Wave, reconcile};
use crate::board::{Position, Snapshot};
use crate::error::{InvalidTransitionError, SyncError};
use crate::player::{Outcome, Player};
use crate::service::DecisionService;
use crate::view::{GridView, SharedGrid, lock_grid};
use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Drives one game session against a decision service.
pub struct SyncEngine<S, A> {
    service: S,
    animator: A,
    settings: EngineSettings,
    grid: SharedGrid,
    submissions: mpsc::UnboundedReceiver<Position>,
    displayed: Snapshot,
    phase: Phase,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<S, A> SyncEngine<S, A>
where
    S: DecisionService,
    A: FlipAnimator,
{
    /// Creates an engine with a fresh, empty grid.
    #[instrument(skip(service, animator))]
    pub fn new(service: S, animator: A, settings: EngineSettings) -> Self {
        let (grid, submissions) = GridView::new();
        info!("Creating session engine");
        Self {
            service,
            animator,
            settings,
            grid: grid.into_shared(),
            submissions,
            displayed: Snapshot::empty(),
            phase: Phase::Initializing,
            observers: Vec::new(),
        }
    }

    /// Registers a presentation collaborator.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// The grid view, for renderers and input handlers.
    pub fn grid(&self) -> SharedGrid {
        SharedGrid::clone(&self.grid)
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The board last committed to the grid.
    pub fn displayed(&self) -> &Snapshot {
        &self.displayed
    }

    /// Steps until the game ends.
    ///
    /// # Errors
    ///
    /// Returns the error that stalled the session. Observers have already
    /// been told through [`SessionObserver::failed`].
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome, SyncError> {
        info!("Starting session");
        loop {
            if let Phase::GameOver(outcome) = self.step().await? {
                return Ok(*outcome);
            }
        }
    }

    /// Performs exactly one transition and returns the new phase.
    ///
    /// In [`Phase::AwaitingHumanMove`] this waits for the next eligible
    /// submission from the grid. A finished game stays finished; a failed
    /// session stays stalled.
    ///
    /// # Errors
    ///
    /// Any service, parsing or grid failure aborts the turn, moves the engine
    /// to [`Phase::Failed`] and notifies observers. Stepping a failed engine
    /// returns [`SyncError::SessionClosed`].
    pub async fn step(&mut self) -> Result<&Phase, SyncError> {
        if matches!(self.phase, Phase::GameOver(_)) {
            return Ok(&self.phase);
        }
        if matches!(self.phase, Phase::Failed) {
            return Err(SyncError::SessionClosed);
        }

        let from = self.phase.name();
        match self.advance().await {
            Ok(next) => {
                debug!(from, to = next.name(), "Phase transition");
                self.phase = next;
                Ok(&self.phase)
            }
            Err(error) => {
                warn!(from, error = %error, "Turn failed; session stalled");
                self.phase = Phase::Failed;
                self.notify(|observer| observer.failed(&error));
                Err(error)
            }
        }
    }

    /// Handles a "move submitted" notification directly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] (and changes nothing) unless the
    /// engine is awaiting a human move and `position` is eligible.
    pub fn submit(&mut self, position: Position) -> Result<(), InvalidTransitionError> {
        self.accept(position)?;
        self.phase = Phase::ResolvingMove(position);
        Ok(())
    }

    async fn advance(&mut self) -> Result<Phase, SyncError> {
        match self.phase.clone() {
            Phase::Initializing => self.initialize().await,
            Phase::AwaitingActions => self.open_actions().await,
            Phase::AwaitingHumanMove => self.await_human_move().await,
            Phase::ResolvingMove(position) => self.resolve_move(position).await,
            Phase::ThinkingBot => Ok(self.think()),
            Phase::ResolvingBotMove => self.resolve_bot_move().await,
            Phase::Animating(pending) => self.animate(pending).await,
            Phase::GameOver(outcome) => Ok(Phase::GameOver(outcome)),
            Phase::Failed => Err(SyncError::SessionClosed),
        }
    }

    /// Fetches the initial board and paints it without animation.
    #[instrument(skip(self))]
    async fn initialize(&mut self) -> Result<Phase, SyncError> {
        let initial = self.service.initial_board().await?;
        let plan = reconcile(&self.displayed, &initial, None);
        Self::paint(&mut lock_grid(&self.grid), &plan)?;
        self.displayed = initial;
        info!("Painted initial board");
        self.notify(|observer| observer.board_settled(&initial));
        Ok(Phase::AwaitingActions)
    }

    /// Opens input on the human's legal cells, or passes to the bot.
    #[instrument(skip(self))]
    async fn open_actions(&mut self) -> Result<Phase, SyncError> {
        let actions = self.service.actions(&self.displayed, Player::Human).await?;
        if actions.is_empty() {
            info!("Human has no actions to take this turn");
            self.notify(|observer| observer.passed(Player::Human));
            return Ok(Phase::ThinkingBot);
        }

        let eligible = {
            let mut grid = lock_grid(&self.grid);
            let mut stale = 0;
            while self.submissions.try_recv().is_ok() {
                stale += 1;
            }
            if stale > 0 {
                debug!(stale, "Discarded submissions made while input was closed");
            }
            grid.set_eligible(&actions);
            grid.eligible_positions()
        };

        info!(count = eligible.len(), "Awaiting human move");
        self.notify(|observer| observer.awaiting_move(&eligible));
        Ok(Phase::AwaitingHumanMove)
    }

    async fn await_human_move(&mut self) -> Result<Phase, SyncError> {
        loop {
            let position = self
                .submissions
                .recv()
                .await
                .ok_or(SyncError::SessionClosed)?;
            match self.accept(position) {
                Ok(()) => return Ok(Phase::ResolvingMove(position)),
                Err(rejected) => warn!(%rejected, "Dropped submission"),
            }
        }
    }

    /// Guards a submission and, if accepted, closes the input window.
    fn accept(&self, position: Position) -> Result<(), InvalidTransitionError> {
        if !matches!(self.phase, Phase::AwaitingHumanMove) {
            return Err(InvalidTransitionError::new(format!(
                "move {} submitted while {}",
                position,
                self.phase.name()
            )));
        }

        let mut grid = lock_grid(&self.grid);
        if !grid.is_eligible(position) {
            return Err(InvalidTransitionError::new(format!(
                "cell {} is not eligible",
                position
            )));
        }
        grid.close_eligibility();
        info!(%position, "Accepted human move");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn resolve_move(&mut self, position: Position) -> Result<Phase, SyncError> {
        let resolution = self
            .service
            .result(&self.displayed, Player::Human, position)
            .await?;
        Ok(Phase::Animating(PendingAnimation::new(
            Player::Human,
            resolution.snapshot,
            Some(position),
            resolution.outcome,
        )))
    }

    fn think(&self) -> Phase {
        info!("Bot is thinking");
        self.notify(|observer| observer.thinking());
        Phase::ResolvingBotMove
    }

    #[instrument(skip(self))]
    async fn resolve_bot_move(&mut self) -> Result<Phase, SyncError> {
        let decision = self
            .service
            .decide(&self.displayed, self.settings.difficulty)
            .await?;

        self.notify(|observer| observer.decided(decision.choice));
        match decision.choice {
            Some(position) => info!(%position, "Bot decided"),
            None if decision.resolution.is_terminal() => info!("Bot has no move; game is over"),
            None => {
                info!("Bot has no actions to take this turn");
                self.notify(|observer| observer.passed(Player::Bot));
            }
        }

        Ok(Phase::Animating(PendingAnimation::new(
            Player::Bot,
            decision.resolution.snapshot,
            decision.choice,
            decision.resolution.outcome,
        )))
    }

    /// Reconciles the grid to the resolved board, wave by wave, then hands
    /// the turn to the mover's opponent.
    #[instrument(skip(self, pending), fields(mover = %pending.mover, origin = ?pending.origin))]
    async fn animate(&mut self, pending: PendingAnimation) -> Result<Phase, SyncError> {
        let plan = reconcile(&self.displayed, &pending.target, pending.origin);
        Self::paint(&mut lock_grid(&self.grid), &plan)?;

        let mut previous: Option<u32> = None;
        for wave in &plan.waves {
            if previous.is_some_and(|distance| wave.distance > distance)
                && !self.settings.wave_pause.is_zero()
            {
                tokio::time::sleep(self.settings.wave_pause).await;
            }
            self.play_wave(wave).await?;
            previous = Some(wave.distance);
        }

        self.displayed = pending.target;
        self.notify(|observer| observer.board_settled(&pending.target));

        match pending.outcome {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.notify(|observer| observer.game_over(outcome));
                Ok(Phase::GameOver(outcome))
            }
            None => match pending.mover.opponent() {
                Player::Bot => Ok(Phase::ThinkingBot),
                Player::Human => Ok(Phase::AwaitingActions),
            },
        }
    }

    /// Triggers every flip in `wave` at once and waits for all to finish.
    async fn play_wave(&self, wave: &Wave) -> Result<(), SyncError> {
        {
            let mut grid = lock_grid(&self.grid);
            for flip in &wave.flips {
                grid.begin_flip(flip.position)?;
            }
        }

        debug!(distance = wave.distance, count = wave.flips.len(), "Flipping wave");
        join_all(
            wave.flips
                .iter()
                .map(|flip| self.animator.flip(flip.position, flip.to)),
        )
        .await;

        let mut grid = lock_grid(&self.grid);
        for flip in &wave.flips {
            grid.finish_flip(flip.position)?;
        }
        Ok(())
    }

    /// Applies clears and placements immediately.
    fn paint(grid: &mut GridView, plan: &ReconcilePlan) -> Result<(), SyncError> {
        for &position in &plan.clears {
            grid.clear_disk(position)?;
        }
        for &(position, color) in &plan.placements {
            grid.place_disk(position, color)?;
        }
        Ok(())
    }

    fn notify(&self, event: impl Fn(&dyn SessionObserver)) {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }
}
