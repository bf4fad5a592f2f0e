//! Desdemona - client-side session synchronization for Othello
//!
//! Keeps an animated 8×8 board in step with a remote decision service that
//! owns the game rules and the bot player.
//!
//! # Architecture
//!
//! - **Board**: positions, disk colors and immutable grid snapshots
//! - **View**: the animated grid the engine mutates and the UI renders
//! - **Service**: the decision service contract and its HTTP client
//! - **Engine**: the turn-flow state machine and snapshot reconciliation
//!
//! # Example
//!
//! ```no_run
//! use desdemona::{HttpDecisionClient, InstantAnimator, SessionConfig, SyncEngine};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = SessionConfig::default();
//! let service = HttpDecisionClient::new(config.service_url(), config.request_timeout())?;
//! let mut engine = SyncEngine::new(service, InstantAnimator, config.engine_settings());
//! let outcome = engine.run().await?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod engine;
mod error;
mod player;
mod service;
mod view;

// Crate-level exports - Board primitives
pub use board::{
    BreadthFirst, CellState, DARK_CHAR, DiskColor, EMPTY_CHAR, GRID_SIZE, LIGHT_CHAR, Neighbours,
    Position, Snapshot,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, SERVICE_URL_ENV, SessionConfig};

// Crate-level exports - Engine
pub use engine::{
    ChannelObserver, EngineSettings, Flip, FlipAnimator, InstantAnimator, PacedAnimator,
    PendingAnimation, Phase, ReconcilePlan, SessionEvent, SessionObserver, SyncEngine, Wave,
    reconcile,
};

// Crate-level exports - Errors
pub use error::{
    GridError, InvalidTransitionError, MalformedSnapshotError, OutOfRangeError, SyncError,
    TransportError,
};

// Crate-level exports - Players
pub use player::{BOT_CHAR, HUMAN_CHAR, Outcome, Player};

// Crate-level exports - Decision service
pub use service::{Decision, DecisionService, HttpDecisionClient, Resolution};

// Crate-level exports - Grid view
pub use view::{CellView, DiskView, GridView, SharedGrid, lock_grid};
