//! Turn flow between the grid view and the decision service.

mod animator;
mod observer;
mod phase;
mod reconcile;
mod session;

pub use animator::{FlipAnimator, InstantAnimator, PacedAnimator};
pub use observer::{ChannelObserver, SessionEvent, SessionObserver};
pub use phase::{EngineSettings, PendingAnimation, Phase};
pub use reconcile::{Flip, ReconcilePlan, Wave, reconcile};
pub use session::SyncEngine;
