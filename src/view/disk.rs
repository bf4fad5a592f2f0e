//! Visual bookkeeping for a single disk.

use crate::board::DiskColor;
use derive_getters::Getters;
use tracing::instrument;

/// A disk as displayed: its committed color and whether it is mid-flip.
///
/// While `flipping` is set the disk still reports its pre-flip color; the
/// color switches only when the flip animation reports completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct DiskView {
    color: DiskColor,
    flipping: bool,
}

impl DiskView {
    /// A freshly placed, resting disk.
    #[instrument]
    pub fn new(color: DiskColor) -> Self {
        Self {
            color,
            flipping: false,
        }
    }

    /// Marks the disk as animating a flip.
    pub fn begin_flip(&mut self) {
        self.flipping = true;
    }

    /// Completes a flip: switches to the opposite color and comes to rest.
    pub fn finish_flip(&mut self) {
        self.color = self.color.opposite();
        self.flipping = false;
    }
}
