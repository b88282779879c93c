//! Snap decision rule
//!
//! Pure mapping from where a drag ended (offset) and how fast it was moving
//! (velocity) to the snap point the sheet should come to rest at.

/// One of the two resting positions a sheet animates toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapPoint {
    /// Fully open, offset `0`
    Expanded,
    /// Minimum visible height, offset `range`
    Collapsed,
}

impl SnapPoint {
    /// The offset this snap point rests at for the given travel range
    pub fn offset(&self, range: f32) -> f32 {
        match self {
            SnapPoint::Expanded => 0.0,
            SnapPoint::Collapsed => range,
        }
    }
}

/// Thresholds governing the end-of-drag snap decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRule {
    /// Velocities below this value (negative = upward) count as a fling
    /// and expand the sheet regardless of position
    pub fling_threshold: f32,
    /// Fraction of the travel range; offsets under `range * snap_ratio`
    /// (sheet already mostly open) expand on position alone
    pub snap_ratio: f32,
}

impl Default for SnapRule {
    fn default() -> Self {
        Self {
            fling_threshold: -500.0,
            snap_ratio: 0.5,
        }
    }
}

impl SnapRule {
    /// Decide the snap point for a drag that ended at `offset` moving at
    /// `velocity`.
    ///
    /// Two independent triggers, combined with OR: an upward fling faster
    /// than `fling_threshold`, or an offset already under
    /// `range * snap_ratio`. Both comparisons are strict, so a drag ending
    /// exactly at the midpoint with no velocity collapses, and a fast
    /// downward fling never forces a collapse on its own; position still
    /// decides.
    pub fn decide(&self, offset: f32, velocity: f32, range: f32) -> SnapPoint {
        if velocity < self.fling_threshold || offset < range * self.snap_ratio {
            SnapPoint::Expanded
        } else {
            SnapPoint::Collapsed
        }
    }
}
